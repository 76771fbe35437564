//! Boot against capable and incapable hosts.

use ascend_dom::{Capabilities, Document};
use ascend_handler::*;
use ascend_test_utils::{Journal, Probe, fixture};

#[test]
fn test_boot_enables_and_upgrades_document() {
    let journal = Journal::new();
    let mut handler = ComponentHandler::new();
    handler.register(Probe::registration("A", "js-a", &journal)).unwrap();
    let mut doc = Document::new();
    let el = fixture::element(&mut doc, &["js-a"]);
    assert_eq!(handler.state(), EngineState::Pending);

    assert_eq!(handler.boot(&mut doc), Ok(BootOutcome::Enabled));

    let root = doc.document_element();
    assert!(doc.has_class(root, "js-upgraded"));
    assert_eq!(handler.state(), EngineState::Enabled);
    assert_eq!(journal.constructed("A"), vec![el]);
}

#[test]
fn test_second_boot_does_nothing() {
    let journal = Journal::new();
    let mut handler = ComponentHandler::new();
    handler.register(Probe::registration("A", "js-a", &journal)).unwrap();
    let mut doc = Document::new();
    handler.boot(&mut doc).unwrap();

    fixture::element(&mut doc, &["js-a"]);
    assert_eq!(handler.boot(&mut doc), Ok(BootOutcome::AlreadyBooted));
    assert!(journal.is_empty());
}

#[test]
fn test_missing_capabilities_disable_engine() {
    let journal = Journal::new();
    let mut handler = ComponentHandler::new();
    handler.register(Probe::registration("A", "js-a", &journal)).unwrap();
    let mut doc = Document::new().with_capabilities(Capabilities::QUERY_SELECTOR);
    let el = fixture::element(&mut doc, &["js-a"]);

    let outcome = handler.boot(&mut doc).unwrap();

    assert_eq!(
        outcome,
        BootOutcome::Disabled {
            missing: Capabilities::all().difference(Capabilities::QUERY_SELECTOR)
        }
    );
    assert!(!handler.is_enabled());
    assert!(!doc.has_class(doc.document_element(), "js-upgraded"));
    assert!(journal.is_empty());

    // Everything afterwards is inert.
    assert_eq!(handler.register(Probe::registration("B", "js-b", &journal)), Ok(None));
    assert_eq!(handler.registry().names(), vec!["A"]);
    handler.upgrade_element(&mut doc, el, None).unwrap();
    assert_eq!(doc.attribute(el, "data-upgraded"), None);
    assert!(journal.is_empty());
}

#[test]
fn test_pending_engine_upgrades_normally() {
    let journal = Journal::new();
    let mut handler = ComponentHandler::new();
    handler.register(Probe::registration("A", "js-a", &journal)).unwrap();
    let mut doc = Document::new();
    let el = fixture::element(&mut doc, &["js-a"]);

    handler.upgrade_element(&mut doc, el, None).unwrap();

    assert!(handler.is_enabled());
    assert_eq!(journal.constructed("A"), vec![el]);
}

#[test]
fn test_relaxed_requirements_boot_on_limited_host() {
    let journal = Journal::new();
    let config = HandlerConfig::default()
        .with_required_capabilities(Capabilities::QUERY_SELECTOR | Capabilities::ATTRIBUTES)
        .with_scripting_class("has-js");
    let mut handler = ComponentHandler::with_config(config);
    handler.register(Probe::registration("A", "js-a", &journal)).unwrap();
    let mut doc = Document::new()
        .with_capabilities(Capabilities::QUERY_SELECTOR | Capabilities::ATTRIBUTES);

    assert_eq!(handler.boot(&mut doc), Ok(BootOutcome::Enabled));
    assert!(doc.has_class(doc.document_element(), "has-js"));
}
