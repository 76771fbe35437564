//! Registration rules and upgrade callbacks.

use ascend_handler::*;
use ascend_test_utils::{Composite, Journal, JournalEntry, Probe, fixture};
use ascend_dom::Document;

#[test]
fn test_register_appends_in_order() {
    let journal = Journal::new();
    let mut handler = ComponentHandler::new();

    assert_eq!(
        handler.register(Probe::registration("A", "js-a", &journal)),
        Ok(Some(Registered::Appended(0)))
    );
    assert_eq!(
        handler.register(Probe::registration("B", "js-b", &journal)),
        Ok(Some(Registered::Appended(1)))
    );
    assert_eq!(handler.registry().names(), vec!["A", "B"]);
}

#[test]
fn test_same_name_same_type_replaces_in_place() {
    let first = Journal::new();
    let second = Journal::new();
    let mut handler = ComponentHandler::new();
    handler.register(Probe::registration("A", "js-a", &first)).unwrap();
    handler.register(Probe::registration("B", "js-b", &first)).unwrap();

    let replaced = handler.register(Probe::registration("A", "js-a", &second));
    assert_eq!(replaced, Ok(Some(Registered::Replaced(0))));
    assert_eq!(handler.registry().names(), vec!["A", "B"]);

    // The new factory is the one used.
    let mut doc = Document::new();
    let el = fixture::element(&mut doc, &["js-a"]);
    handler.upgrade_element(&mut doc, el, None).unwrap();
    assert!(first.constructed("A").is_empty());
    assert_eq!(second.constructed("A"), vec![el]);
}

#[test]
fn test_same_name_different_type_conflicts() {
    let journal = Journal::new();
    let mut handler = ComponentHandler::new();
    handler.register(Probe::registration("A", "js-a", &journal)).unwrap();

    let err = handler
        .register(Composite::registration("A", "js-a", "js-child", 1, &journal))
        .unwrap_err();
    assert!(matches!(
        err,
        HandlerError::RegistrationConflict {
            field: ConflictField::Name,
            ..
        }
    ));
    assert_eq!(handler.registry().len(), 1);
}

#[test]
fn test_selector_owned_by_other_name_conflicts() {
    let journal = Journal::new();
    let mut handler = ComponentHandler::new();
    handler.register(Probe::registration("A", "js-shared", &journal)).unwrap();

    let err = handler
        .register(Probe::registration("B", "js-shared", &journal))
        .unwrap_err();
    assert_eq!(
        err,
        HandlerError::RegistrationConflict {
            field: ConflictField::Selector,
            name: "B".to_string(),
            existing: "A".to_string(),
        }
    );
    assert_eq!(handler.registry().names(), vec!["A"]);
}

#[test]
fn test_selector_conflict_ignores_class_order() {
    let journal = Journal::new();
    let mut handler = ComponentHandler::new();
    handler
        .register(Probe::registration("Button", ".js-button.js-ripple", &journal))
        .unwrap();

    let err = handler
        .register(Probe::registration("Ripple", ".js-ripple.js-button", &journal))
        .unwrap_err();
    assert!(matches!(
        err,
        HandlerError::RegistrationConflict {
            field: ConflictField::Selector,
            ..
        }
    ));
}

#[test]
fn test_linkage_key_name_rejected() {
    let journal = Journal::new();
    let mut handler = ComponentHandler::new();

    let err = handler
        .register(Probe::registration(INSTANCE_LINK_KEY, "js-link", &journal))
        .unwrap_err();
    assert!(matches!(
        err,
        HandlerError::RegistrationConflict {
            field: ConflictField::LinkageKey,
            ..
        }
    ));
    assert!(handler.registry().is_empty());
}

#[test]
fn test_malformed_names_and_selectors_rejected() {
    let journal = Journal::new();
    let mut handler = ComponentHandler::new();

    for name in ["", "a,b", "has space"] {
        let result = handler.register(Probe::registration(name, "js-x", &journal));
        assert!(
            matches!(result, Err(HandlerError::InvalidArgument { .. })),
            "{name:?} should be rejected"
        );
    }

    let result = handler.register(Probe::registration("X", "", &journal));
    assert!(matches!(result, Err(HandlerError::Dom(_))));
    assert!(handler.registry().is_empty());
}

#[test]
fn test_upgrade_callbacks_run_after_each_upgrade() {
    let journal = Journal::new();
    let mut handler = ComponentHandler::new();
    handler.register(Probe::registration("A", "js-a", &journal)).unwrap();

    let sink = journal.clone();
    assert!(handler.register_upgrade_callback("A", move |doc, element| {
        sink.record(JournalEntry::Callback {
            component: "A".to_string(),
            element,
        });
        doc.set_attribute(element, "data-seen", "yes").unwrap();
    }));

    let mut doc = Document::new();
    let first = fixture::element(&mut doc, &["js-a"]);
    let second = fixture::element(&mut doc, &["js-a"]);
    handler.upgrade_by_type(&mut doc, Some("A"), None).unwrap();

    assert_eq!(
        journal.entries(),
        vec![
            JournalEntry::Constructed { component: "A".to_string(), element: first },
            JournalEntry::Callback { component: "A".to_string(), element: first },
            JournalEntry::Constructed { component: "A".to_string(), element: second },
            JournalEntry::Callback { component: "A".to_string(), element: second },
        ]
    );
    assert_eq!(doc.attribute(second, "data-seen"), Some("yes"));
}

#[test]
fn test_callback_for_unknown_component_is_ignored() {
    let mut handler = ComponentHandler::new();
    assert!(!handler.register_upgrade_callback("Missing", |_, _| {}));
    assert!(handler.registry().is_empty());
}

#[test]
fn test_replace_resets_callbacks() {
    let journal = Journal::new();
    let mut handler = ComponentHandler::new();
    handler.register(Probe::registration("A", "js-a", &journal)).unwrap();
    handler.register_upgrade_callback("A", |_, _| {});
    assert_eq!(handler.registry().find_by_name("A").unwrap().callbacks().len(), 1);

    handler.register(Probe::registration("A", "js-a", &journal)).unwrap();
    assert!(handler.registry().find_by_name("A").unwrap().callbacks().is_empty());
}
