//! Recording of the handler's lifecycle events.

use ascend_dom::{DomEvent, DomResult, Document, ListenerId, NodeId};
use ascend_handler::HandlerConfig;
use parking_lot::Mutex;
use std::sync::Arc;

/// Which lifecycle event was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleKind {
    Upgrading,
    Upgraded,
    Downgraded,
}

/// One observed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub kind: LifecycleKind,
    pub target: NodeId,
}

/// Listens on the document element for the three lifecycle events and
/// records every one that bubbles up.
#[derive(Debug, Clone)]
pub struct LifecycleRecorder {
    events: Arc<Mutex<Vec<LifecycleEvent>>>,
    listeners: Vec<ListenerId>,
}

impl LifecycleRecorder {
    /// Attach to `doc` using the event names from `config`.
    ///
    /// # Panics
    ///
    /// Panics if the document element cannot take listeners.
    pub fn install(doc: &mut Document, config: &HandlerConfig) -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));
        let root = doc.document_element();
        let kinds = [
            (config.upgrading_event.clone(), LifecycleKind::Upgrading),
            (config.upgraded_event.clone(), LifecycleKind::Upgraded),
            (config.downgraded_event.clone(), LifecycleKind::Downgraded),
        ];

        let mut listeners = Vec::with_capacity(kinds.len());
        for (name, kind) in kinds {
            let sink = Arc::clone(&events);
            let id = doc
                .add_event_listener(root, name, move |event: &mut DomEvent| {
                    if let Some(target) = event.target() {
                        sink.lock().push(LifecycleEvent { kind, target });
                    }
                })
                .expect("document element is always present");
            listeners.push(id);
        }

        Self { events, listeners }
    }

    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.lock().clone()
    }

    /// Targets of every event of `kind`, in dispatch order.
    pub fn targets(&self, kind: LifecycleKind) -> Vec<NodeId> {
        self.events
            .lock()
            .iter()
            .filter(|event| event.kind == kind)
            .map(|event| event.target)
            .collect()
    }

    pub fn upgrading(&self) -> Vec<NodeId> {
        self.targets(LifecycleKind::Upgrading)
    }

    pub fn upgraded(&self) -> Vec<NodeId> {
        self.targets(LifecycleKind::Upgraded)
    }

    pub fn downgraded(&self) -> Vec<NodeId> {
        self.targets(LifecycleKind::Downgraded)
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// Detach the recorder's listeners.
    pub fn uninstall(self, doc: &mut Document) {
        for id in self.listeners {
            doc.remove_event_listener(id);
        }
    }
}

/// Cancel every upgrading event targeted at `element`.
pub fn cancel_upgrades(
    doc: &mut Document,
    config: &HandlerConfig,
    element: NodeId,
) -> DomResult<ListenerId> {
    doc.add_event_listener(element, config.upgrading_event.clone(), move |event: &mut DomEvent| {
        if event.target() == Some(element) {
            event.prevent_default();
        }
    })
}
