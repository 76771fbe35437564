//! Event dispatch for document nodes.

use crate::node::NodeId;
use ascend_core::alloc::HashMap;

/// Identifier returned by [`Document::add_event_listener`](crate::Document::add_event_listener).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A custom event travelling from a target node up through its ancestors.
#[derive(Debug, Clone)]
pub struct DomEvent {
    kind: String,
    bubbles: bool,
    cancelable: bool,
    target: Option<NodeId>,
    current_target: Option<NodeId>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DomEvent {
    /// Create an event. Nothing about it is decided until dispatch.
    pub fn new(kind: impl Into<String>, bubbles: bool, cancelable: bool) -> Self {
        Self {
            kind: kind.into(),
            bubbles,
            cancelable,
            target: None,
            current_target: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    /// The node the event was dispatched on.
    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// The node whose listener is currently running.
    pub fn current_target(&self) -> Option<NodeId> {
        self.current_target
    }

    /// Veto the default action. Ignored for non-cancelable events.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop the event from reaching further ancestors. Remaining listeners on
    /// the current node still run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Result of dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No listener vetoed the event.
    Proceed,
    /// A listener called [`DomEvent::prevent_default`] on a cancelable event.
    Canceled,
}

impl DispatchOutcome {
    pub fn is_canceled(self) -> bool {
        self == DispatchOutcome::Canceled
    }
}

type Callback = Box<dyn FnMut(&mut DomEvent)>;

struct ListenerEntry {
    id: ListenerId,
    kind: String,
    callback: Callback,
}

/// Listener storage, keyed by the node the listener is attached to.
#[derive(Default)]
pub(crate) struct EventListeners {
    by_node: HashMap<NodeId, Vec<ListenerEntry>>,
    next_id: u64,
}

impl EventListeners {
    pub(crate) fn add(&mut self, node: NodeId, kind: String, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.by_node.entry(node).or_default().push(ListenerEntry {
            id,
            kind,
            callback,
        });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        for entries in self.by_node.values_mut() {
            if let Some(pos) = entries.iter().position(|entry| entry.id == id) {
                entries.remove(pos);
                return true;
            }
        }
        false
    }

    pub(crate) fn remove_node(&mut self, node: NodeId) {
        self.by_node.remove(&node);
    }

    pub(crate) fn count(&self) -> usize {
        self.by_node.values().map(Vec::len).sum()
    }

    /// Run listeners along `path` (target first, then ancestors).
    pub(crate) fn dispatch(&mut self, path: &[NodeId], event: &mut DomEvent) -> DispatchOutcome {
        event.target = path.first().copied();
        let kind = event.kind.clone();

        for (depth, node) in path.iter().enumerate() {
            if depth > 0 && !event.bubbles {
                break;
            }
            event.current_target = Some(*node);

            if let Some(entries) = self.by_node.get_mut(node) {
                for entry in entries.iter_mut().filter(|entry| entry.kind == kind) {
                    (entry.callback)(event);
                }
            }

            if event.propagation_stopped {
                break;
            }
        }

        event.current_target = None;
        if event.default_prevented {
            DispatchOutcome::Canceled
        } else {
            DispatchOutcome::Proceed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prevent_default_ignored_when_not_cancelable() {
        let mut event = DomEvent::new("component-upgraded", true, false);
        event.prevent_default();
        assert!(!event.default_prevented());

        let mut event = DomEvent::new("component-upgrading", true, true);
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn test_dispatch_bubbles_to_ancestors() {
        let mut listeners = EventListeners::default();
        let hits = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));

        for node in [NodeId(0), NodeId(1)] {
            let hits = hits.clone();
            listeners.add(
                node,
                "ping".into(),
                Box::new(move |event| hits.borrow_mut().push(event.current_target())),
            );
        }

        let mut event = DomEvent::new("ping", true, false);
        let outcome = listeners.dispatch(&[NodeId(1), NodeId(0)], &mut event);

        assert_eq!(outcome, DispatchOutcome::Proceed);
        assert_eq!(*hits.borrow(), vec![Some(NodeId(1)), Some(NodeId(0))]);
        assert_eq!(event.target(), Some(NodeId(1)));
    }

    #[test]
    fn test_non_bubbling_event_stays_on_target() {
        let mut listeners = EventListeners::default();
        let hits = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = hits.clone();
        listeners.add(
            NodeId(0),
            "ping".into(),
            Box::new(move |_| counter.set(counter.get() + 1)),
        );

        let mut event = DomEvent::new("ping", false, false);
        listeners.dispatch(&[NodeId(1), NodeId(0)], &mut event);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_listener_cancels_and_other_kinds_skipped() {
        let mut listeners = EventListeners::default();
        let other = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = other.clone();
        listeners.add(
            NodeId(1),
            "component-upgraded".into(),
            Box::new(move |_| counter.set(counter.get() + 1)),
        );
        listeners.add(
            NodeId(1),
            "component-upgrading".into(),
            Box::new(|event| event.prevent_default()),
        );

        let mut event = DomEvent::new("component-upgrading", true, true);
        let outcome = listeners.dispatch(&[NodeId(1)], &mut event);

        assert!(outcome.is_canceled());
        assert_eq!(other.get(), 0);
    }

    #[test]
    fn test_remove_listener() {
        let mut listeners = EventListeners::default();
        let id = listeners.add(NodeId(3), "ping".into(), Box::new(|_| {}));
        assert_eq!(listeners.count(), 1);
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert_eq!(listeners.count(), 0);
    }
}
