//! The component handler service object.

use crate::component::{Component, ComponentLink, InstanceId};
use crate::config::HandlerConfig;
use crate::error::HandlerResult;
use crate::ledger::InstanceLedger;
use crate::registry::{ComponentRegistration, ComponentRegistry, Registered};
use crate::tracker::UpgradeTracker;
use ascend_dom::{Document, NodeId};

/// Lifecycle of the engine as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Not booted yet. All operations work normally.
    Pending,
    /// Booted against a capable host.
    Enabled,
    /// Booted against a host missing required capabilities. Registration and
    /// upgrades are ignored from now on.
    Disabled,
}

/// Owns the registry and the instance ledger and drives upgrades.
///
/// Nothing here is global: create one handler per document (or per test)
/// and pass the document in by `&mut` on every call.
///
/// # Example
///
/// ```ignore
/// let mut doc = Document::new();
/// let mut handler = ComponentHandler::new();
/// handler.register(ComponentRegistration::new("Check", "js-check", |_| Ok(Check)))?;
///
/// let el = doc.build_element("label").class("js-check").child_of(root).build();
/// handler.upgrade_element(&mut doc, el, None)?;
/// assert_eq!(doc.attribute(el, "data-upgraded"), Some("Check"));
/// ```
pub struct ComponentHandler {
    pub(crate) config: HandlerConfig,
    pub(crate) registry: ComponentRegistry,
    pub(crate) ledger: InstanceLedger,
    pub(crate) tracker: UpgradeTracker,
    pub(crate) state: EngineState,
}

impl ComponentHandler {
    /// Create a handler with the default configuration.
    pub fn new() -> Self {
        Self::with_config(HandlerConfig::default())
    }

    pub fn with_config(config: HandlerConfig) -> Self {
        let tracker = UpgradeTracker::new(config.marker_attribute.clone());
        Self {
            config,
            registry: ComponentRegistry::new(),
            ledger: InstanceLedger::new(),
            tracker,
            state: EngineState::Pending,
        }
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn tracker(&self) -> &UpgradeTracker {
        &self.tracker
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Register a component type.
    ///
    /// Returns `Ok(None)` without touching the registry once the engine is
    /// disabled.
    pub fn register(&mut self, registration: ComponentRegistration) -> HandlerResult<Option<Registered>> {
        if self.state == EngineState::Disabled {
            tracing::trace!(component = registration.name(), "engine disabled, registration ignored");
            return Ok(None);
        }
        self.registry.register(registration).map(Some)
    }

    /// Add an observer called with the element after every upgrade of `name`.
    ///
    /// Unknown names are ignored with a warning; returns whether the callback
    /// was attached.
    pub fn register_upgrade_callback<F>(&mut self, name: &str, callback: F) -> bool
    where
        F: Fn(&mut Document, NodeId) + 'static,
    {
        let attached = self.registry.add_upgrade_callback(name, callback);
        if !attached {
            tracing::warn!(component = name, "upgrade callback for unregistered component ignored");
        }
        attached
    }

    /// Names applied to `element`, in application order.
    pub fn applied_names(&self, doc: &Document, element: NodeId) -> Vec<String> {
        self.tracker.applied_names(doc, element)
    }

    /// Number of live instances across all elements.
    pub fn instance_count(&self) -> usize {
        self.ledger.len()
    }

    /// Live instances bound to `element`, oldest first.
    pub fn instances_for(&self, element: NodeId) -> Vec<InstanceId> {
        self.ledger.instances_for(element)
    }

    pub fn instance(&self, id: InstanceId) -> Option<&dyn Component> {
        self.ledger.get(id)
    }

    pub fn instance_mut(&mut self, id: InstanceId) -> Option<&mut dyn Component> {
        self.ledger.get_mut(id)
    }

    /// Descriptor linkage of a live instance.
    pub fn link(&self, id: InstanceId) -> Option<&ComponentLink> {
        self.ledger.link(id)
    }

    /// Element a live instance is bound to.
    pub fn instance_element(&self, id: InstanceId) -> Option<NodeId> {
        self.ledger.element(id)
    }

    /// The widget exposed on `element` under `name`, if it is a `T`.
    pub fn widget<T: Component>(&self, element: NodeId, name: &str) -> Option<&T> {
        let id = self.ledger.widget_id(element, name)?;
        self.ledger.get(id)?.as_any().downcast_ref::<T>()
    }

    pub fn widget_mut<T: Component>(&mut self, element: NodeId, name: &str) -> Option<&mut T> {
        let id = self.ledger.widget_id(element, name)?;
        self.ledger.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }
}

impl Default for ComponentHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ComponentHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentHandler")
            .field("state", &self.state)
            .field("components", &self.registry.names())
            .field("instances", &self.ledger.len())
            .finish()
    }
}
