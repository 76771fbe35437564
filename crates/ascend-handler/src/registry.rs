//! Ordered registry of component descriptors.
//!
//! Registration order matters: [`upgrade_all`](crate::ComponentHandler::upgrade_all)
//! walks it backwards, and re-registering a name keeps its original slot.

use crate::component::{Component, Factory, UpgradeCallback, UpgradeContext};
use crate::error::{ConflictField, HandlerError, HandlerResult};
use crate::tracker::MARKER_DELIMITER;
use ascend_dom::{ClassSelector, Document, NodeId};
use std::any::TypeId;
use std::rc::Rc;

/// Name reserved for the handler's own instance linkage.
///
/// Widgets are exposed on their element under their component name, so a
/// component with this name would shadow the linkage entry.
pub const INSTANCE_LINK_KEY: &str = "componentLink";

/// Input to [`ComponentRegistry::register`].
///
/// # Example
///
/// ```ignore
/// handler.register(
///     ComponentRegistration::new("MaterialCheckbox", "mdl-js-checkbox", |ctx| {
///         Ok(Checkbox::wire(ctx.document_mut(), ctx.element()))
///     })
///     .widget(true),
/// )?;
/// ```
pub struct ComponentRegistration {
    name: String,
    selector: String,
    widget: Option<bool>,
    type_id: TypeId,
    type_name: &'static str,
    factory: Factory,
}

impl ComponentRegistration {
    /// Describe a component named `name`, found on elements matching `selector`
    /// and built by `factory`.
    pub fn new<C, F>(name: impl Into<String>, selector: impl Into<String>, factory: F) -> Self
    where
        C: Component,
        F: Fn(&mut UpgradeContext<'_>) -> HandlerResult<C> + 'static,
    {
        let factory: Factory = Rc::new(move |ctx: &mut UpgradeContext<'_>| {
            let instance = factory(ctx)?;
            Ok(Box::new(instance) as Box<dyn Component>)
        });

        Self {
            name: name.into(),
            selector: selector.into(),
            widget: None,
            type_id: TypeId::of::<C>(),
            type_name: std::any::type_name::<C>(),
            factory,
        }
    }

    /// Whether upgraded instances are retrievable from their element.
    /// Defaults to `true`.
    pub fn widget(mut self, widget: bool) -> Self {
        self.widget = Some(widget);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A registered component type.
pub struct ComponentDescriptor {
    name: Rc<str>,
    selector_text: Rc<str>,
    selector: ClassSelector,
    widget: bool,
    type_id: TypeId,
    type_name: &'static str,
    factory: Factory,
    callbacks: Vec<UpgradeCallback>,
}

impl ComponentDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_rc(&self) -> Rc<str> {
        self.name.clone()
    }

    /// The selector as registered.
    pub fn selector_text(&self) -> &str {
        &self.selector_text
    }

    pub(crate) fn selector_rc(&self) -> Rc<str> {
        self.selector_text.clone()
    }

    pub fn selector(&self) -> &ClassSelector {
        &self.selector
    }

    pub fn is_widget(&self) -> bool {
        self.widget
    }

    /// Concrete component type the factory produces.
    pub fn component_type(&self) -> TypeId {
        self.type_id
    }

    pub fn component_type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn factory(&self) -> Factory {
        self.factory.clone()
    }

    pub fn callbacks(&self) -> &[UpgradeCallback] {
        &self.callbacks
    }
}

impl std::fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("name", &self.name)
            .field("selector", &self.selector_text)
            .field("widget", &self.widget)
            .field("type", &self.type_name)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

/// How a successful registration changed the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registered {
    /// A new descriptor was appended at this position.
    Appended(usize),
    /// An existing descriptor with the same name was replaced at this position.
    Replaced(usize),
}

/// Registry of component descriptors in registration order.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    descriptors: Vec<ComponentDescriptor>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component type.
    ///
    /// A name that is already registered for the same component type is
    /// replaced in place. Registration fails if the selector belongs to a
    /// different name, if the name belongs to a different component type,
    /// or if the name is the reserved [`INSTANCE_LINK_KEY`].
    pub fn register(&mut self, input: ComponentRegistration) -> HandlerResult<Registered> {
        validate_name(&input.name)?;
        if input.name == INSTANCE_LINK_KEY {
            return Err(HandlerError::RegistrationConflict {
                field: ConflictField::LinkageKey,
                name: input.name,
                existing: INSTANCE_LINK_KEY.to_string(),
            });
        }
        let selector = ClassSelector::parse(&input.selector)?;

        for existing in &self.descriptors {
            if existing.selector == selector && *existing.name != *input.name {
                return Err(HandlerError::RegistrationConflict {
                    field: ConflictField::Selector,
                    name: input.name,
                    existing: existing.name.to_string(),
                });
            }
            if *existing.name == *input.name && existing.type_id != input.type_id {
                return Err(HandlerError::RegistrationConflict {
                    field: ConflictField::Name,
                    name: input.name,
                    existing: existing.type_name.to_string(),
                });
            }
        }

        let descriptor = ComponentDescriptor {
            name: Rc::from(input.name.as_str()),
            selector_text: Rc::from(input.selector.as_str()),
            selector,
            widget: input.widget.unwrap_or(true),
            type_id: input.type_id,
            type_name: input.type_name,
            factory: input.factory,
            callbacks: Vec::new(),
        };

        match self.position(&input.name) {
            Some(index) => {
                self.descriptors[index] = descriptor;
                tracing::debug!(component = %input.name, index, "replaced component registration");
                Ok(Registered::Replaced(index))
            }
            None => {
                self.descriptors.push(descriptor);
                let index = self.descriptors.len() - 1;
                tracing::debug!(component = %input.name, index, "registered component");
                Ok(Registered::Appended(index))
            }
        }
    }

    /// Look up a descriptor by component name.
    pub fn find_by_name(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.descriptors.iter().find(|d| &*d.name == name)
    }

    /// Registration position of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| &*d.name == name)
    }

    /// Append an upgrade callback to a registered component.
    ///
    /// Returns `false`, leaving the registry unchanged, if `name` is unknown.
    pub fn add_upgrade_callback<F>(&mut self, name: &str, callback: F) -> bool
    where
        F: Fn(&mut Document, NodeId) + 'static,
    {
        match self.descriptors.iter_mut().find(|d| &*d.name == name) {
            Some(descriptor) => {
                descriptor.callbacks.push(Rc::new(callback));
                true
            }
            None => false,
        }
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ComponentDescriptor> {
        self.descriptors.iter()
    }

    /// Component names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Names end up in the comma-joined marker attribute, so they must be non-empty
/// and free of the delimiter.
fn validate_name(name: &str) -> HandlerResult<()> {
    if name.is_empty() {
        return Err(HandlerError::invalid_argument("component name is empty"));
    }
    if name.contains(MARKER_DELIMITER) || name.chars().any(char::is_whitespace) {
        return Err(HandlerError::invalid_argument(format!(
            "component name '{}' contains '{}' or whitespace",
            name, MARKER_DELIMITER
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Check;
    struct Toggle;

    impl Component for Check {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    }

    impl Component for Toggle {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    }

    fn check(name: &str, selector: &str) -> ComponentRegistration {
        ComponentRegistration::new(name, selector, |_| Ok(Check))
    }

    #[test]
    fn test_register_appends_in_order() {
        let mut registry = ComponentRegistry::new();
        assert_eq!(registry.register(check("A", "js-a")), Ok(Registered::Appended(0)));
        assert_eq!(registry.register(check("B", "js-b")), Ok(Registered::Appended(1)));
        assert_eq!(registry.register(check("C", "js-c")), Ok(Registered::Appended(2)));
        assert_eq!(registry.names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_widget_defaults_to_true() {
        let mut registry = ComponentRegistry::new();
        registry.register(check("A", "js-a")).unwrap();
        registry.register(check("B", "js-b").widget(false)).unwrap();
        assert!(registry.find_by_name("A").unwrap().is_widget());
        assert!(!registry.find_by_name("B").unwrap().is_widget());
    }

    #[test]
    fn test_same_name_replaces_in_place() {
        let mut registry = ComponentRegistry::new();
        registry.register(check("A", "js-a")).unwrap();
        registry.register(check("B", "js-b")).unwrap();
        registry.register(check("C", "js-c")).unwrap();

        let outcome = registry.register(check("B", "js-b2").widget(false));
        assert_eq!(outcome, Ok(Registered::Replaced(1)));
        assert_eq!(registry.names(), vec!["A", "B", "C"]);

        let replaced = registry.find_by_name("B").unwrap();
        assert_eq!(replaced.selector_text(), "js-b2");
        assert!(!replaced.is_widget());
    }

    #[test]
    fn test_same_selector_different_name_conflicts() {
        let mut registry = ComponentRegistry::new();
        registry.register(check("Check", "js-check")).unwrap();

        let err = registry.register(check("Other", ".js-check")).unwrap_err();
        assert_eq!(
            err,
            HandlerError::RegistrationConflict {
                field: ConflictField::Selector,
                name: "Other".into(),
                existing: "Check".into(),
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_same_name_different_type_conflicts() {
        let mut registry = ComponentRegistry::new();
        registry.register(check("Check", "js-check")).unwrap();

        let toggle = ComponentRegistration::new("Check", "js-toggle", |_| Ok(Toggle));
        match registry.register(toggle) {
            Err(HandlerError::RegistrationConflict { field, name, .. }) => {
                assert_eq!(field, ConflictField::Name);
                assert_eq!(name, "Check");
            }
            other => panic!("expected name conflict, got {:?}", other),
        }
        assert_eq!(registry.find_by_name("Check").unwrap().selector_text(), "js-check");
    }

    #[test]
    fn test_linkage_key_is_reserved() {
        let mut registry = ComponentRegistry::new();
        let err = registry.register(check(INSTANCE_LINK_KEY, "js-link")).unwrap_err();
        assert!(matches!(
            err,
            HandlerError::RegistrationConflict {
                field: ConflictField::LinkageKey,
                ..
            }
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_invalid_names_and_selectors() {
        let mut registry = ComponentRegistry::new();
        assert!(matches!(
            registry.register(check("", "js-a")),
            Err(HandlerError::InvalidArgument { .. })
        ));
        assert!(matches!(
            registry.register(check("A,B", "js-a")),
            Err(HandlerError::InvalidArgument { .. })
        ));
        assert!(matches!(
            registry.register(check("A", "div > p")),
            Err(HandlerError::Dom(_))
        ));
    }

    #[test]
    fn test_add_upgrade_callback_unknown_name_is_noop() {
        let mut registry = ComponentRegistry::new();
        registry.register(check("A", "js-a")).unwrap();

        assert!(registry.add_upgrade_callback("A", |_, _| {}));
        assert!(registry.add_upgrade_callback("A", |_, _| {}));
        assert!(!registry.add_upgrade_callback("Missing", |_, _| {}));
        assert_eq!(registry.find_by_name("A").unwrap().callbacks().len(), 2);
    }
}
