//! The contract between the handler and the widgets it upgrades.

use crate::error::HandlerResult;
use crate::handler::ComponentHandler;
use crate::targets::IntoNodes;
use ascend_dom::{Document, NodeId};
use std::any::Any;
use std::rc::Rc;

/// A live component instance bound to one element.
///
/// Widgets do all of their own wiring inside their factory. The handler only
/// stores the instance, hands it back on request, and calls
/// [`teardown`](Component::teardown) once when the instance is downgraded.
pub trait Component: Any {
    /// Undo whatever the factory did to the document. Called exactly once,
    /// after which the instance is dropped. `element` may already have been
    /// removed from the document.
    fn teardown(&mut self, _document: &mut Document, _element: NodeId) {}

    /// Downcast support: return `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Downcast support: return `self` as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Type-erased factory stored in a descriptor.
pub type Factory = Rc<dyn Fn(&mut UpgradeContext<'_>) -> HandlerResult<Box<dyn Component>>>;

/// Observer called with the element after each successful upgrade of a type.
pub type UpgradeCallback = Rc<dyn Fn(&mut Document, NodeId)>;

/// Identifier of a live instance in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub(crate) u64);

/// Descriptor data attached to every instance it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLink {
    pub name: Rc<str>,
    pub selector: Rc<str>,
    pub widget: bool,
}

/// What a factory sees while constructing an instance.
///
/// The element is already marked as upgraded for this component, so a
/// factory that upgrades its own subtree through
/// [`upgrade_elements`](Self::upgrade_elements) cannot construct this
/// component twice on the same element.
pub struct UpgradeContext<'a> {
    handler: &'a mut ComponentHandler,
    document: &'a mut Document,
    element: NodeId,
    component: Rc<str>,
}

impl<'a> UpgradeContext<'a> {
    pub(crate) fn new(
        handler: &'a mut ComponentHandler,
        document: &'a mut Document,
        element: NodeId,
        component: Rc<str>,
    ) -> Self {
        Self {
            handler,
            document,
            element,
            component,
        }
    }

    /// The element being upgraded.
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Name of the component being constructed.
    pub fn component_name(&self) -> &str {
        &self.component
    }

    pub fn document(&self) -> &Document {
        &*self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut *self.document
    }

    pub fn handler(&self) -> &ComponentHandler {
        &*self.handler
    }

    /// Upgrade a single element, usually one the factory just created.
    pub fn upgrade_element(&mut self, element: NodeId, name: Option<&str>) -> HandlerResult<()> {
        self.handler.upgrade_element(self.document, element, name)
    }

    /// Upgrade elements and everything below them.
    pub fn upgrade_elements(&mut self, nodes: impl IntoNodes) -> HandlerResult<()> {
        self.handler.upgrade_elements(self.document, nodes)
    }
}
