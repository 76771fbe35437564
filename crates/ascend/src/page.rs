//! A document together with the handler that upgrades it.

use ascend_dom::{Document, NodeId};
use ascend_handler::{
    BootOutcome, Component, ComponentHandler, ComponentRegistration, HandlerConfig, HandlerResult,
    IntoNodes, Registered,
};

/// Owns one [`Document`] and the [`ComponentHandler`] bound to it.
///
/// The handler API takes the document by `&mut` on every call; `Page` keeps
/// the two together for hosts that only ever have one document.
#[derive(Debug, Default)]
pub struct Page {
    document: Document,
    handler: ComponentHandler,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page over an existing document.
    pub fn with_document(document: Document, config: HandlerConfig) -> Self {
        Self {
            document,
            handler: ComponentHandler::with_config(config),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn handler(&self) -> &ComponentHandler {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut ComponentHandler {
        &mut self.handler
    }

    /// Split borrow for code that needs both halves at once.
    pub fn parts_mut(&mut self) -> (&mut Document, &mut ComponentHandler) {
        (&mut self.document, &mut self.handler)
    }

    pub fn register(&mut self, registration: ComponentRegistration) -> HandlerResult<Option<Registered>> {
        self.handler.register(registration)
    }

    /// Run the one-time boot pass over the page's document.
    pub fn boot(&mut self) -> HandlerResult<BootOutcome> {
        let outcome = self.handler.boot(&mut self.document)?;
        tracing::debug!(?outcome, "page booted");
        Ok(outcome)
    }

    pub fn upgrade_all(&mut self) -> HandlerResult<()> {
        self.handler.upgrade_all(&mut self.document)
    }

    pub fn upgrade_by_type(&mut self, name: Option<&str>, selector: Option<&str>) -> HandlerResult<()> {
        self.handler.upgrade_by_type(&mut self.document, name, selector)
    }

    pub fn upgrade_element(&mut self, element: NodeId, name: Option<&str>) -> HandlerResult<()> {
        self.handler.upgrade_element(&mut self.document, element, name)
    }

    pub fn upgrade_elements(&mut self, nodes: impl IntoNodes) -> HandlerResult<()> {
        self.handler.upgrade_elements(&mut self.document, nodes)
    }

    pub fn downgrade_elements(&mut self, nodes: impl IntoNodes) -> HandlerResult<usize> {
        self.handler.downgrade_elements(&mut self.document, nodes)
    }

    pub fn applied_names(&self, element: NodeId) -> Vec<String> {
        self.handler.applied_names(&self.document, element)
    }

    pub fn widget<T: Component>(&self, element: NodeId, name: &str) -> Option<&T> {
        self.handler.widget::<T>(element, name)
    }

    pub fn widget_mut<T: Component>(&mut self, element: NodeId, name: &str) -> Option<&mut T> {
        self.handler.widget_mut::<T>(element, name)
    }
}
