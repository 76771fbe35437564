//! Upgrade engine: turning marked elements into live component instances.

use crate::component::{ComponentLink, Factory, UpgradeContext};
use crate::error::{HandlerError, HandlerResult};
use crate::handler::{ComponentHandler, EngineState};
use crate::targets::IntoNodes;
use ascend_core::profiling::{profile_function, profile_scope};
use ascend_dom::{ClassSelector, DomEvent, Document, NodeId};
use std::rc::Rc;

/// Snapshot of what upgrading one descriptor needs, taken before the factory
/// runs so the registry is not borrowed during construction.
struct Candidate {
    name: Rc<str>,
    selector: Rc<str>,
    widget: bool,
    factory: Factory,
}

impl ComponentHandler {
    /// Upgrade the whole document, one registered type at a time, newest
    /// registration first.
    ///
    /// Composite widgets tend to be registered after the widgets they are
    /// built from, and their factories may construct those children
    /// themselves. Visiting them first lets the children be marked by the
    /// composite before the children's own pass reaches them.
    pub fn upgrade_all(&mut self, doc: &mut Document) -> HandlerResult<()> {
        profile_function!();
        let names: Vec<Rc<str>> = self.registry.iter().rev().map(|d| d.name_rc()).collect();
        for name in names {
            self.upgrade_by_type(doc, Some(&*name), None)?;
        }
        Ok(())
    }

    /// Upgrade every element in the document matching a type's selector.
    ///
    /// - no arguments: every registered type, in registration order
    /// - `name` only: the selector is looked up in the registry
    /// - `selector` given: elements matching it are upgraded, restricted to
    ///   `name` if one is given, otherwise with every matching type
    pub fn upgrade_by_type(
        &mut self,
        doc: &mut Document,
        name: Option<&str>,
        selector: Option<&str>,
    ) -> HandlerResult<()> {
        let selector = match (name, selector) {
            (None, None) => {
                let types: Vec<(Rc<str>, Rc<str>)> = self
                    .registry
                    .iter()
                    .map(|d| (d.name_rc(), d.selector_rc()))
                    .collect();
                for (name, selector) in types {
                    self.upgrade_by_type(doc, Some(&*name), Some(&*selector))?;
                }
                return Ok(());
            }
            (_, Some(selector)) => ClassSelector::parse(selector)?,
            (Some(name), None) => self
                .registry
                .find_by_name(name)
                .map(|d| d.selector().clone())
                .ok_or_else(|| HandlerError::UnknownComponent {
                    name: name.to_string(),
                })?,
        };

        profile_scope!("upgrade_by_type");
        for element in doc.query_selector_all(&selector) {
            // An earlier factory in this pass may have removed the element.
            if doc.contains(element) {
                self.upgrade_element(doc, element, name)?;
            }
        }
        Ok(())
    }

    /// Upgrade one element.
    ///
    /// With `name`, only that component is applied (if it is not already).
    /// Without, every registered component whose selector the element matches
    /// and which has not been applied yet is applied, in registration order.
    ///
    /// A listener canceling the upgrading event stops the call before
    /// anything changes; that is not an error. A factory error propagates
    /// immediately and components applied earlier in the same call stay
    /// applied.
    pub fn upgrade_element(
        &mut self,
        doc: &mut Document,
        element: NodeId,
        name: Option<&str>,
    ) -> HandlerResult<()> {
        if self.state == EngineState::Disabled {
            tracing::trace!(?element, "engine disabled, upgrade ignored");
            return Ok(());
        }
        if !doc.contains(element) {
            return Err(HandlerError::invalid_argument(format!(
                "{:?} is not part of the document",
                element
            )));
        }
        if !doc.is_element(element) {
            return Err(HandlerError::invalid_argument(format!(
                "{:?} is not an element",
                element
            )));
        }

        let mut upgrading = DomEvent::new(self.config.upgrading_event.as_str(), true, true);
        if doc.dispatch_event(element, &mut upgrading)?.is_canceled() {
            tracing::trace!(?element, "upgrade canceled by listener");
            return Ok(());
        }

        let candidates = self.candidates(doc, element, name)?;
        for candidate in candidates {
            self.apply(doc, element, candidate)?;
        }
        Ok(())
    }

    /// Upgrade each element and, after it, everything below it (pre-order).
    ///
    /// Nodes that are not elements are skipped. An element's children are read
    /// after the element itself is upgraded, so children created by its
    /// factory are visited too.
    pub fn upgrade_elements(&mut self, doc: &mut Document, nodes: impl IntoNodes) -> HandlerResult<()> {
        profile_function!();
        let mut stack: Vec<NodeId> = nodes.into_nodes();
        stack.reverse();

        while let Some(node) = stack.pop() {
            if !doc.is_element(node) {
                tracing::trace!(?node, "skipping non-element node");
                continue;
            }
            self.upgrade_element(doc, node, None)?;
            stack.extend(doc.element_children(node).into_vec().into_iter().rev());
        }
        Ok(())
    }

    fn candidates(
        &self,
        doc: &Document,
        element: NodeId,
        name: Option<&str>,
    ) -> HandlerResult<Vec<Candidate>> {
        let applied = self.tracker.applied_names(doc, element);

        match name {
            Some(name) => {
                if applied.iter().any(|n| n == name) {
                    return Ok(Vec::new());
                }
                let descriptor = self.registry.find_by_name(name).ok_or_else(|| {
                    HandlerError::UnknownComponent {
                        name: name.to_string(),
                    }
                })?;
                Ok(vec![Candidate {
                    name: descriptor.name_rc(),
                    selector: descriptor.selector_rc(),
                    widget: descriptor.is_widget(),
                    factory: descriptor.factory(),
                }])
            }
            None => Ok(self
                .registry
                .iter()
                .filter(|d| doc.matches(element, d.selector()))
                .filter(|d| !applied.iter().any(|n| n == d.name()))
                .map(|d| Candidate {
                    name: d.name_rc(),
                    selector: d.selector_rc(),
                    widget: d.is_widget(),
                    factory: d.factory(),
                })
                .collect()),
        }
    }

    fn apply(&mut self, doc: &mut Document, element: NodeId, candidate: Candidate) -> HandlerResult<()> {
        let Candidate {
            name,
            selector,
            widget,
            factory,
        } = candidate;

        // An earlier factory in this call may have upgraded the element again.
        if self.tracker.has_applied(doc, element, &name) {
            tracing::trace!(component = %name, ?element, "already applied by a nested upgrade");
            return Ok(());
        }

        // A factory that upgrades this element again must see it as done.
        self.tracker.mark_applied(doc, element, &name)?;

        let instance = {
            let mut ctx = UpgradeContext::new(self, doc, element, name.clone());
            factory(&mut ctx)?
        };

        let link = ComponentLink {
            name: name.clone(),
            selector,
            widget,
        };
        let id = self.ledger.push(element, link, instance);

        let callbacks = self
            .registry
            .find_by_name(&name)
            .map(|d| d.callbacks().to_vec())
            .unwrap_or_default();
        for callback in callbacks {
            callback(doc, element);
        }

        if widget {
            self.ledger.expose_widget(element, name.clone(), id);
        }
        tracing::debug!(component = %name, ?element, ?id, "component upgraded");

        if doc.contains(element) {
            let mut upgraded = DomEvent::new(self.config.upgraded_event.as_str(), true, false);
            doc.dispatch_event(element, &mut upgraded)?;
        }
        Ok(())
    }
}
