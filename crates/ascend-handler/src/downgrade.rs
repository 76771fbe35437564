//! Downgrade engine: tearing instances down and clearing their marker state.

use crate::component::InstanceId;
use crate::error::{HandlerError, HandlerResult};
use crate::handler::ComponentHandler;
use crate::targets::IntoNodes;
use ascend_core::profiling::profile_function;
use ascend_dom::{DomEvent, Document};

impl ComponentHandler {
    /// Downgrade every live instance bound to the given nodes.
    ///
    /// Each instance is removed from the ledger, torn down, and its name is
    /// removed from the element's marker before a downgraded event fires on
    /// the element. Nodes without instances are skipped silently.
    ///
    /// Instances whose element has since been removed from the document are
    /// still torn down; there is no marker to clear and no event to fire. A
    /// node that is neither in the document nor bound to any instance fails
    /// the whole call before anything is torn down.
    ///
    /// Returns how many instances were torn down.
    pub fn downgrade_elements(&mut self, doc: &mut Document, nodes: impl IntoNodes) -> HandlerResult<usize> {
        profile_function!();
        let nodes = nodes.into_nodes();
        if let Some(unknown) = nodes
            .iter()
            .find(|node| !doc.contains(**node) && self.ledger.instances_for(**node).is_empty())
        {
            return Err(HandlerError::invalid_argument(format!(
                "{:?} is neither part of the document nor upgraded",
                unknown
            )));
        }

        let mut torn_down = 0;
        for node in nodes {
            for id in self.ledger.instances_for(node) {
                if self.deconstruct(doc, id)? {
                    torn_down += 1;
                }
            }
        }
        Ok(torn_down)
    }

    fn deconstruct(&mut self, doc: &mut Document, id: InstanceId) -> HandlerResult<bool> {
        let Some(removed) = self.ledger.remove(id) else {
            return Ok(false);
        };
        let element = removed.element;
        let mut instance = removed.instance;

        instance.teardown(doc, element);
        drop(instance);

        // The element may have been removed earlier or by the teardown itself.
        if !doc.contains(element) {
            tracing::debug!(component = %removed.link.name, ?element, "downgraded instance of removed element");
            return Ok(true);
        }

        self.tracker.unmark_applied(doc, element, &removed.link.name)?;
        tracing::debug!(component = %removed.link.name, ?element, ?id, "component downgraded");

        let mut downgraded = DomEvent::new(self.config.downgraded_event.as_str(), true, false);
        doc.dispatch_event(element, &mut downgraded)?;
        Ok(true)
    }
}
