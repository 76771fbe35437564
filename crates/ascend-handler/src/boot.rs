//! One-time boot against the host document.

use crate::error::HandlerResult;
use crate::handler::{ComponentHandler, EngineState};
use ascend_core::profiling;
use ascend_dom::{Capabilities, Document};

/// Result of [`ComponentHandler::boot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootOutcome {
    /// Capabilities were present; the document has been upgraded.
    Enabled,
    /// Required capabilities were missing; the engine is now permanently inert.
    Disabled {
        /// The capabilities the host did not advertise.
        missing: Capabilities,
    },
    /// Boot already ran; nothing happened.
    AlreadyBooted,
}

impl ComponentHandler {
    /// Handle the host's readiness signal.
    ///
    /// Only the first call does anything. If the document advertises every
    /// required capability, the scripting class is added to the document
    /// element and the whole document is upgraded. Otherwise the engine
    /// disables itself: later registrations and upgrades are ignored instead
    /// of failing one by one.
    pub fn boot(&mut self, doc: &mut Document) -> HandlerResult<BootOutcome> {
        if self.state != EngineState::Pending {
            tracing::trace!(state = ?self.state, "boot already ran");
            return Ok(BootOutcome::AlreadyBooted);
        }

        let missing = self.config.required_capabilities.difference(doc.capabilities());
        if !missing.is_empty() {
            self.state = EngineState::Disabled;
            tracing::info!(?missing, "host lacks required capabilities, component upgrades disabled");
            return Ok(BootOutcome::Disabled { missing });
        }

        self.state = EngineState::Enabled;
        let root = doc.document_element();
        doc.add_class(root, self.config.scripting_class.as_str())?;
        self.upgrade_all(doc)?;
        profiling::new_frame();

        tracing::info!(
            components = self.registry.len(),
            instances = self.ledger.len(),
            "component handler booted"
        );
        Ok(BootOutcome::Enabled)
    }

    /// Whether the engine still accepts registrations and upgrades.
    pub fn is_enabled(&self) -> bool {
        self.state != EngineState::Disabled
    }
}
