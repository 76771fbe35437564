//! Ascend - progressive enhancement for documents
//!
//! Ascend turns plain, class-marked elements into live component instances.
//! Component types are registered once with a name, a class selector and a
//! factory; the handler then finds matching elements, constructs exactly one
//! instance per type per element and records what it applied in a marker
//! attribute on the element itself.
//!
//! - **Registry**: named component types in registration order
//! - **Upgrade Engine**: idempotent, cancelable upgrades with lifecycle events
//! - **Downgrade Engine**: teardown that undoes the marker and ledger state
//! - **Boot**: one capability-checked pass over the whole document
//!
//! # Quick Start
//!
//! ```rust
//! use ascend::prelude::*;
//! use std::any::Any;
//!
//! struct Button;
//!
//! impl Component for Button {
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn as_any_mut(&mut self) -> &mut dyn Any { self }
//! }
//!
//! let mut page = Page::new();
//! page.register(ComponentRegistration::new("Button", "js-button", |_| Ok(Button)))
//!     .unwrap();
//!
//! let root = page.document().document_element();
//! let el = page.document_mut().build_element("button").class("js-button").child_of(root).build();
//!
//! assert_eq!(page.boot().unwrap(), BootOutcome::Enabled);
//! assert_eq!(page.document().attribute(el, "data-upgraded"), Some("Button"));
//! assert!(page.widget::<Button>(el, "Button").is_some());
//! ```

pub mod page;

pub use ascend_core as core;
pub use ascend_dom as dom;
pub use ascend_handler as handler;

pub use page::Page;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::page::Page;

    // Document types
    pub use ascend_dom::{
        Capabilities, ClassSelector, DispatchOutcome, DomError, DomEvent, Document, NodeId,
        NodeList,
    };

    // Handler types
    pub use ascend_handler::{
        BootOutcome, Component, ComponentHandler, ComponentLink, ComponentRegistration,
        EngineState, HandlerConfig, HandlerError, HandlerResult, InstanceId, Registered,
        UpgradeContext,
    };
}
