//! Ascend Handler - registry and lifecycle engine for component upgrades.
//!
//! Markup declares which widgets it wants through marker classes. The
//! [`ComponentHandler`] finds those elements, builds each registered
//! component on each element exactly once, and can reverse the process.
//!
//! # Architecture
//!
//! - [`ComponentRegistry`]: ordered descriptors (name, selector, factory,
//!   widget flag, upgrade callbacks)
//! - [`UpgradeTracker`]: per-element record of applied components, stored in
//!   the marker attribute (`data-upgraded="MaterialButton,MaterialRipple"`)
//! - [`InstanceLedger`]: every live instance and the element it belongs to
//! - Upgrade engine: [`ComponentHandler::upgrade_all`],
//!   [`upgrade_by_type`](ComponentHandler::upgrade_by_type),
//!   [`upgrade_element`](ComponentHandler::upgrade_element),
//!   [`upgrade_elements`](ComponentHandler::upgrade_elements)
//! - Downgrade engine: [`ComponentHandler::downgrade_elements`]
//! - Boot: [`ComponentHandler::boot`]
//!
//! # Lifecycle events
//!
//! Dispatched on the element and bubbling to the document element:
//!
//! | event (default name)     | cancelable | fired                              |
//! |--------------------------|------------|------------------------------------|
//! | `component-upgrading`    | yes        | once per `upgrade_element` call    |
//! | `component-upgraded`     | no         | once per applied component         |
//! | `component-downgraded`   | no         | once per torn-down instance        |
//!
//! Everything runs synchronously on the caller's thread. Marking an element
//! before its factory runs is what keeps a factory that upgrades its own
//! subtree from constructing the same component on the same element twice.

pub mod boot;
pub mod component;
pub mod config;
pub mod downgrade;
pub mod error;
pub mod handler;
pub mod ledger;
pub mod registry;
pub mod targets;
pub mod tracker;
pub mod upgrade;

pub use boot::BootOutcome;
pub use component::{Component, ComponentLink, InstanceId, UpgradeCallback, UpgradeContext};
pub use config::HandlerConfig;
pub use error::{ConflictField, HandlerError, HandlerResult};
pub use handler::{ComponentHandler, EngineState};
pub use ledger::InstanceLedger;
pub use registry::{
    ComponentDescriptor, ComponentRegistration, ComponentRegistry, INSTANCE_LINK_KEY, Registered,
};
pub use targets::IntoNodes;
pub use tracker::{MARKER_DELIMITER, MarkerState, UpgradeTracker, decode_marker, encode_marker};
