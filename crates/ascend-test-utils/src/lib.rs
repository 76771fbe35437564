//! Test utilities for Ascend.
//!
//! This crate provides recording components and event recorders so handler
//! behaviour can be asserted without any real widgets.
//!
//! # Overview
//!
//! - [`Journal`] - shared log of constructions, teardowns and callbacks
//! - [`Probe`] - a component that only records its own lifecycle
//! - [`Composite`] - a component whose factory builds and upgrades child elements
//! - [`LifecycleRecorder`] - records the handler's lifecycle events on a document
//! - [`fixture`] - small document-building helpers
//!
//! # Example
//!
//! ```rust
//! use ascend_dom::Document;
//! use ascend_handler::ComponentHandler;
//! use ascend_test_utils::{fixture, Journal, LifecycleRecorder, Probe};
//!
//! let mut doc = Document::new();
//! let mut handler = ComponentHandler::new();
//! let journal = Journal::new();
//! handler.register(Probe::registration("Check", "js-check", &journal)).unwrap();
//!
//! let recorder = LifecycleRecorder::install(&mut doc, handler.config());
//! let el = fixture::element(&mut doc, &["js-check"]);
//! handler.upgrade_element(&mut doc, el, None).unwrap();
//!
//! assert_eq!(journal.constructed("Check"), vec![el]);
//! assert_eq!(recorder.upgraded(), vec![el]);
//! ```

pub mod components;
pub mod fixture;
pub mod journal;
pub mod recorder;

pub use components::{Composite, Probe};
pub use journal::{Journal, JournalEntry};
pub use recorder::{LifecycleEvent, LifecycleKind, LifecycleRecorder, cancel_upgrades};
