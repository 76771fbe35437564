//! Ascend DOM - an owned, arena-backed document model.
//!
//! The component handler never talks to a browser. It operates on this
//! document instead:
//! - Element, text and comment nodes addressed by copyable [`NodeId`]s
//! - Class lists and ordered attributes on elements
//! - Class-based selector matching ([`ClassSelector`])
//! - Bubbling, cancelable events with a structured [`DispatchOutcome`]
//! - Advertised host [`Capabilities`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ascend_dom::{ClassSelector, Document};
//!
//! let mut doc = Document::new();
//! let root = doc.document_element();
//! let body = doc.build_element("body").child_of(root).build();
//! let button = doc
//!     .build_element("button")
//!     .class("js-button")
//!     .text("Save")
//!     .child_of(body)
//!     .build();
//!
//! let selector = ClassSelector::parse(".js-button").unwrap();
//! assert_eq!(doc.query_selector_all(&selector).as_slice(), &[button]);
//! ```

pub mod builder;
pub mod capability;
pub mod document;
pub mod error;
pub mod event;
pub mod node;
pub mod node_list;
pub mod selector;

pub use builder::ElementBuilder;
pub use capability::Capabilities;
pub use document::Document;
pub use error::{DomError, DomResult};
pub use event::{DispatchOutcome, DomEvent, ListenerId};
pub use node::{ElementData, Node, NodeId, NodeKind};
pub use node_list::NodeList;
pub use selector::ClassSelector;
