//! Per-element upgrade state, stored in the marker attribute.
//!
//! The attribute holds the applied component names joined with
//! [`MARKER_DELIMITER`], in the order they were applied. Because the state
//! lives on the element, it survives across handler instances and is visible
//! to anything that can read attributes.

use crate::error::HandlerResult;
use ascend_dom::{Document, NodeId};

/// Separator between names in the marker attribute.
pub const MARKER_DELIMITER: char = ',';

/// Decode a marker attribute value into component names.
///
/// A missing attribute and an empty one both decode to no names. Empty
/// segments are dropped, so `""` never turns into `[""]`.
pub fn decode_marker(value: Option<&str>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(raw) => raw
            .split(MARKER_DELIMITER)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Encode component names into a marker attribute value.
pub fn encode_marker<S: AsRef<str>>(names: &[S]) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push(MARKER_DELIMITER);
        }
        out.push_str(name.as_ref());
    }
    out
}

/// Raw state of an element's marker attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerState {
    /// The element has no marker attribute.
    Absent,
    /// The attribute is present; the list may be empty if the value is `""`.
    Present(Vec<String>),
}

/// Reads and writes the marker attribute.
///
/// The tracker does not enforce uniqueness: callers check
/// [`has_applied`](Self::has_applied) before [`mark_applied`](Self::mark_applied).
#[derive(Debug, Clone)]
pub struct UpgradeTracker {
    attribute: String,
}

impl UpgradeTracker {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    /// Name of the marker attribute.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn marker_state(&self, doc: &Document, element: NodeId) -> MarkerState {
        match doc.attribute(element, &self.attribute) {
            None => MarkerState::Absent,
            Some(raw) => MarkerState::Present(decode_marker(Some(raw))),
        }
    }

    /// Names applied to `element`, in application order.
    pub fn applied_names(&self, doc: &Document, element: NodeId) -> Vec<String> {
        decode_marker(doc.attribute(element, &self.attribute))
    }

    pub fn has_applied(&self, doc: &Document, element: NodeId, name: &str) -> bool {
        self.applied_names(doc, element).iter().any(|n| n == name)
    }

    /// Append `name` to the marker list.
    pub fn mark_applied(&self, doc: &mut Document, element: NodeId, name: &str) -> HandlerResult<()> {
        let mut names = self.applied_names(doc, element);
        names.push(name.to_string());
        doc.set_attribute(element, self.attribute.as_str(), encode_marker(&names))?;
        Ok(())
    }

    /// Remove the first occurrence of `name`.
    ///
    /// The attribute is dropped once the list is empty. Returns `false` and
    /// leaves the element alone if `name` was not applied.
    pub fn unmark_applied(
        &self,
        doc: &mut Document,
        element: NodeId,
        name: &str,
    ) -> HandlerResult<bool> {
        let mut names = self.applied_names(doc, element);
        let Some(pos) = names.iter().position(|n| n == name) else {
            return Ok(false);
        };
        names.remove(pos);

        if names.is_empty() {
            doc.remove_attribute(element, &self.attribute)?;
        } else {
            doc.set_attribute(element, self.attribute.as_str(), encode_marker(&names))?;
        }
        Ok(true)
    }
}
