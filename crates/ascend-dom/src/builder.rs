//! Builder for constructing elements declaratively.

use crate::document::Document;
use crate::node::NodeId;

/// Builder returned by [`Document::build_element`].
///
/// ```rust
/// use ascend_dom::Document;
///
/// let mut doc = Document::new();
/// let root = doc.document_element();
/// let check = doc
///     .build_element("label")
///     .class("mdl-checkbox")
///     .class("js-check")
///     .attribute("for", "agree")
///     .child_of(root)
///     .build();
///
/// assert!(doc.has_class(check, "js-check"));
/// assert_eq!(doc.parent(check), Some(root));
/// ```
pub struct ElementBuilder<'a> {
    document: &'a mut Document,
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    parent: Option<NodeId>,
}

impl<'a> ElementBuilder<'a> {
    pub(crate) fn new(document: &'a mut Document, tag: String) -> Self {
        Self {
            document,
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            text: None,
            parent: None,
        }
    }

    /// Add a class to the element.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute on the element.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Give the element a single text child.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append the element to `parent` when built.
    ///
    /// A `parent` that is missing or not an element leaves the new element detached.
    pub fn child_of(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Create the element and return its node id.
    pub fn build(self) -> NodeId {
        let doc = self.document;
        let id = doc.create_element(self.tag);

        // `id` is a fresh element and `text` a fresh orphan, so these cannot fail.
        for class in self.classes {
            let added = doc.add_class(id, class);
            debug_assert!(added.is_ok(), "add_class on a fresh element: {added:?}");
        }
        for (name, value) in self.attributes {
            let set = doc.set_attribute(id, name, value);
            debug_assert!(set.is_ok(), "set_attribute on a fresh element: {set:?}");
        }
        if let Some(text) = self.text {
            let text = doc.create_text(text);
            let appended = doc.append_child(id, text);
            debug_assert!(appended.is_ok(), "append text to a fresh element: {appended:?}");
        }
        if let Some(parent) = self.parent
            && let Err(err) = doc.append_child(parent, id)
        {
            tracing::warn!(?parent, %err, "built element left detached");
        }

        id
    }
}

#[cfg(test)]
mod tests {
    use crate::Document;

    #[test]
    fn test_build_applies_everything() {
        let mut doc = Document::new();
        let root = doc.document_element();
        let el = doc
            .build_element("label")
            .class("js-checkbox")
            .class("js-checkbox")
            .attribute("for", "agree")
            .text("Agree")
            .child_of(root)
            .build();

        assert_eq!(doc.classes(el), ["js-checkbox".to_string()]);
        assert_eq!(doc.attribute(el, "for"), Some("agree"));
        assert_eq!(doc.text_content(el), "Agree");
        assert_eq!(doc.parent(el), Some(root));
    }

    #[test]
    fn test_build_under_text_node_stays_detached() {
        let mut doc = Document::new();
        let text = doc.create_text("loose");
        let el = doc.build_element("div").child_of(text).build();

        assert!(doc.contains(el));
        assert_eq!(doc.parent(el), None);
    }
}
