//! Document-building helpers.

use ascend_dom::{Document, NodeId};

/// A `div` under the document element carrying `classes`.
pub fn element(doc: &mut Document, classes: &[&str]) -> NodeId {
    let root = doc.document_element();
    element_in(doc, root, classes)
}

/// A `div` under `parent` carrying `classes`.
pub fn element_in(doc: &mut Document, parent: NodeId, classes: &[&str]) -> NodeId {
    let mut builder = doc.build_element("div").child_of(parent);
    for class in classes {
        builder = builder.class(*class);
    }
    builder.build()
}

/// A text node under `parent`.
pub fn text_in(doc: &mut Document, parent: NodeId, text: &str) -> NodeId {
    let node = doc.create_text(text);
    doc.append_child(parent, node)
        .expect("fixture parent must be an element in the document");
    node
}

/// A document with `<body>` under the document element.
pub fn document_with_body() -> (Document, NodeId) {
    let mut doc = Document::new();
    let root = doc.document_element();
    let body = doc.build_element("body").child_of(root).build();
    (doc, body)
}
