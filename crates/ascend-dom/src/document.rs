//! The document tree.

use crate::builder::ElementBuilder;
use crate::capability::Capabilities;
use crate::error::{DomError, DomResult};
use crate::event::{DispatchOutcome, DomEvent, EventListeners, ListenerId};
use crate::node::{ElementData, Node, NodeId, NodeKind};
use crate::node_list::NodeList;
use crate::selector::ClassSelector;
use ascend_core::profiling::profile_function;
use indexmap::IndexMap;

/// An owned document: an arena of nodes rooted at an `html` element.
pub struct Document {
    nodes: IndexMap<NodeId, Node>,
    root: NodeId,
    next_id: usize,
    listeners: EventListeners,
    capabilities: Capabilities,
}

impl Document {
    /// Create a document containing only the document element.
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = IndexMap::new();
        nodes.insert(root, Node::new(NodeKind::Element(ElementData::new("html"))));

        Self {
            nodes,
            root,
            next_id: 1,
            listeners: EventListeners::default(),
            capabilities: Capabilities::default(),
        }
    }

    /// Restrict the features this document advertises to its host.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// The root `html` element.
    pub fn document_element(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, including the document element.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(&node)
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(Node::is_element)
    }

    /// Element payload of `node`.
    pub fn element(&self, node: NodeId) -> DomResult<&ElementData> {
        self.nodes
            .get(&node)
            .ok_or(DomError::NodeNotFound(node))?
            .as_element()
            .ok_or(DomError::NotAnElement(node))
    }

    fn element_mut(&mut self, node: NodeId) -> DomResult<&mut ElementData> {
        self.nodes
            .get_mut(&node)
            .ok_or(DomError::NodeNotFound(node))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(node))
    }

    fn insert(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(kind));
        id
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.insert(NodeKind::Element(ElementData::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.insert(NodeKind::Text(text.into()))
    }

    /// Create a detached comment node.
    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.insert(NodeKind::Comment(text.into()))
    }

    /// Start building an element.
    pub fn build_element(&mut self, tag: impl Into<String>) -> ElementBuilder<'_> {
        ElementBuilder::new(self, tag.into())
    }

    /// Append `child` as the last child of `parent`, detaching it first if needed.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if !self.contains(child) {
            return Err(DomError::NodeNotFound(child));
        }
        self.element(parent)?;

        if child == self.root || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child)?;
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
        Ok(())
    }

    /// Unlink `node` from its parent. The node and its subtree stay alive.
    pub fn detach(&mut self, node: NodeId) -> DomResult<()> {
        let parent = self
            .nodes
            .get_mut(&node)
            .ok_or(DomError::NodeNotFound(node))?
            .parent
            .take();

        if let Some(parent) = parent
            && let Some(parent_node) = self.nodes.get_mut(&parent)
        {
            parent_node.children.retain(|c| *c != node);
        }
        Ok(())
    }

    /// Destroy `node` and its whole subtree. Their ids become invalid.
    pub fn remove(&mut self, node: NodeId) -> DomResult<()> {
        if node == self.root {
            return Err(DomError::HierarchyRequest {
                parent: node,
                child: node,
            });
        }
        self.detach(node)?;

        let mut doomed = vec![node];
        doomed.extend(self.descendants(node));
        for id in doomed {
            self.nodes.shift_remove(&id);
            self.listeners.remove_node(id);
        }
        Ok(())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    /// All child nodes, in order.
    pub fn children(&self, node: NodeId) -> NodeList {
        self.nodes
            .get(&node)
            .map(|n| n.children.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Element children only, in order.
    pub fn element_children(&self, node: NodeId) -> NodeList {
        self.nodes
            .get(&node)
            .map(|n| {
                n.children
                    .iter()
                    .copied()
                    .filter(|c| self.is_element(*c))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All nodes below `node` in pre-order, excluding `node` itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.nodes.get(&node) {
            Some(n) => n.children.iter().rev().copied().collect(),
            None => return out,
        };

        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(n) = self.nodes.get(&id) {
                stack.extend(n.children.iter().rev().copied());
            }
        }
        out
    }

    /// `node` followed by its ancestors, nearest first.
    pub fn ancestry(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            if !self.contains(id) {
                break;
            }
            path.push(id);
            current = self.parent(id);
        }
        path
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestry(node).contains(&ancestor)
    }

    /// Text content of `node` and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        let mut ids = vec![node];
        ids.extend(self.descendants(node));
        for id in ids {
            if let Some(Node {
                kind: NodeKind::Text(text),
                ..
            }) = self.nodes.get(&id)
            {
                out.push_str(text);
            }
        }
        out
    }

    // -- Class list --

    pub fn classes(&self, node: NodeId) -> &[String] {
        self.element(node).map(|e| e.classes.as_slice()).unwrap_or(&[])
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_ok_and(|e| e.has_class(class))
    }

    /// Add a class. Adding a class twice keeps a single entry.
    pub fn add_class(&mut self, node: NodeId, class: impl Into<String>) -> DomResult<()> {
        let class = class.into();
        let element = self.element_mut(node)?;
        if !element.has_class(&class) {
            element.classes.push(class);
        }
        Ok(())
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) -> DomResult<()> {
        self.element_mut(node)?.classes.retain(|c| c != class);
        Ok(())
    }

    // -- Attributes --

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)
            .ok()
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.element(node).is_ok_and(|e| e.attributes.contains_key(name))
    }

    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> DomResult<()> {
        self.element_mut(node)?
            .attributes
            .insert(name.into(), value.into());
        Ok(())
    }

    /// Remove an attribute. Returns the previous value, if any.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> DomResult<Option<String>> {
        Ok(self.element_mut(node)?.attributes.shift_remove(name))
    }

    // -- Selectors --

    pub fn matches(&self, node: NodeId, selector: &ClassSelector) -> bool {
        self.element(node).is_ok_and(|e| selector.matches(e))
    }

    /// Every element in the document matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &ClassSelector) -> NodeList {
        profile_function!();
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .filter(|id| self.matches(*id, selector))
            .collect()
    }

    /// Matching elements below `scope`, excluding `scope` itself.
    pub fn query_selector_all_in(&self, scope: NodeId, selector: &ClassSelector) -> NodeList {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.matches(*id, selector))
            .collect()
    }

    // -- Events --

    /// Attach a listener for events of `kind` reaching `node`.
    pub fn add_event_listener<F>(
        &mut self,
        node: NodeId,
        kind: impl Into<String>,
        listener: F,
    ) -> DomResult<ListenerId>
    where
        F: FnMut(&mut DomEvent) + 'static,
    {
        if !self.contains(node) {
            return Err(DomError::NodeNotFound(node));
        }
        Ok(self.listeners.add(node, kind.into(), Box::new(listener)))
    }

    /// Detach a listener. Returns `false` if it was already gone.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.count()
    }

    /// Dispatch `event` on `target`, bubbling through ancestors if the event bubbles.
    pub fn dispatch_event(
        &mut self,
        target: NodeId,
        event: &mut DomEvent,
    ) -> DomResult<DispatchOutcome> {
        if !self.contains(target) {
            return Err(DomError::NodeNotFound(target));
        }
        let path = self.ancestry(target);
        let outcome = self.listeners.dispatch(&path, event);
        tracing::trace!(kind = event.kind(), ?target, ?outcome, "dispatched event");
        Ok(outcome)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("listeners", &self.listeners.count())
            .field("capabilities", &self.capabilities)
            .finish()
    }
}
