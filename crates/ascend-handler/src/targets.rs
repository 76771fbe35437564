//! Input normalisation for operations that accept one node or many.

use ascend_dom::{NodeId, NodeList};

/// Anything that can be turned into an ordered list of nodes.
pub trait IntoNodes {
    fn into_nodes(self) -> Vec<NodeId>;
}

impl IntoNodes for NodeId {
    fn into_nodes(self) -> Vec<NodeId> {
        vec![self]
    }
}

impl IntoNodes for Vec<NodeId> {
    fn into_nodes(self) -> Vec<NodeId> {
        self
    }
}

impl IntoNodes for &Vec<NodeId> {
    fn into_nodes(self) -> Vec<NodeId> {
        self.clone()
    }
}

impl IntoNodes for &[NodeId] {
    fn into_nodes(self) -> Vec<NodeId> {
        self.to_vec()
    }
}

impl<const N: usize> IntoNodes for [NodeId; N] {
    fn into_nodes(self) -> Vec<NodeId> {
        self.to_vec()
    }
}

impl IntoNodes for NodeList {
    fn into_nodes(self) -> Vec<NodeId> {
        self.into_vec()
    }
}

impl IntoNodes for &NodeList {
    fn into_nodes(self) -> Vec<NodeId> {
        self.as_slice().to_vec()
    }
}
