use super::{Visitable, Visitor};

/// One node observed during a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedNode {
    pub name: String,
    pub index: Option<usize>,
    pub type_name: &'static str,
}

/// Visitor that records every visited node in traversal order.
///
/// Downstream indexers use this to flatten an object graph without writing
/// per-type recursion; tests use it to assert traversal order and pruning.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    nodes: Vec<CollectedNode>,
}

impl CollectingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[CollectedNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<CollectedNode> {
        self.nodes
    }

    /// The visited type names, in traversal order.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.nodes.iter().map(|node| node.type_name).collect()
    }
}

impl Visitor for CollectingVisitor {
    fn visit(&mut self, name: &str, index: Option<usize>, node: &dyn Visitable) -> bool {
        self.nodes.push(CollectedNode {
            name: name.to_string(),
            index,
            type_name: node.type_name(),
        });
        true
    }
}
