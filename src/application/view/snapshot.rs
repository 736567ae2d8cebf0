use crate::resource_graph::domain::{LoadState, NodeId, NodeState, ResourceNode};
use crate::resource_graph::services::{
    ForestSummarizer, ForestSummary, TreeFlattener, TreeRow, VisibleCounter,
};
use crate::shared::error::GraphError;
use std::collections::{HashMap, HashSet};

/// Read-only copy of one graph view's state.
///
/// `children` is what is known, `expanded` is what is shown. Everything
/// the presentation layer derives (rows, counts, summary) is computed
/// from those two on demand.
#[derive(Debug, Clone)]
pub struct ForestSnapshot {
    pub generation: u64,
    pub load_state: LoadState,
    /// Cluster all descendants resolve against
    pub cluster: Option<String>,
    /// Root nodes, claim before composite
    pub forest: Vec<ResourceNode>,
    pub children: HashMap<NodeId, Vec<ResourceNode>>,
    pub expanded: HashSet<NodeId>,
    pub issues: Vec<GraphError>,
}

impl ForestSnapshot {
    pub(crate) fn empty(generation: u64, load_state: LoadState) -> Self {
        Self {
            generation,
            load_state,
            cluster: None,
            forest: Vec::new(),
            children: HashMap::new(),
            expanded: HashSet::new(),
            issues: Vec::new(),
        }
    }

    pub fn count_visible(&self) -> usize {
        VisibleCounter::count(&self.forest, &self.children, &self.expanded)
    }

    /// Visible rows in display order
    pub fn rows(&self) -> Vec<TreeRow<'_>> {
        TreeFlattener::flatten(&self.forest, &self.children, &self.expanded)
    }

    pub fn summary(&self) -> ForestSummary {
        ForestSummarizer::summarize(&self.rows())
    }

    pub fn node_state(&self, id: &NodeId) -> Option<NodeState> {
        self.find(id)
            .map(|node| TreeFlattener::node_state(node, &self.children, &self.expanded))
    }

    pub fn find(&self, id: &NodeId) -> Option<&ResourceNode> {
        self.known_nodes().into_iter().find(|node| &node.id == id)
    }

    /// First known node with this name, in tree order
    pub fn find_by_name(&self, name: &str) -> Option<&ResourceNode> {
        self.known_nodes().into_iter().find(|node| node.name == name)
    }

    /// Every node reachable through the cache, pre-order, whether shown
    /// or not.
    fn known_nodes(&self) -> Vec<&ResourceNode> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut pending: Vec<&ResourceNode> = self.forest.iter().rev().collect();
        while let Some(node) = pending.pop() {
            out.push(node);
            if !seen.insert(&node.id) {
                continue;
            }
            if let Some(kids) = self.children.get(&node.id) {
                pending.extend(kids.iter().rev());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> ForestSnapshot {
        let mut snapshot = ForestSnapshot::empty(1, LoadState::Loaded);
        snapshot.forest = vec![ResourceNode::composite_stub("root", None, 0)];
        snapshot.children.insert(
            NodeId::new("root"),
            vec![
                ResourceNode::stub("x", Some("root"), 1),
                ResourceNode::composite_stub("y", Some("root"), 1),
            ],
        );
        snapshot
            .children
            .insert(NodeId::new("y"), vec![ResourceNode::stub("z", Some("y"), 2)]);
        snapshot
    }

    #[test]
    fn test_find_reaches_hidden_nodes() {
        let snapshot = scenario();
        assert!(snapshot.expanded.is_empty());
        assert_eq!(snapshot.find(&NodeId::new("z")).map(|n| n.level), Some(2));
        assert_eq!(snapshot.find_by_name("y").map(|n| n.level), Some(1));
        assert!(snapshot.find(&NodeId::new("missing")).is_none());
    }

    #[test]
    fn test_node_states() {
        let mut snapshot = scenario();
        snapshot.expanded.insert(NodeId::new("root"));

        assert_eq!(
            snapshot.node_state(&NodeId::new("root")),
            Some(NodeState::Expanded)
        );
        assert_eq!(snapshot.node_state(&NodeId::new("x")), Some(NodeState::Leaf));
        assert_eq!(
            snapshot.node_state(&NodeId::new("y")),
            Some(NodeState::Collapsed)
        );
    }

    #[test]
    fn test_rows_and_count_agree() {
        let mut snapshot = scenario();
        snapshot.expanded.insert(NodeId::new("root"));
        snapshot.expanded.insert(NodeId::new("y"));

        assert_eq!(snapshot.count_visible(), 4);
        assert_eq!(snapshot.rows().len(), 4);
        assert_eq!(snapshot.summary().visible, 4);
    }
}
