use crate::resource_graph::domain::{NodeId, NodeState, ResourceNode};
use std::collections::{HashMap, HashSet};

/// One visible row of the forest in display order.
#[derive(Debug, Clone, Copy)]
pub struct TreeRow<'a> {
    pub node: &'a ResourceNode,
    pub state: NodeState,
}

impl TreeRow<'_> {
    /// Branch glyph drawn before a nested row: `├` or `└` for the last
    /// sibling, nothing for roots.
    pub fn prefix(&self) -> &'static str {
        match (self.node.level, self.node.is_last_child) {
            (0, _) => "",
            (_, true) => "└",
            (_, false) => "├",
        }
    }
}

/// Walks the forest the way a tree table shows it: pre-order, entering
/// only expanded nodes.
pub struct TreeFlattener;

impl TreeFlattener {
    pub fn flatten<'a>(
        forest: &'a [ResourceNode],
        children: &'a HashMap<NodeId, Vec<ResourceNode>>,
        expanded: &HashSet<NodeId>,
    ) -> Vec<TreeRow<'a>> {
        let mut rows = Vec::new();
        let mut ancestors = Vec::new();
        for root in forest {
            Self::visit(root, children, expanded, &mut ancestors, &mut rows);
        }
        rows
    }

    /// State of one node given the cache and the expanded set.
    pub fn node_state(
        node: &ResourceNode,
        children: &HashMap<NodeId, Vec<ResourceNode>>,
        expanded: &HashSet<NodeId>,
    ) -> NodeState {
        if !node.is_composite() {
            NodeState::Leaf
        } else if !expanded.contains(&node.id) {
            NodeState::Collapsed
        } else if children.contains_key(&node.id) {
            NodeState::Expanded
        } else {
            NodeState::Loading
        }
    }

    fn visit<'a>(
        node: &'a ResourceNode,
        children: &'a HashMap<NodeId, Vec<ResourceNode>>,
        expanded: &HashSet<NodeId>,
        ancestors: &mut Vec<&'a NodeId>,
        rows: &mut Vec<TreeRow<'a>>,
    ) {
        let state = Self::node_state(node, children, expanded);
        rows.push(TreeRow { node, state });

        if state != NodeState::Expanded || ancestors.contains(&&node.id) {
            return;
        }
        if let Some(kids) = children.get(&node.id) {
            ancestors.push(&node.id);
            for kid in kids {
                Self::visit(kid, children, expanded, ancestors, rows);
            }
            ancestors.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<ResourceNode>, HashMap<NodeId, Vec<ResourceNode>>) {
        let root = ResourceNode::composite_stub("root", None, 0);
        let x = ResourceNode::stub("x", Some("root"), 1);
        let mut y = ResourceNode::composite_stub("y", Some("root"), 1);
        y.is_last_child = true;
        let mut z = ResourceNode::stub("z", Some("y"), 2);
        z.is_last_child = true;

        let mut children = HashMap::new();
        children.insert(NodeId::new("root"), vec![x, y]);
        children.insert(NodeId::new("y"), vec![z]);
        (vec![root], children)
    }

    fn names(rows: &[TreeRow<'_>]) -> Vec<String> {
        rows.iter().map(|r| r.node.name.clone()).collect()
    }

    #[test]
    fn test_flatten_fully_expanded() {
        let (forest, children) = fixture();
        let expanded: HashSet<NodeId> = ["root", "y"].into_iter().map(NodeId::from).collect();

        let rows = TreeFlattener::flatten(&forest, &children, &expanded);
        assert_eq!(names(&rows), vec!["root", "x", "y", "z"]);
        assert_eq!(rows[0].prefix(), "");
        assert_eq!(rows[1].prefix(), "├");
        assert_eq!(rows[2].prefix(), "└");
        assert_eq!(rows[1].state, NodeState::Leaf);
        assert_eq!(rows[2].state, NodeState::Expanded);
    }

    #[test]
    fn test_flatten_collapsed_branch() {
        let (forest, children) = fixture();
        let expanded: HashSet<NodeId> = ["root"].into_iter().map(NodeId::from).collect();

        let rows = TreeFlattener::flatten(&forest, &children, &expanded);
        assert_eq!(names(&rows), vec!["root", "x", "y"]);
        assert_eq!(rows[2].state, NodeState::Collapsed);
    }

    #[test]
    fn test_node_state_loading_when_children_unresolved() {
        let node = ResourceNode::composite_stub("pending", None, 0);
        let expanded: HashSet<NodeId> = [NodeId::new("pending")].into_iter().collect();
        assert_eq!(
            TreeFlattener::node_state(&node, &HashMap::new(), &expanded),
            NodeState::Loading
        );
    }
}
