use crate::resource_graph::domain::{NodeId, ResourceNode};
use std::collections::{HashMap, HashSet};

/// Counts the nodes currently visible in a forest.
///
/// `count(n) = 1 + (n expanded ? sum(count(c) for c in children[n]) : 0)`,
/// summed over the roots. Computed from the cache and the expanded set on
/// every call, so it can never drift from them.
pub struct VisibleCounter;

impl VisibleCounter {
    pub fn count(
        forest: &[ResourceNode],
        children: &HashMap<NodeId, Vec<ResourceNode>>,
        expanded: &HashSet<NodeId>,
    ) -> usize {
        let mut ancestors = Vec::new();
        forest
            .iter()
            .map(|root| Self::count_node(root, children, expanded, &mut ancestors))
            .sum()
    }

    fn count_node<'a>(
        node: &'a ResourceNode,
        children: &'a HashMap<NodeId, Vec<ResourceNode>>,
        expanded: &HashSet<NodeId>,
        ancestors: &mut Vec<&'a NodeId>,
    ) -> usize {
        // A node that reappears below itself is shown but not re-entered
        if !expanded.contains(&node.id) || ancestors.contains(&&node.id) {
            return 1;
        }
        let Some(kids) = children.get(&node.id) else {
            return 1;
        };

        ancestors.push(&node.id);
        let below: usize = kids
            .iter()
            .map(|kid| Self::count_node(kid, children, expanded, ancestors))
            .sum();
        ancestors.pop();

        1 + below
    }
}
