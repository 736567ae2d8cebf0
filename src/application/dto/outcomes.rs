use crate::resource_graph::domain::LoadState;
use crate::shared::error::GraphError;

/// Result of one `GraphView::load` pass.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// Generation token of the pass
    pub generation: u64,
    pub state: LoadState,
    /// Number of forest roots (claim and/or composite)
    pub roots: usize,
    /// Visible node count once the pass, including the automatic
    /// expand-all, has settled
    pub visible: usize,
    /// Branches and root classes left out of the forest, and why
    pub issues: Vec<GraphError>,
    /// The view was reset or reloaded before this pass finished, so its
    /// results were dropped
    pub discarded: bool,
}

impl LoadOutcome {
    pub fn is_empty(&self) -> bool {
        self.state == LoadState::Empty
    }
}

/// What `GraphView::toggle` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The node was expanded and is now hidden; its children stay cached
    Collapsed,
    /// The node is now expanded. `fetched` tells whether its children
    /// had to be resolved from the cluster.
    Expanded { fetched: bool },
    /// Unknown id, or a leaf with nothing to expand
    Ignored,
}
