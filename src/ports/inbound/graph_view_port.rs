use crate::application::dto::{LoadOutcome, ToggleOutcome};
use crate::application::view::ForestSnapshot;
use crate::resource_graph::domain::{NodeId, RootCoordinates};
use async_trait::async_trait;

/// GraphViewPort - Inbound port of one interactive resource graph view
///
/// This is what a presentation layer drives: load the roots, expand and
/// collapse nodes, and read the current forest.
#[async_trait]
pub trait GraphViewPort: Send + Sync {
    /// Starts a new pass: discards all previous state, resolves the roots
    /// and, on the first successful pass, expands every composite.
    async fn load(&self, roots: &RootCoordinates) -> LoadOutcome;

    /// Collapses an expanded node, or expands a collapsed one, resolving
    /// its children if they are not cached yet.
    async fn toggle(&self, id: &NodeId) -> ToggleOutcome;

    /// Expands every composite in the forest, depth-first.
    ///
    /// # Returns
    /// Number of nodes that were not expanded before the call
    async fn expand_all(&self) -> usize;

    fn count_visible(&self) -> usize;

    fn snapshot(&self) -> ForestSnapshot;

    /// Tears the view down. Fetches still in flight are discarded when
    /// they land.
    fn reset(&self);
}
