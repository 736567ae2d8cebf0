//! Expansion cache and view state for one resource graph.
mod graph_view;
mod snapshot;

pub use graph_view::GraphView;
pub use snapshot::ForestSnapshot;
