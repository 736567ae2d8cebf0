use serde::Serialize;

/// Lifecycle of one graph view's root resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    /// Nothing requested yet
    Idle,
    /// Root resolution in flight
    Loading,
    /// At least one root resolved
    Loaded,
    /// Resolution finished with no roots ("no resources found")
    Empty,
}

impl LoadState {
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Loaded | LoadState::Empty)
    }
}

/// Expansion state of a single node as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    /// No child references; cannot be expanded
    Leaf,
    Collapsed,
    /// Expanded, children still being fetched
    Loading,
    Expanded,
}
