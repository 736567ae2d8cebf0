/// Result alias used by the application and adapter layers.
///
/// Domain-level failures are typed (`GraphError`, `FetchError`) and are
/// converted into `anyhow::Error` at the boundary where they stop being
/// recoverable.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
