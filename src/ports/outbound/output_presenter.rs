use crate::shared::Result;

/// OutputPresenter port - final destination of a rendered forest
///
/// Stdout and a file on disk are the two destinations the CLI knows.
pub trait OutputPresenter {
    /// Writes the rendered tree table or JSON document as-is
    ///
    /// # Errors
    /// Fails when the destination cannot be written, e.g. a missing parent
    /// directory or an output path that is a symbolic link.
    fn present(&self, content: &str) -> Result<()>;
}
