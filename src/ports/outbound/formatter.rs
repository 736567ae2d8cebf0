use crate::application::read_models::ForestReadModel;
use crate::shared::Result;

/// ForestFormatter port for rendering the visible forest
///
/// Implementations turn the read model into text (tree table, JSON).
pub trait ForestFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ForestReadModel) -> Result<String>;
}
