use crate::shared::Result;
use std::collections::HashMap;
use std::path::Path;

/// EntityReader port for reading the owning entity's annotations
///
/// The annotations carry the coordinates of the root claim and composite.
pub trait EntityReader {
    /// Reads `metadata.annotations` from a catalog entity document
    ///
    /// # Returns
    /// The annotation mapping. A document without annotations yields an
    /// empty mapping.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The document is neither valid YAML nor valid JSON
    fn read_annotations(&self, path: &Path) -> Result<HashMap<String, String>>;
}
