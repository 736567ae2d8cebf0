use crate::ports::outbound::EntityReader;
use crate::shared::error::XpGraphError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_DOCUMENT_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use serde_yaml_ng::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct EntityDocument {
    #[serde(default)]
    metadata: EntityMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct EntityMetadata {
    #[serde(default)]
    annotations: HashMap<String, Value>,
}

/// FileSystemReader adapter for reading catalog entity files
///
/// Accepts YAML (including multi-document files) and JSON, which parses
/// as YAML.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type)?;
        let metadata = fs::metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;
        validate_file_size(metadata.len(), path, MAX_DOCUMENT_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }

    /// Annotations of the first document that has any. Scalar values are
    /// kept as their text; nested values are dropped.
    fn parse_annotations(content: &str) -> std::result::Result<HashMap<String, String>, String> {
        for document in serde_yaml_ng::Deserializer::from_str(content) {
            let entity = EntityDocument::deserialize(document).map_err(|e| e.to_string())?;
            let annotations: HashMap<String, String> = entity
                .metadata
                .annotations
                .into_iter()
                .filter_map(|(key, value)| Self::scalar_text(value).map(|text| (key, text)))
                .collect();
            if !annotations.is_empty() {
                return Ok(annotations);
            }
        }
        Ok(HashMap::new())
    }

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityReader for FileSystemReader {
    fn read_annotations(&self, path: &Path) -> Result<HashMap<String, String>> {
        if !path.exists() {
            return Err(XpGraphError::EntityNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass the catalog entity file (e.g. catalog-info.yaml) with --entity."
                    .to_string(),
            }
            .into());
        }

        let content = self
            .safe_read_file(path, "entity file")
            .map_err(|e| XpGraphError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Self::parse_annotations(&content).map_err(|details| {
            XpGraphError::EntityParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}
