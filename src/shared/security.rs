use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of an entity or config document (10 MB)
pub const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates a value that will be spliced into a REST path as one segment.
///
/// Annotation values and child references come from remote objects, so a
/// value containing separators or query syntax could address a different
/// resource than the one it names.
pub fn validate_path_segment(segment: &str, description: &str) -> Result<()> {
    if segment.is_empty() {
        anyhow::bail!("{} must not be empty", description);
    }

    if segment.contains('/') || segment.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            description
        );
    }

    if segment == "." || segment.contains("..") {
        anyhow::bail!("Security: {} contains '..' which is not allowed", description);
    }

    if segment.contains('#') || segment.contains('?') || segment.contains('@') {
        anyhow::bail!("Security: {} contains URL-unsafe characters", description);
    }

    if segment.chars().any(char::is_whitespace) {
        anyhow::bail!("{} contains whitespace", description);
    }

    Ok(())
}
