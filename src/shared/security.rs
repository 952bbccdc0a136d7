use crate::shared::error::HarvestError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(HarvestError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Path is a symbolic link. {} operations on symbolic links are not allowed.",
                operation
            ),
            hint: "Point the tool at a regular directory or file".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates a value that will be spliced into a URL path segment
///
/// Rejects path separators, `..` and characters that would change the
/// meaning of the URL.
pub fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
    if component.is_empty() {
        anyhow::bail!("{} must not be empty", component_type);
    }

    if component.contains('/') || component.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            component_type
        );
    }

    if component.contains("..") {
        anyhow::bail!(
            "Security: {} contains '..' which is not allowed",
            component_type
        );
    }

    if component.contains('#') || component.contains('?') || component.contains('@') {
        anyhow::bail!(
            "Security: {} contains URL-unsafe characters",
            component_type
        );
    }

    Ok(())
}
