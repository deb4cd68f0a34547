use crate::sanitize::{sanitize_extension, sanitize_prefix};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("{0} has no parent directory")]
    NoParent(PathBuf),
    #[error("rename failed: {from} -> {to}: {source}")]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `{prefix}-{part1}-...-{partN}.{extension}`
pub fn build_target_name(prefix: &str, parts: &[String], extension: &str) -> String {
    let mut name = sanitize_prefix(prefix);
    for part in parts {
        name.push('-');
        name.push_str(part);
    }
    name.push('.');
    name.push_str(&sanitize_extension(extension));
    name
}

/// Renames `original_path` to `new_name` inside the same directory.
///
/// An existing file at the target is replaced.
pub fn rename_in_place(original_path: &Path, new_name: &str) -> Result<PathBuf, RenameError> {
    let parent = original_path
        .parent()
        .ok_or_else(|| RenameError::NoParent(original_path.to_path_buf()))?;
    let target = parent.join(new_name);

    if target == original_path {
        tracing::debug!(path = %target.display(), "already named, nothing to do");
        return Ok(target);
    }

    if target.exists() {
        tracing::warn!(
            target = %target.display(),
            "target already exists and will be overwritten"
        );
    }

    fs::rename(original_path, &target).map_err(|source| RenameError::Io {
        from: original_path.to_path_buf(),
        to: target.clone(),
        source,
    })?;
    tracing::info!(
        from = %original_path.display(),
        to = %target.display(),
        "renamed"
    );
    Ok(target)
}
