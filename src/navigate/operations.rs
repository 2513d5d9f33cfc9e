//! Navigation operations implementation

use crate::error::NavigateError;
use crate::storage::filesystem::directory_exists;
use crate::storage::validation::normalize_lexically;
use std::path::{Path, PathBuf};

/// Resolves `target` against `current` and returns it if it is a directory.
pub fn change_directory(current: &Path, target: &str) -> Result<PathBuf, NavigateError> {
    if target.is_empty() {
        return Err(NavigateError::InvalidPath("Empty path provided".into()));
    }

    let target = Path::new(target);
    let resolved = if target.is_absolute() {
        normalize_lexically(target)
    } else {
        normalize_lexically(&current.join(target))
    };

    if !resolved.exists() {
        return Err(NavigateError::DirectoryNotFound(resolved));
    }

    if !directory_exists(&resolved) {
        return Err(NavigateError::NotADirectory(resolved));
    }

    Ok(resolved)
}
