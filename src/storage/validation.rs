//! Path validation
//!
//! Start directory check. This is a lexical check only: symlinks are not
//! resolved and nothing on disk is consulted, so it is not a sandbox.

use std::path::{Component, Path, PathBuf};

/// Accepts `path` when it is absolute and its relative form from `root`
/// contains no `..`.
pub fn validate_start_directory(path: &Path, root: &Path) -> bool {
    if !path.is_absolute() {
        return false;
    }

    let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let relative = relative_to(path, &root);

    !relative.to_string_lossy().contains("..")
}

/// Collapses `.` and `..` components without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` stays at `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.iter().collect()
}

/// Lexical path of `path` relative to `base`, both normalized first.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = normalize_lexically(path);
    let base = normalize_lexically(base);

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}
