//! File system operations
//!
//! Low level helpers shared by the storage operations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::StorageError;

/// Create a directory and all of its parents
pub fn create_directory(path: &Path) -> Result<(), StorageError> {
    fs::create_dir_all(path).map_err(|e| StorageError::from_io(path, e))
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Returns the final component of `path` as a displayable string.
pub fn item_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

/// True when a rename failed only because source and target sit on different devices.
pub fn is_cross_device(error: &io::Error) -> bool {
    error.kind() == io::ErrorKind::CrossesDevices
}

/// Recursively copies `source` into `destination`, which must not exist yet.
///
/// Symlinks are followed. Directory permissions are applied once their
/// contents are in place. Returns the number of files copied.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<u64, StorageError> {
    if fs::symlink_metadata(destination).is_ok() {
        return Err(StorageError::AlreadyExists(destination.to_path_buf()));
    }

    // Snapshot the source before the destination exists, so a destination
    // nested inside the source is never walked.
    let entries = WalkDir::new(source)
        .follow_links(true)
        .min_depth(1)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| walk_error(source, e))?;

    create_directory(destination)?;

    let mut directories: Vec<(PathBuf, PathBuf)> =
        vec![(source.to_path_buf(), destination.to_path_buf())];
    let mut files_copied = 0;

    for entry in entries {
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|_| StorageError::InvalidPath(entry.path().display().to_string()))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir(&target).map_err(|e| StorageError::from_io(&target, e))?;
            directories.push((entry.path().to_path_buf(), target));
        } else {
            fs::copy(entry.path(), &target).map_err(|e| StorageError::from_io(&target, e))?;
            files_copied += 1;
        }
    }

    // Deepest first so a read-only parent does not block its children.
    for (from, to) in directories.iter().rev() {
        let permissions = fs::metadata(from)
            .map_err(|e| StorageError::from_io(from, e))?
            .permissions();
        fs::set_permissions(to, permissions).map_err(|e| StorageError::from_io(to, e))?;
    }

    debug!(
        "Copied tree {} -> {} ({} files)",
        source.display(),
        destination.display(),
        files_copied
    );

    Ok(files_copied)
}

/// Copies a single file with its permissions.
///
/// When `destination` is an existing directory the file is placed inside it.
/// Returns the path actually written.
pub fn copy_file(source: &Path, destination: &Path) -> Result<PathBuf, StorageError> {
    let target = if destination.is_dir() {
        let name = source
            .file_name()
            .ok_or_else(|| StorageError::InvalidPath(source.display().to_string()))?;
        destination.join(name)
    } else {
        destination.to_path_buf()
    };

    if !source.exists() {
        return Err(StorageError::NotFound(source.to_path_buf()));
    }

    fs::copy(source, &target).map_err(|e| StorageError::from_io(&target, e))?;
    Ok(target)
}

/// Removes a file, symlink or whole directory tree. Symlinks are unlinked, never followed.
pub fn remove_item(path: &Path) -> Result<(), StorageError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| StorageError::from_io(path, e))?;

    if metadata.file_type().is_dir() {
        fs::remove_dir_all(path).map_err(|e| StorageError::from_io(path, e))
    } else {
        fs::remove_file(path).map_err(|e| StorageError::from_io(path, e))
    }
}

fn walk_error(root: &Path, error: walkdir::Error) -> StorageError {
    let path = error.path().unwrap_or(root).to_path_buf();
    match error.into_io_error() {
        Some(io_error) => StorageError::from_io(&path, io_error),
        None => StorageError::InvalidPath(format!("filesystem loop at {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use tempfile::TempDir;

    fn sample_tree(root: &Path) -> PathBuf {
        let tree = root.join("tree");
        fs::create_dir_all(tree.join("nested/deeper")).unwrap();
        fs::write(tree.join("top.txt"), b"top").unwrap();
        fs::write(tree.join("nested/deeper/leaf.txt"), b"leaf!").unwrap();
        tree
    }

    #[test]
    fn copy_tree_reproduces_every_file() {
        let tmp = TempDir::new().unwrap();
        let tree = sample_tree(tmp.path());
        let copy = tmp.path().join("copy");

        let copied = copy_tree(&tree, &copy).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read(copy.join("top.txt")).unwrap(), b"top");
        assert_eq!(fs::read(copy.join("nested/deeper/leaf.txt")).unwrap(), b"leaf!");
    }

    #[test]
    fn copy_tree_refuses_existing_destination() {
        let tmp = TempDir::new().unwrap();
        let tree = sample_tree(tmp.path());
        let existing = tmp.path().join("existing");
        fs::create_dir(&existing).unwrap();
        fs::write(existing.join("keep.txt"), b"keep").unwrap();

        let err = copy_tree(&tree, &existing).unwrap_err();

        assert_eq!(err.kind(), FailureKind::AlreadyExists);
        assert_eq!(fs::read(existing.join("keep.txt")).unwrap(), b"keep");
        assert!(!existing.join("top.txt").exists());
    }

    #[test]
    fn copy_tree_into_own_subdirectory_copies_one_level() {
        let tmp = TempDir::new().unwrap();
        let tree = sample_tree(tmp.path());
        let inside = tree.join("b");

        let copied = copy_tree(&tree, &inside).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read(inside.join("top.txt")).unwrap(), b"top");
        assert!(inside.join("nested/deeper/leaf.txt").exists());
        assert!(!inside.join("b").exists());
    }

    #[test]
    fn copy_file_into_directory_keeps_the_name() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("note.txt");
        fs::write(&source, b"hello").unwrap();
        let dir = tmp.path().join("dir");
        fs::create_dir(&dir).unwrap();

        let written = copy_file(&source, &dir).unwrap();

        assert_eq!(written, dir.join("note.txt"));
        assert_eq!(fs::read(written).unwrap(), b"hello");
    }

    #[test]
    fn remove_item_handles_files_and_trees() {
        let tmp = TempDir::new().unwrap();
        let tree = sample_tree(tmp.path());
        let file = tmp.path().join("single");
        fs::write(&file, b"x").unwrap();

        remove_item(&tree).unwrap();
        remove_item(&file).unwrap();

        assert!(!tree.exists());
        assert!(!file.exists());
        assert_eq!(remove_item(&file).unwrap_err().kind(), FailureKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn remove_item_unlinks_symlinks_without_touching_target() {
        let tmp = TempDir::new().unwrap();
        let tree = sample_tree(tmp.path());
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&tree, &link).unwrap();

        remove_item(&link).unwrap();

        assert!(fs::symlink_metadata(&link).is_err());
        assert!(tree.join("top.txt").exists());
    }

    #[test]
    fn item_name_uses_last_component() {
        assert_eq!(item_name(Path::new("/a/b/c.txt")).as_deref(), Some("c.txt"));
        assert_eq!(item_name(Path::new("/")), None);
    }
}
