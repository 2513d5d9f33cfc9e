//! Storage operations
//!
//! Handles the filesystem side of the menu: list, copy, move and
//! delete-with-backup. Every operation returns its error instead of printing
//! it; the menu loop decides how failures are shown.

use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::filesystem::{
    copy_file, copy_tree, create_directory, is_cross_device, item_name, remove_item,
};
use crate::storage::results::{CopyReport, DeleteReport, Listing, MoveReport};

/// Prefix given to backup copies of deleted items.
pub const BACKUP_PREFIX: &str = "deleted_";

/// Opens `path` for a non-recursive listing.
pub fn list_directory(path: &Path) -> Result<Listing, StorageError> {
    let entries = fs::read_dir(path).map_err(|e| StorageError::from_io(path, e))?;

    info!("Listing directory {}", path.display());

    Ok(Listing {
        path: path.to_path_buf(),
        entries,
    })
}

/// Copies a file or a whole directory tree.
///
/// Directories need a destination that does not exist yet. Files may be
/// copied onto a path or into an existing directory.
pub fn copy_item(source: &Path, destination: &Path) -> Result<CopyReport, StorageError> {
    let name = display_name(source);

    if source.is_dir() {
        copy_tree(source, destination)?;
    } else {
        copy_file(source, destination)?;
    }

    info!("Copied {} to {}", source.display(), destination.display());

    Ok(CopyReport {
        item_name: name,
        destination: destination.to_path_buf(),
    })
}

/// Moves a file or directory, renaming when possible.
///
/// An existing directory as destination receives the item under its own
/// name. Across filesystems the item is copied and the original removed.
pub fn move_item(source: &Path, destination: &Path) -> Result<MoveReport, StorageError> {
    let name = display_name(source);

    if fs::symlink_metadata(source).is_err() {
        return Err(StorageError::NotFound(source.to_path_buf()));
    }

    let target = if destination.is_dir() {
        let inner = destination.join(
            source
                .file_name()
                .ok_or_else(|| StorageError::InvalidPath(source.display().to_string()))?,
        );
        if fs::symlink_metadata(&inner).is_ok() {
            return Err(StorageError::AlreadyExists(inner));
        }
        inner
    } else {
        destination.to_path_buf()
    };

    let copied_across_devices = match fs::rename(source, &target) {
        Ok(()) => false,
        Err(e) if is_cross_device(&e) => {
            warn!(
                "{} and {} are on different devices, falling back to copy",
                source.display(),
                target.display()
            );
            if source.is_dir() {
                copy_tree(source, &target)?;
            } else {
                copy_file(source, &target)?;
            }
            remove_item(source)?;
            true
        }
        Err(e) => return Err(StorageError::from_io(source, e)),
    };

    info!("Moved {} to {}", source.display(), target.display());

    Ok(MoveReport {
        item_name: name,
        destination: destination.to_path_buf(),
        copied_across_devices,
    })
}

/// Deletes `item` after copying it to `backup_dir/deleted_<name>`.
///
/// The original is only removed once the backup copy succeeded. A failed
/// backup leaves the original in place.
pub fn delete_item(item: &Path, backup_dir: &Path) -> Result<DeleteReport, StorageError> {
    create_directory(backup_dir)?;

    let name =
        item_name(item).ok_or_else(|| StorageError::InvalidPath(item.display().to_string()))?;
    let backup_path = backup_path_for(backup_dir, &name);

    if item.is_dir() {
        copy_tree(item, &backup_path)?;
    } else {
        if !item.exists() {
            return Err(StorageError::NotFound(item.to_path_buf()));
        }
        fs::copy(item, &backup_path).map_err(|e| StorageError::from_io(&backup_path, e))?;
    }

    remove_item(item)?;

    info!(
        "Deleted {} (backup at {})",
        item.display(),
        backup_path.display()
    );

    Ok(DeleteReport {
        item_name: name,
        backup_path,
    })
}

/// Location a deleted item named `name` is backed up to.
pub fn backup_path_for(backup_dir: &Path, name: &str) -> PathBuf {
    backup_dir.join(format!("{BACKUP_PREFIX}{name}"))
}

fn display_name(path: &Path) -> String {
    item_name(path).unwrap_or_else(|| path.display().to_string())
}
