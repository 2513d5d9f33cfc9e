//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::error::StorageError;

/// The operations the menu can run against the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Copy,
    Move,
    Delete,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Copy => "copy",
            Operation::Move => "move",
            Operation::Delete => "delete",
        }
    }
}

/// A single line of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Directory { name: String },
    File { name: String, size: u64 },
}

impl ListEntry {
    pub fn name(&self) -> &str {
        match self {
            ListEntry::Directory { name } | ListEntry::File { name, .. } => name,
        }
    }
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListEntry::Directory { name } => write!(f, "{name}/"),
            ListEntry::File { name, size } => write!(f, "{name} - {size} bytes"),
        }
    }
}

/// Lazily produced directory listing.
///
/// Entries come out in the order the OS returns them. Metadata follows
/// symlinks, so a dangling link yields an error.
pub struct Listing {
    pub(crate) path: PathBuf,
    pub(crate) entries: fs::ReadDir,
}

impl Iterator for Listing {
    type Item = Result<ListEntry, StorageError>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.entries.next()? {
            Ok(entry) => entry,
            Err(e) => return Some(Err(StorageError::from_io(&self.path, e))),
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let entry_path = entry.path();

        Some(
            fs::metadata(&entry_path)
                .map(|metadata| {
                    if metadata.is_dir() {
                        ListEntry::Directory { name }
                    } else {
                        ListEntry::File {
                            name,
                            size: metadata.len(),
                        }
                    }
                })
                .map_err(|e| StorageError::from_io(&entry_path, e)),
        )
    }
}

/// Result of a copy operation
#[derive(Debug, Clone)]
pub struct CopyReport {
    pub item_name: String,
    pub destination: PathBuf,
}

impl fmt::Display for CopyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was copied to {}", self.item_name, self.destination.display())
    }
}

/// Result of a move operation
#[derive(Debug, Clone)]
pub struct MoveReport {
    pub item_name: String,
    pub destination: PathBuf,
    /// True when the move had to fall back to copy + remove.
    pub copied_across_devices: bool,
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was moved to {}", self.item_name, self.destination.display())
    }
}

/// Result of a delete-with-backup operation
#[derive(Debug, Clone)]
pub struct DeleteReport {
    pub item_name: String,
    pub backup_path: PathBuf,
}

impl fmt::Display for DeleteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was deleted and backed up.", self.item_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_entries_render_like_the_menu_expects() {
        let dir = ListEntry::Directory { name: "photos".into() };
        let file = ListEntry::File {
            name: "a.txt".into(),
            size: 10,
        };
        assert_eq!(dir.to_string(), "photos/");
        assert_eq!(file.to_string(), "a.txt - 10 bytes");
        assert_eq!(file.name(), "a.txt");
    }

    #[test]
    fn reports_name_the_item() {
        let report = DeleteReport {
            item_name: "a.txt".into(),
            backup_path: PathBuf::from("/b/deleted_a.txt"),
        };
        assert_eq!(report.to_string(), "a.txt was deleted and backed up.");

        let report = CopyReport {
            item_name: "docs".into(),
            destination: PathBuf::from("/tmp/docs2"),
        };
        assert_eq!(report.to_string(), "docs was copied to /tmp/docs2");
    }
}
