//! Error types
//!
//! Defines domain-specific error types for each module of the file manager.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse classification of a storage failure, used for display and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    AlreadyExists,
    PermissionDenied,
    NotADirectory,
    InvalidPath,
    Other,
}

/// Storage module errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Destination already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Attaches `path` to an I/O error, folding the common kinds into dedicated variants.
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => StorageError::AlreadyExists(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::NotADirectory => StorageError::NotADirectory(path.to_path_buf()),
            _ => StorageError::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            StorageError::NotFound(_) => FailureKind::NotFound,
            StorageError::AlreadyExists(_) => FailureKind::AlreadyExists,
            StorageError::PermissionDenied(_) => FailureKind::PermissionDenied,
            StorageError::NotADirectory(_) => FailureKind::NotADirectory,
            StorageError::InvalidPath(_) => FailureKind::InvalidPath,
            StorageError::Io { .. } => FailureKind::Other,
        }
    }
}

/// Navigate module errors
#[derive(Debug, Error)]
pub enum NavigateError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Action log errors
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("cannot create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Top-level error that encompasses every failure the binary can hit at startup
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid directory path.")]
    InvalidStartDirectory(PathBuf),

    #[error("Action log error: {0}")]
    Journal(#[from] JournalError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_fold_into_dedicated_variants() {
        let path = Path::new("/tmp/missing");
        let err = StorageError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind(), FailureKind::NotFound);
        assert!(err.to_string().contains("/tmp/missing"));

        let err = StorageError::from_io(path, io::Error::from(io::ErrorKind::AlreadyExists));
        assert_eq!(err.kind(), FailureKind::AlreadyExists);
    }

    #[test]
    fn unclassified_io_errors_keep_their_source() {
        let err = StorageError::from_io(
            Path::new("/data"),
            io::Error::new(io::ErrorKind::Other, "disk on fire"),
        );
        assert_eq!(err.kind(), FailureKind::Other);
        assert_eq!(err.to_string(), "/data: disk on fire");
    }
}
