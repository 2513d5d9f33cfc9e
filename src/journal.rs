//! Action log
//!
//! Appends one `<timestamp>: <description>` line per completed action to a
//! plain text file. The file is never read back and never rotated.

use chrono::Local;
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::JournalError;

/// Local time with microseconds, e.g. `2024-05-01 13:37:00.123456`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Append-only action log
#[derive(Debug, Clone)]
pub struct ActionLog {
    path: PathBuf,
}

impl ActionLog {
    /// Prepares the log at `path`, creating its parent directory if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, JournalError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| JournalError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `action` with the current local timestamp.
    pub fn record(&self, action: &str) -> Result<(), JournalError> {
        let write_error = |source: std::io::Error| JournalError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_error)?;

        writeln!(file, "{}: {}", Local::now().format(TIMESTAMP_FORMAT), action)
            .map_err(write_error)?;

        debug!("Recorded action in {}: {}", self.path.display(), action);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_creates_missing_log_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fm_log").join("system_log.txt");

        let log = ActionLog::open(&path).unwrap();

        assert!(path.parent().unwrap().is_dir());
        assert_eq!(log.path(), path);
        // Nothing is written until an action is recorded.
        assert!(!path.exists());
    }

    #[test]
    fn record_appends_timestamped_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("actions.log");
        let log = ActionLog::open(&path).unwrap();

        log.record("Copied /a to /b").unwrap();
        log.record("Deleted /c").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(": Copied /a to /b"));
        assert!(lines[1].ends_with(": Deleted /c"));

        let (stamp, _) = lines[0].split_once(": ").unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    }
}
