//! Module `state`
//!
//! Per-process session state: the fixed mode, the browse location and the
//! places operations write to.

use std::path::{Path, PathBuf};

use crate::access::Mode;
use crate::config::ManagerConfig;
use crate::error::JournalError;
use crate::journal::ActionLog;

/// State of the running menu session.
pub struct Session {
    mode: Mode,
    current_directory: PathBuf,
    backup_directory: PathBuf,
    action_log: ActionLog,
}

impl Session {
    /// Builds the session from the resolved configuration, preparing the action log.
    pub fn new(config: &ManagerConfig) -> Result<Self, JournalError> {
        Ok(Self {
            mode: config.mode,
            current_directory: config.start_directory.clone(),
            backup_directory: config.backup_path.clone(),
            action_log: ActionLog::open(&config.log_path)?,
        })
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_directory(&self) -> &Path {
        &self.current_directory
    }

    pub fn backup_directory(&self) -> &Path {
        &self.backup_directory
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.action_log
    }

    // --------------------
    // Setter methods
    // --------------------

    /// Only the change-directory choice moves the session.
    pub fn set_current_directory(&mut self, path: PathBuf) {
        self.current_directory = path;
    }

    /// Resolves a path typed by the user against the current directory.
    ///
    /// Empty input resolves to an empty path, which never exists.
    pub fn resolve(&self, raw: &str) -> PathBuf {
        if raw.is_empty() {
            return PathBuf::new();
        }
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_directory.join(path)
        }
    }
}
