//! Error handlers
//!
//! Turns operation errors into the lines printed by the menu loop.

use log::{error, warn};

use crate::error::types::{NavigateError, StorageError};
use crate::storage::Operation;

/// Logs a failed operation and returns the message shown to the user.
pub fn operation_failure_message(operation: Operation, err: &StorageError) -> String {
    error!("{} failed: {}", operation.name(), err);
    match operation {
        Operation::List => format!("Error listing directory: {err}"),
        Operation::Copy => format!("Error copying item: {err}"),
        Operation::Move => format!("Error moving item: {err}"),
        Operation::Delete => format!("Error deleting item: {err}"),
    }
}

/// Logs a rejected directory change and returns the message shown to the user.
pub fn navigate_failure_message(err: &NavigateError) -> String {
    warn!("Change directory rejected: {}", err);
    "Invalid directory.".to_string()
}

/// Exit status for any error that stops the program before the menu loop.
pub const STARTUP_FAILURE_EXIT_CODE: u8 = 1;
