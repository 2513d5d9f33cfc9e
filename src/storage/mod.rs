//! File system storage management
//!
//! Handles the list, copy, move and delete-with-backup operations and the
//! start directory check.

pub mod filesystem;
pub mod operations;
pub mod results;
pub mod validation;

pub use operations::{copy_item, delete_item, list_directory, move_item};
pub use results::{CopyReport, DeleteReport, ListEntry, Listing, MoveReport, Operation};
pub use validation::validate_start_directory;
