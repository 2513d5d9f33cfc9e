//! Navigate module
//!
//! Handles changing the session's current directory.

mod operations;

// Re-export public functions
pub use operations::change_directory;
