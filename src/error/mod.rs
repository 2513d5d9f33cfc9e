//! Error handling
//!
//! Defines error types and the translation of errors into user-facing messages.

pub mod handlers;
pub mod types;

pub use types::*;
