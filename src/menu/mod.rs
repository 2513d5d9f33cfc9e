//! Menu protocol
//!
//! Parses menu choices, holds the fixed user-facing messages and dispatches
//! each choice to its handler.

pub mod commands;
pub mod handlers;
pub mod responses;

pub use commands::{MenuChoice, parse_choice};
pub use handlers::{CommandStatus, handle_choice, render_menu};
