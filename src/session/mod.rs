//! Interactive session
//!
//! Session state, console I/O and the menu loop that ties them together.

pub mod console;
pub mod handler;
pub mod state;

pub use console::Console;
pub use handler::{run_session, run_stdio};
pub use state::Session;
