//! Access control
//!
//! Permission modes and the gate deciding which menu choices each mode may run.

pub mod gate;
pub mod mode;

pub use gate::{is_permitted, visible_choices};
pub use mode::Mode;
