pub mod access;
pub mod cli;
pub mod config;
pub mod error;
pub mod journal;
pub mod menu;
pub mod navigate;
pub mod session;
pub mod storage;

pub use access::Mode;
pub use config::ManagerConfig;
pub use session::{Console, Session, run_session};
