pub mod commands;
pub mod config;
pub mod render;
pub mod session;

pub use commands::{Command, parse_command};
pub use config::Config;
pub use session::{Outcome, Session};
