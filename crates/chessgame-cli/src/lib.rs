//! Line-oriented text driver for the chess rules engine.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::Command;
pub use config::SessionConfig;
pub use error::CliError;
pub use session::Session;
