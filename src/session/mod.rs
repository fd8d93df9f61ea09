//! Interactive play: parse a line, apply it, print the board.
//!
//! The `bowl` binary is a thin wrapper around [`Session`]; everything it
//! prints comes from here so it can be tested without a terminal.

pub mod command;
pub mod commentary;
pub mod config;
pub mod driver;

pub use command::Command;
pub use config::{ConfigError, SessionConfig};
pub use driver::{Session, SessionOutcome};
