//! Terminal front end for the strictly_minimax engine.
//!
//! The binary wires these pieces to stdin/stdout; they take generic
//! readers and writers so the loop can be driven from tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use play::{Tally, run_rounds, suggest};
