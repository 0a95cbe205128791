//! roster-cli library
//!
//! Everything behind the `roster` binary, exported so the command runner and
//! the interactive shell can be driven from tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod render;
pub mod runner;
pub mod shell;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
