//! pessoas-cli library
//!
//! Command-line front end for the person registry. Exposes the argument
//! parser and the command runner so the binary stays a thin shell.

pub(crate) mod app;
pub(crate) mod auth_commands;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod person_commands;


pub use app::run;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
