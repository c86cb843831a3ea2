//! Notice2Do CLI library.
//!
//! This library provides the command-line front end for Notice2Do: reading
//! notice text, resolving configuration and the backend credential, running
//! the extractor, rendering the record and writing the calendar file.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
