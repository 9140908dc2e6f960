//! tliconnect_cli - command-line front-end for course session scheduling.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod template;

pub use config::Config;
pub use error::{CliError, Result};
