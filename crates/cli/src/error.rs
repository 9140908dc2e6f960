//! CLI error types.

use thiserror::Error;
use tliconnect_core::schedule::ScheduleError;

/// Result type alias for the CLI crate.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while loading a template or generating output.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Requested {requested} sessions, maximum is {max}")]
    TooManySessions { requested: u32, max: u32 },

    #[error("Could not read template {path}: {source}")]
    ReadTemplate {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
