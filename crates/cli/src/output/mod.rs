//! Output rendering.
//!
//! Each command hands its value plus a human-readable formatter to [`render`],
//! which picks one according to `--format`.

pub mod json;
pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Render `value` as compact JSON, or through `pretty` for terminal output.
pub fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => Ok(pretty(value)),
    }
}
