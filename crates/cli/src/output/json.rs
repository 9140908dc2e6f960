//! JSON output formatting.

use serde::Serialize;

use crate::error::Result;

/// Serialize a value as single-line JSON for piping into other tools.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
