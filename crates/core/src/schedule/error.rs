use thiserror::Error;

/// Errors raised when a schedule cannot be generated from the given input.
///
/// Every variant is an invalid-argument error: generation either completes
/// or fails before producing any session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Content list cannot be empty when sessions are requested")]
    EmptyContent,
    #[error("Duplicate content sequence number: {0}")]
    DuplicateSequence(u32),
    #[error("Session count cannot be negative: {0}")]
    NegativeSessionCount(i64),
    #[error("Session count too large: {0}")]
    SessionCountOverflow(i64),
    #[error("Invalid weekday number {0} (expected 0=Sunday..6=Saturday)")]
    InvalidWeekday(i64),
    #[error("End time must be after start time")]
    InvalidTimeRange,
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}
