use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::GeneratedSession;

/// Overview of a generated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_sessions: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// Filters sessions falling within `start..=end`.
pub fn filter_sessions_by_date_range(
    sessions: &[GeneratedSession],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&GeneratedSession> {
    sessions
        .iter()
        .filter(|session| session.date >= start && session.date <= end)
        .collect()
}

/// Returns the sessions taking place on or after `today`.
pub fn upcoming_sessions(
    sessions: &[GeneratedSession],
    today: NaiveDate,
) -> Vec<&GeneratedSession> {
    sessions
        .iter()
        .filter(|session| session.date >= today)
        .collect()
}

/// Summarizes a generated schedule.
/// Assumes `sessions` is in generation order (ascending dates).
pub fn summarize(sessions: &[GeneratedSession]) -> ScheduleSummary {
    ScheduleSummary {
        total_sessions: sessions.len(),
        first_date: sessions.first().map(|session| session.date),
        last_date: sessions.last().map(|session| session.date),
    }
}
