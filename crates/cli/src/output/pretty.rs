//! Pretty output formatting.

use chrono::NaiveDate;
use tliconnect_core::schedule::{GeneratedSession, ScheduleSummary};

/// Format a session for display.
pub fn format_session(index: usize, session: &GeneratedSession) -> String {
    let mut output = format!(
        "#{} {} ({}) {}-{}\n  Lesson {}: {}",
        index + 1,
        session.date,
        session.weekday(),
        session.start_time.format("%H:%M"),
        session.end_time.format("%H:%M"),
        session.sequence_number,
        session.title
    );
    for resource in &session.resources {
        output.push_str(&format!("\n  {}: {}", resource.label, resource.url));
    }
    output
}

/// Format sessions for display.
pub fn format_sessions(sessions: &[GeneratedSession]) -> String {
    if sessions.is_empty() {
        return "No sessions scheduled.".to_string();
    }
    let mut output = format!("SESSIONS ({})\n", sessions.len());
    output.push_str(&"-".repeat(40));
    for (index, session) in sessions.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&format!("\n{}", format_session(index, session)));
    }
    output
}

/// Format the end date of a schedule.
pub fn format_end_date(end_date: Option<NaiveDate>) -> String {
    match end_date {
        Some(date) => format!("Last session: {}", date),
        None => "No sessions scheduled.".to_string(),
    }
}

/// Format a schedule summary.
pub fn format_summary(summary: &ScheduleSummary) -> String {
    match (summary.first_date, summary.last_date) {
        (Some(first), Some(last)) => format!(
            "Sessions: {}\n  First: {}\n  Last: {}",
            summary.total_sessions, first, last
        ),
        _ => "No sessions scheduled.".to_string(),
    }
}
