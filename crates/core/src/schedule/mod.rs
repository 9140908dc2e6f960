mod error;
mod generator;
mod queries;
mod requests;
mod types;

pub use error::ScheduleError;
pub use generator::{end_date, generate, validate_content};
pub use queries::{filter_sessions_by_date_range, summarize, upcoming_sessions, ScheduleSummary};
pub use requests::{
    parse_local_date, session_count, ScheduleRequest, ScheduleTemplate, TimeSlotRequest,
};
pub use types::{
    ContentUnit, GeneratedSession, RecurrenceRule, ResourceLink, TimeSlot, Weekdays,
};
