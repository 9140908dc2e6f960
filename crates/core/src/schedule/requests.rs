//! Schedule template payloads and their validation.
//!
//! Requests mirror what the course editor submits: weekday numbers, date
//! strings and a signed session count. [`ScheduleRequest::validate`] turns
//! them into a [`ScheduleTemplate`] whose invariants the generator relies on.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;
use super::generator::{end_date, generate, validate_content};
use super::queries::{summarize, ScheduleSummary};
use super::types::{ContentUnit, GeneratedSession, RecurrenceRule, TimeSlot, Weekdays};

/// Parses a calendar day written as `YYYY-MM-DD`.
///
/// No timezone is involved: the string names a local calendar day.
/// Only the zero-padded `dddd-dd-dd` shape is accepted; chrono alone would
/// also take unpadded fields and a leading sign.
pub fn parse_local_date(s: &str) -> Result<NaiveDate, ScheduleError> {
    let trimmed = s.trim();
    let well_formed = trimmed.len() == 10
        && trimmed.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(ScheduleError::InvalidDate(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(trimmed.to_string()))
}

/// Converts a raw session count into the generator's unsigned count.
pub fn session_count(raw: i64) -> Result<u32, ScheduleError> {
    if raw < 0 {
        return Err(ScheduleError::NegativeSessionCount(raw));
    }
    u32::try_from(raw).map_err(|_| ScheduleError::SessionCountOverflow(raw))
}

/// Request payload for one weekly time slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotRequest {
    /// Weekday numbers, 0=Sunday..6=Saturday.
    pub weekdays: Vec<i64>,
    #[serde(deserialize_with = "crate::serde::deserialize_time")]
    pub start_time: NaiveTime,
    #[serde(deserialize_with = "crate::serde::deserialize_time")]
    pub end_time: NaiveTime,
}

impl TimeSlotRequest {
    pub fn new(weekdays: Vec<i64>, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            weekdays,
            start_time,
            end_time,
        }
    }

    /// Validates weekday numbers and the time range.
    pub fn validate(self) -> Result<TimeSlot, ScheduleError> {
        let weekdays = Weekdays::from_numbers(self.weekdays)?;
        if self.end_time <= self.start_time {
            return Err(ScheduleError::InvalidTimeRange);
        }
        Ok(TimeSlot::new(weekdays, self.start_time, self.end_time))
    }
}

/// Request payload describing a course schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(deserialize_with = "crate::serde::deserialize_date")]
    pub start_date: NaiveDate,
    pub slots: Vec<TimeSlotRequest>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_date_list")]
    pub exclude_dates: Vec<NaiveDate>,
    pub total_sessions: i64,
    #[serde(default)]
    pub content: Vec<ContentUnit>,
}

impl ScheduleRequest {
    /// Create a single-slot request with no exclusions and no content.
    pub fn weekly(
        weekdays: Vec<i64>,
        start_time: NaiveTime,
        end_time: NaiveTime,
        start_date: NaiveDate,
        total_sessions: i64,
    ) -> Self {
        Self {
            start_date,
            slots: vec![TimeSlotRequest::new(weekdays, start_time, end_time)],
            exclude_dates: Vec::new(),
            total_sessions,
            content: Vec::new(),
        }
    }

    /// Add an excluded date.
    pub fn with_exclude_date(mut self, date: NaiveDate) -> Self {
        self.exclude_dates.push(date);
        self
    }

    /// Append a content unit.
    pub fn with_content(mut self, unit: ContentUnit) -> Self {
        self.content.push(unit);
        self
    }

    /// Validate the request into a template.
    ///
    /// Checks are applied in order: session count, slots, then content
    /// (only when at least one session is requested).
    pub fn validate(self) -> Result<ScheduleTemplate, ScheduleError> {
        let total_sessions = session_count(self.total_sessions)?;

        let rule = self.slots.into_iter().try_fold(
            RecurrenceRule::new(self.start_date).with_exclude_dates(self.exclude_dates),
            |rule, slot| Ok::<_, ScheduleError>(rule.with_slot(slot.validate()?)),
        )?;

        if total_sessions > 0 {
            validate_content(&self.content)?;
        }

        Ok(ScheduleTemplate {
            rule,
            content: self.content,
            total_sessions,
        })
    }
}

/// A validated rule, content list and target session count.
///
/// Changing any part produces a new template; sessions are always regenerated
/// in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTemplate {
    rule: RecurrenceRule,
    content: Vec<ContentUnit>,
    total_sessions: u32,
}

impl ScheduleTemplate {
    pub fn rule(&self) -> &RecurrenceRule {
        &self.rule
    }

    pub fn content(&self) -> &[ContentUnit] {
        &self.content
    }

    pub fn total_sessions(&self) -> u32 {
        self.total_sessions
    }

    /// Returns a template with additional excluded dates.
    pub fn with_exclusions(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.rule = self.rule.with_exclude_dates(dates);
        self
    }

    /// Returns a template targeting a different session count.
    pub fn with_total_sessions(mut self, total_sessions: u32) -> Result<Self, ScheduleError> {
        if total_sessions > 0 {
            validate_content(&self.content)?;
        }
        self.total_sessions = total_sessions;
        Ok(self)
    }

    /// Generate every session of this template.
    pub fn generate(&self) -> Result<Vec<GeneratedSession>, ScheduleError> {
        generate(&self.rule, &self.content, self.total_sessions)
    }

    /// Date of the last session, without generating the list.
    pub fn end_date(&self) -> Option<NaiveDate> {
        end_date(&self.rule, self.total_sessions)
    }

    /// Generate the sessions and summarize them.
    pub fn summary(&self) -> Result<ScheduleSummary, ScheduleError> {
        self.generate().map(|sessions| summarize(&sessions))
    }
}
