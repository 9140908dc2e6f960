//! Recurring session generation.
//!
//! Expands a [`RecurrenceRule`] into dated [`GeneratedSession`]s by walking
//! calendar days forward from the rule's start date. Both [`generate`] and
//! [`end_date`] drive the same walk, so the end date always matches the last
//! generated session.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::error::ScheduleError;
use super::types::{ContentUnit, GeneratedSession, RecurrenceRule, TimeSlot};

/// Day-by-day walk yielding every schedulable day with the slot that claims it.
///
/// At most one item per calendar day. The walk ends at the last representable
/// date, or immediately when the rule has no weekdays at all.
struct SessionDays<'a> {
    rule: &'a RecurrenceRule,
    cursor: Option<NaiveDate>,
}

impl<'a> SessionDays<'a> {
    fn new(rule: &'a RecurrenceRule) -> Self {
        // No weekday can ever match: starting the walk would never yield.
        let cursor = (!rule.weekdays().is_empty()).then_some(rule.start_date);
        Self { rule, cursor }
    }
}

impl<'a> Iterator for SessionDays<'a> {
    type Item = (NaiveDate, &'a TimeSlot);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(day) = self.cursor {
            self.cursor = day.succ_opt();

            if self.rule.is_excluded(day) {
                continue;
            }
            if let Some(slot) = self.rule.slot_for(day) {
                return Some((day, slot));
            }
        }
        None
    }
}

/// Checks that a content list can be cycled across sessions.
///
/// The list must be non-empty and its sequence numbers unique.
pub fn validate_content(content: &[ContentUnit]) -> Result<(), ScheduleError> {
    if content.is_empty() {
        return Err(ScheduleError::EmptyContent);
    }

    let mut seen = HashSet::with_capacity(content.len());
    for unit in content {
        if !seen.insert(unit.sequence_number) {
            return Err(ScheduleError::DuplicateSequence(unit.sequence_number));
        }
    }

    Ok(())
}

/// Expands `rule` into exactly `total_sessions` dated sessions.
///
/// Session `k` (0-indexed) takes `content[k % content.len()]` and the times of
/// the first slot matching its weekday. Excluded dates are skipped without
/// consuming content. Returns an empty list when `total_sessions` is zero or
/// the rule has no weekdays.
///
/// # Errors
///
/// Returns [`ScheduleError::EmptyContent`] or
/// [`ScheduleError::DuplicateSequence`] when sessions are requested but the
/// content list cannot be cycled.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use tliconnect_core::schedule::{generate, ContentUnit, RecurrenceRule, Weekdays};
///
/// let rule = RecurrenceRule::weekly(
///     Weekdays::from_numbers([1, 3]).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
/// );
/// let content = vec![ContentUnit::new(1, "A"), ContentUnit::new(2, "B")];
/// let sessions = generate(&rule, &content, 4).unwrap();
///
/// assert_eq!(sessions.len(), 4);
/// assert_eq!(sessions[3].date, NaiveDate::from_ymd_opt(2025, 8, 13).unwrap());
/// assert_eq!(sessions[3].title, "B");
/// ```
pub fn generate(
    rule: &RecurrenceRule,
    content: &[ContentUnit],
    total_sessions: u32,
) -> Result<Vec<GeneratedSession>, ScheduleError> {
    if total_sessions == 0 {
        return Ok(Vec::new());
    }
    validate_content(content)?;

    let sessions: Vec<GeneratedSession> = SessionDays::new(rule)
        .take(total_sessions as usize)
        .enumerate()
        .map(|(index, (date, slot))| {
            GeneratedSession::new(date, slot, &content[index % content.len()])
        })
        .collect();

    if sessions.len() < total_sessions as usize {
        tracing::debug!(
            requested = total_sessions,
            generated = sessions.len(),
            weekdays = ?rule.weekdays().numbers(),
            "Schedule ran out of days before reaching the requested count"
        );
    }
    tracing::trace!(
        start_date = %rule.start_date,
        generated = sessions.len(),
        "Generated sessions"
    );

    Ok(sessions)
}

/// Returns the date of the last session [`generate`] would produce.
///
/// Runs the same walk without building sessions. `None` when no session would
/// be generated.
pub fn end_date(rule: &RecurrenceRule, total_sessions: u32) -> Option<NaiveDate> {
    SessionDays::new(rule)
        .take(total_sessions as usize)
        .last()
        .map(|(date, _)| date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::Weekdays;
    use chrono::{Datelike, NaiveTime};

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn mon_wed_rule() -> RecurrenceRule {
        RecurrenceRule::weekly(
            Weekdays::from_numbers([1, 3]).unwrap(),
            make_time(9, 0),
            make_time(10, 0),
            make_date(2025, 8, 4), // Monday
        )
    }

    fn units(titles: &[&str]) -> Vec<ContentUnit> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| ContentUnit::new(i as u32 + 1, *title))
            .collect()
    }

    fn dates_and_titles(sessions: &[GeneratedSession]) -> Vec<(NaiveDate, &str)> {
        sessions
            .iter()
            .map(|s| (s.date, s.title.as_str()))
            .collect()
    }

    #[test]
    fn test_generate_mon_wed() {
        let sessions = generate(&mon_wed_rule(), &units(&["A", "B"]), 4).unwrap();

        assert_eq!(
            dates_and_titles(&sessions),
            vec![
                (make_date(2025, 8, 4), "A"),
                (make_date(2025, 8, 6), "B"),
                (make_date(2025, 8, 11), "A"),
                (make_date(2025, 8, 13), "B"),
            ]
        );
    }

    #[test]
    fn test_generate_skips_excluded_dates() {
        let rule = mon_wed_rule().with_exclude_date(make_date(2025, 8, 6));
        let sessions = generate(&rule, &units(&["A", "B"]), 4).unwrap();

        assert_eq!(
            dates_and_titles(&sessions),
            vec![
                (make_date(2025, 8, 4), "A"),
                (make_date(2025, 8, 11), "B"),
                (make_date(2025, 8, 13), "A"),
                (make_date(2025, 8, 18), "B"),
            ]
        );
    }

    #[test]
    fn test_generate_empty_weekdays_terminates() {
        let rule = RecurrenceRule::weekly(
            Weekdays::EMPTY,
            make_time(9, 0),
            make_time(10, 0),
            make_date(2025, 8, 4),
        );

        assert!(generate(&rule, &units(&["A"]), 5).unwrap().is_empty());
        assert_eq!(end_date(&rule, 5), None);
    }

    #[test]
    fn test_generate_rule_without_slots_is_empty() {
        let rule = RecurrenceRule::new(make_date(2025, 8, 4));
        assert!(generate(&rule, &units(&["A"]), 3).unwrap().is_empty());
    }

    #[test]
    fn test_generate_content_cycles() {
        let sessions = generate(&mon_wed_rule(), &units(&["A", "B", "C"]), 7).unwrap();
        let sequence: Vec<u32> = sessions.iter().map(|s| s.sequence_number).collect();

        assert_eq!(sequence, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_generate_zero_sessions() {
        assert!(generate(&mon_wed_rule(), &units(&["A"]), 0).unwrap().is_empty());
        // Empty content is fine when nothing is requested.
        assert!(generate(&mon_wed_rule(), &[], 0).unwrap().is_empty());
        assert_eq!(end_date(&mon_wed_rule(), 0), None);
    }

    #[test]
    fn test_generate_empty_content_is_error() {
        assert_eq!(
            generate(&mon_wed_rule(), &[], 3),
            Err(ScheduleError::EmptyContent)
        );
    }

    #[test]
    fn test_generate_duplicate_sequence_is_error() {
        let content = vec![ContentUnit::new(1, "A"), ContentUnit::new(1, "B")];
        assert_eq!(
            generate(&mon_wed_rule(), &content, 3),
            Err(ScheduleError::DuplicateSequence(1))
        );
    }

    #[test]
    fn test_generate_start_date_is_inclusive_only_when_matching() {
        // Tuesday start with a Monday/Wednesday rule begins on the Wednesday.
        let mut rule = mon_wed_rule();
        rule.start_date = make_date(2025, 8, 5);
        let sessions = generate(&rule, &units(&["A"]), 2).unwrap();

        assert_eq!(sessions[0].date, make_date(2025, 8, 6));
        assert_eq!(sessions[1].date, make_date(2025, 8, 11));
    }

    #[test]
    fn test_generate_one_class_per_day() {
        // Both slots cover Wednesday; the first slot wins and only one session is emitted.
        let rule = mon_wed_rule().with_slot(crate::schedule::TimeSlot::new(
            Weekdays::from_numbers([3, 5]).unwrap(),
            make_time(18, 0),
            make_time(19, 0),
        ));
        let sessions = generate(&rule, &units(&["A"]), 4).unwrap();

        assert_eq!(
            sessions.iter().map(|s| s.date).collect::<Vec<_>>(),
            vec![
                make_date(2025, 8, 4),
                make_date(2025, 8, 6),
                make_date(2025, 8, 8),
                make_date(2025, 8, 11),
            ]
        );
        assert_eq!(sessions[1].start_time, make_time(9, 0));
        assert_eq!(sessions[2].start_time, make_time(18, 0));
    }

    #[test]
    fn test_generate_invariants() {
        let rule = RecurrenceRule::weekly(
            Weekdays::from_numbers([0, 2, 4]).unwrap(),
            make_time(17, 0),
            make_time(18, 0),
            make_date(2024, 12, 20),
        )
        .with_exclude_dates([
            make_date(2024, 12, 24),
            make_date(2024, 12, 26),
            make_date(2024, 12, 31),
            make_date(2025, 1, 2),
        ]);
        let content = units(&["A", "B", "C", "D", "E"]);
        let sessions = generate(&rule, &content, 30).unwrap();

        assert_eq!(sessions.len(), 30);
        for (index, session) in sessions.iter().enumerate() {
            assert!(rule.weekdays().contains(session.date.weekday()));
            assert!(!rule.is_excluded(session.date));
            assert_eq!(session.title, content[index % content.len()].title);
        }
        assert!(sessions.windows(2).all(|pair| pair[0].date < pair[1].date));
        assert_eq!(end_date(&rule, 30), sessions.last().map(|s| s.date));
    }

    #[test]
    fn test_generate_is_idempotent() {
        let rule = mon_wed_rule().with_exclude_date(make_date(2025, 8, 11));
        let content = units(&["A", "B"]);

        assert_eq!(
            generate(&rule, &content, 10).unwrap(),
            generate(&rule, &content, 10).unwrap()
        );
    }

    #[test]
    fn test_generate_stops_at_calendar_end() {
        let rule = RecurrenceRule::weekly(
            Weekdays::from_numbers([0, 1, 2, 3, 4, 5, 6]).unwrap(),
            make_time(9, 0),
            make_time(10, 0),
            NaiveDate::MAX.pred_opt().unwrap(),
        );
        let sessions = generate(&rule, &units(&["A"]), 5).unwrap();

        assert_eq!(sessions.len(), 2);
        assert_eq!(end_date(&rule, 5), Some(NaiveDate::MAX));
    }

    #[test]
    fn test_end_date_matches_example() {
        let rule = mon_wed_rule().with_exclude_date(make_date(2025, 8, 6));
        assert_eq!(end_date(&rule, 4), Some(make_date(2025, 8, 18)));
    }

    #[test]
    fn test_validate_content() {
        assert!(validate_content(&units(&["A", "B"])).is_ok());
        assert_eq!(validate_content(&[]), Err(ScheduleError::EmptyContent));
    }
}
