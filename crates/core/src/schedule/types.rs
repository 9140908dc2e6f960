use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;

/// Weekdays in the numbering used by schedule templates (0=Sunday..6=Saturday).
const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// A set of weekdays, stored as a bitmask indexed from Sunday.
///
/// Serializes as a sorted array of weekday numbers, e.g. `[1, 3]` for
/// Monday and Wednesday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u8>")]
pub struct Weekdays(u8);

impl Weekdays {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Builds a set from weekday numbers (0=Sunday..6=Saturday).
    pub fn from_numbers(numbers: impl IntoIterator<Item = i64>) -> Result<Self, ScheduleError> {
        numbers.into_iter().try_fold(Self::EMPTY, |set, number| {
            let index = usize::try_from(number)
                .ok()
                .filter(|index| *index < SUNDAY_FIRST.len())
                .ok_or(ScheduleError::InvalidWeekday(number))?;
            Ok(set.with(SUNDAY_FIRST[index]))
        })
    }

    /// Returns a copy of this set that also contains `day`.
    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | Self::bit(day))
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the contained weekdays starting from Sunday.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        SUNDAY_FIRST.into_iter().filter(|day| self.contains(*day))
    }

    /// Returns the contained weekday numbers in ascending order.
    pub fn numbers(&self) -> Vec<u8> {
        self.iter()
            .map(|day| day.num_days_from_sunday() as u8)
            .collect()
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_sunday()
    }
}

impl FromIterator<Weekday> for Weekdays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl TryFrom<Vec<i64>> for Weekdays {
    type Error = ScheduleError;

    fn try_from(numbers: Vec<i64>) -> Result<Self, Self::Error> {
        Self::from_numbers(numbers)
    }
}

impl From<Weekdays> for Vec<u8> {
    fn from(weekdays: Weekdays) -> Self {
        weekdays.numbers()
    }
}

/// A weekly time slot: the days it repeats on and its class hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub weekdays: Weekdays,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeSlot {
    pub fn new(weekdays: Weekdays, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            weekdays,
            start_time,
            end_time,
        }
    }
}

/// The weekly pattern driving session generation.
///
/// Slots are kept in priority order: when several slots fall on the same
/// weekday, the first one claims the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    /// First candidate day (inclusive).
    pub start_date: NaiveDate,
    pub slots: Vec<TimeSlot>,
    /// Calendar days that never receive a session (holidays, closures).
    #[serde(default)]
    pub exclude_dates: BTreeSet<NaiveDate>,
}

impl RecurrenceRule {
    /// Creates a rule with no slots starting on the given date.
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            slots: Vec::new(),
            exclude_dates: BTreeSet::new(),
        }
    }

    /// Creates a single-slot rule repeating every week on `weekdays`.
    pub fn weekly(
        weekdays: Weekdays,
        start_time: NaiveTime,
        end_time: NaiveTime,
        start_date: NaiveDate,
    ) -> Self {
        Self::new(start_date).with_slot(TimeSlot::new(weekdays, start_time, end_time))
    }

    /// Appends a lower-priority slot.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Adds a single excluded date.
    pub fn with_exclude_date(mut self, date: NaiveDate) -> Self {
        self.exclude_dates.insert(date);
        self
    }

    /// Adds several excluded dates.
    pub fn with_exclude_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.exclude_dates.extend(dates);
        self
    }

    /// Union of the weekdays of every slot.
    pub fn weekdays(&self) -> Weekdays {
        self.slots
            .iter()
            .fold(Weekdays::EMPTY, |set, slot| set.union(slot.weekdays))
    }

    pub fn is_excluded(&self, date: NaiveDate) -> bool {
        self.exclude_dates.contains(&date)
    }

    /// Returns the slot that claims `date`, ignoring exclusions.
    pub fn slot_for(&self, date: NaiveDate) -> Option<&TimeSlot> {
        let weekday = date.weekday();
        self.slots.iter().find(|slot| slot.weekdays.contains(weekday))
    }
}

/// A link to lesson material (slides, video, worksheet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub label: String,
    pub url: String,
}

impl ResourceLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// One lesson's topic and materials, cycled across generated sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentUnit {
    pub sequence_number: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceLink>,
}

impl ContentUnit {
    pub fn new(sequence_number: u32, title: impl Into<String>) -> Self {
        Self {
            sequence_number,
            title: title.into(),
            resources: Vec::new(),
        }
    }

    /// Attaches a material link to this unit.
    pub fn with_resource(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.resources.push(ResourceLink::new(label, url));
        self
    }
}

/// A concrete, dated class occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSession {
    pub date: NaiveDate,
    pub sequence_number: u32,
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceLink>,
}

impl GeneratedSession {
    /// Pairs a schedulable day and its slot with a content unit.
    pub fn new(date: NaiveDate, slot: &TimeSlot, unit: &ContentUnit) -> Self {
        Self {
            date,
            sequence_number: unit.sequence_number,
            title: unit.title.clone(),
            start_time: slot.start_time,
            end_time: slot.end_time,
            resources: unit.resources.clone(),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}
