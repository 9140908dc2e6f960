//! Serde helper functions for schedule template payloads.
//!
//! Templates come from hand-edited files and HTML forms, so times may omit
//! seconds and date lists may contain blank entries.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer};

use crate::schedule::parse_local_date;

/// Deserialize a NaiveTime.
/// Accepts formats: HH:MM or HH:MM:SS
pub fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(serde::de::Error::custom)
}

/// Deserialize a NaiveDate.
/// Expects format: YYYY-MM-DD
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_local_date(&s).map_err(serde::de::Error::custom)
}

/// Deserialize a list of dates, skipping empty strings.
/// Expects format: YYYY-MM-DD
pub fn deserialize_date_list<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<String> = Vec::deserialize(deserializer)?;
    raw.iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_local_date(s).map_err(serde::de::Error::custom))
        .collect()
}
