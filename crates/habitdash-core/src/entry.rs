//! Habit entry model and the defensive collection helpers shared by every
//! analyzer.
//!
//! Entries arrive from the caller in arbitrary order, possibly mixing
//! habits and possibly carrying duplicate days. Everything downstream goes
//! through [`habit_entries`] or [`completed_dates`] so that filtering,
//! ordering, and duplicate resolution happen in exactly one place.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// One habit's completion record for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque habit identifier
    pub habit_id: String,
    /// Calendar day, no time-of-day component
    pub date: NaiveDate,
    /// Whether the habit was completed on this day
    pub completed: bool,
    /// Numeric progress toward a target; carried through, never interpreted
    pub current_value: f64,
}

impl Entry {
    /// Create an entry from an already-validated calendar day.
    pub fn new(
        habit_id: impl Into<String>,
        date: NaiveDate,
        completed: bool,
        current_value: f64,
    ) -> Self {
        Self {
            habit_id: habit_id.into(),
            date,
            completed,
            current_value,
        }
    }

    /// Create an entry from a `YYYY-MM-DD` date string.
    ///
    /// This is the validation boundary for callers that hold raw strings:
    /// a string that does not name a real calendar day fails fast with
    /// [`CoreError::MalformedDate`] before any analysis runs.
    pub fn from_ymd_str(
        habit_id: impl Into<String>,
        date: &str,
        completed: bool,
        current_value: f64,
    ) -> Result<Self> {
        Ok(Self::new(habit_id, parse_date(date)?, completed, current_value))
    }
}

/// Parse a `YYYY-MM-DD` string into a calendar day.
///
/// # Arguments
/// * `input` - Date string, e.g. `"2024-01-03"`
///
/// # Returns
/// The parsed day, or [`CoreError::MalformedDate`] for anything that is
/// not a valid calendar day (bad shape, month 13, February 30th, ...).
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| CoreError::MalformedDate {
        input: input.to_string(),
    })
}

/// Filter entries to one habit, ordered by day with duplicates resolved.
///
/// The returned map is the per-habit view every analyzer works from: keys
/// iterate in chronological order and double as the by-date existence
/// lookup. When the caller supplied more than one entry for the same day,
/// the last one in input order wins.
pub fn habit_entries<'a>(entries: &'a [Entry], habit_id: &str) -> BTreeMap<NaiveDate, &'a Entry> {
    let mut by_date = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.habit_id == habit_id) {
        by_date.insert(entry.date, entry);
    }
    by_date
}

/// Distinct completed days for one habit, ascending.
pub fn completed_dates(entries: &[Entry], habit_id: &str) -> Vec<NaiveDate> {
    habit_entries(entries, habit_id)
        .into_iter()
        .filter(|(_, entry)| entry.completed)
        .map(|(date, _)| date)
        .collect()
}
