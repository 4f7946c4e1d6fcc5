//! Streak detection over habit completion history.
//!
//! A streak is a maximal run of consecutive calendar days that all carry a
//! completed entry. From one entry collection the calculator derives the
//! run ending at a caller-supplied reference day, the best run ever
//! recorded, the full run history, and a grace-aware activity flag. Days
//! with an explicit incomplete entry and days with no entry at all both
//! break a run.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::{completed_dates, habit_entries, Entry};

/// A maximal run of consecutive completed days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakSegment {
    /// First day of the run
    pub start: NaiveDate,
    /// Last day of the run
    pub end: NaiveDate,
    /// Days in the run, `end - start + 1`
    pub length: u32,
}

/// Aggregated streak state for one habit at one reference day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive completed days ending at the reference day
    pub current: u32,
    /// Longest run ever recorded (possibly the still-open current one)
    pub best: u32,
    /// Lifetime count of completed days
    pub total: u32,
    /// Every run ever recorded, most recent first
    pub streak_history: Vec<StreakSegment>,
    /// Whether the habit counts as alive at the reference day
    pub is_active: bool,
}

/// Computes streak views from raw entry collections.
///
/// The calculator holds no state between calls; every method is a pure
/// function of the entries and the reference day it receives.
#[derive(Debug, Clone)]
pub struct StreakCalculator {
    /// Days of tolerance when deciding whether a streak is still active
    grace_days: u32,
}

impl Default for StreakCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl StreakCalculator {
    /// Create a calculator with the standard one-day grace period.
    pub fn new() -> Self {
        Self { grace_days: 1 }
    }

    /// Create a calculator with a custom grace period.
    pub fn with_grace_days(grace_days: u32) -> Self {
        Self { grace_days }
    }

    /// Count consecutive completed days ending at `reference_date`.
    ///
    /// Walks backward one day at a time from the reference day. A
    /// completed entry extends the count; an incomplete entry or a day
    /// with no entry ends it. An empty collection yields 0.
    ///
    /// # Arguments
    /// * `entries` - Entry collection, any order, any mix of habits
    /// * `habit_id` - Habit to measure
    /// * `reference_date` - Day the count ends at, supplied by the caller
    pub fn current_streak(
        &self,
        entries: &[Entry],
        habit_id: &str,
        reference_date: NaiveDate,
    ) -> u32 {
        current_run(&habit_entries(entries, habit_id), reference_date)
    }

    /// Longest run of consecutive completed days ever recorded.
    pub fn best_streak(&self, entries: &[Entry], habit_id: &str) -> u32 {
        best_run(&completed_dates(entries, habit_id))
    }

    /// Every run of consecutive completed days, most recent first.
    ///
    /// The segment lengths always sum to the habit's lifetime completed
    /// count; the most recent segment may still be open.
    pub fn streak_history(&self, entries: &[Entry], habit_id: &str) -> Vec<StreakSegment> {
        run_segments(&completed_dates(entries, habit_id))
    }

    /// Whether the habit counts as alive at `reference_date`.
    ///
    /// True when any day within the grace window ending at the reference
    /// day carries a completed entry. With the default one-day grace this
    /// reads as "completed today or yesterday", which keeps a streak from
    /// reporting dead before today has been logged.
    pub fn is_active(&self, entries: &[Entry], habit_id: &str, reference_date: NaiveDate) -> bool {
        self.active_at(&habit_entries(entries, habit_id), reference_date)
    }

    /// Compose every streak view into one summary.
    ///
    /// An empty or unmatched collection yields the all-zero summary
    /// rather than an error.
    pub fn summary(
        &self,
        entries: &[Entry],
        habit_id: &str,
        reference_date: NaiveDate,
    ) -> StreakSummary {
        let by_date = habit_entries(entries, habit_id);
        let completed: Vec<NaiveDate> = by_date
            .iter()
            .filter(|(_, entry)| entry.completed)
            .map(|(date, _)| *date)
            .collect();

        StreakSummary {
            current: current_run(&by_date, reference_date),
            best: best_run(&completed),
            total: completed.len() as u32,
            streak_history: run_segments(&completed),
            is_active: self.active_at(&by_date, reference_date),
        }
    }

    fn active_at(&self, by_date: &BTreeMap<NaiveDate, &Entry>, reference_date: NaiveDate) -> bool {
        let mut day = reference_date;
        for _ in 0..=self.grace_days {
            if matches!(by_date.get(&day), Some(entry) if entry.completed) {
                return true;
            }
            match day.pred_opt() {
                Some(prev) => day = prev,
                None => return false,
            }
        }
        false
    }
}

/// Compute the full streak summary with the standard one-day grace period.
pub fn streak_summary(entries: &[Entry], habit_id: &str, reference_date: NaiveDate) -> StreakSummary {
    StreakCalculator::new().summary(entries, habit_id, reference_date)
}

fn current_run(by_date: &BTreeMap<NaiveDate, &Entry>, reference_date: NaiveDate) -> u32 {
    let mut count = 0;
    let mut day = reference_date;
    loop {
        match by_date.get(&day) {
            Some(entry) if entry.completed => count += 1,
            _ => break,
        }
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}

fn best_run(completed: &[NaiveDate]) -> u32 {
    if completed.is_empty() {
        return 0;
    }
    let mut best = 1u32;
    let mut run = 1u32;
    for pair in completed.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            run += 1;
        } else {
            run = 1;
        }
        best = best.max(run);
    }
    best
}

fn run_segments(completed: &[NaiveDate]) -> Vec<StreakSegment> {
    let Some((&first, rest)) = completed.split_first() else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut start = first;
    let mut prev = first;
    for &date in rest {
        if (date - prev).num_days() != 1 {
            segments.push(segment(start, prev));
            start = date;
        }
        prev = date;
    }
    segments.push(segment(start, prev));

    // Most recent first
    segments.reverse();
    segments
}

fn segment(start: NaiveDate, end: NaiveDate) -> StreakSegment {
    StreakSegment {
        start,
        end,
        length: (end - start).num_days() as u32 + 1,
    }
}
