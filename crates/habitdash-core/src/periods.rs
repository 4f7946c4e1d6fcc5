//! Weekly and monthly completion-rate windows.
//!
//! Both aggregators are pure range filters over the entry collection. They
//! score fixed windows, not the habit's lifetime: a 7-day window always
//! divides by 7 and a calendar month by its real length, so a habit
//! created mid-window is still measured against the full window.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entry::{completed_dates, Entry};

/// Completion counts for one aggregation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionPeriod {
    /// First day of the window
    pub period_start: NaiveDate,
    /// Last day of the window
    pub period_end: NaiveDate,
    /// Distinct completed days inside the window
    pub completed_days: u32,
    /// Days the window spans (7 for weeks, 28-31 for months)
    pub total_days: u32,
    /// `round(completed_days / total_days * 100)`
    pub completion_rate: u32,
}

/// Completion rates for the last `weeks` 7-day windows, oldest first.
///
/// Window `offset` covers the 7 days ending `offset * 7` days before the
/// reference day, so the newest window is `[reference_date - 6,
/// reference_date]` and windows tile backward without overlap.
///
/// # Arguments
/// * `entries` - Entry collection, any order, any mix of habits
/// * `habit_id` - Habit to aggregate
/// * `weeks` - Number of windows to produce
/// * `reference_date` - Last day of the newest window
pub fn weekly_patterns(
    entries: &[Entry],
    habit_id: &str,
    weeks: u32,
    reference_date: NaiveDate,
) -> Vec<CompletionPeriod> {
    let completed = completed_dates(entries, habit_id);
    let mut periods = Vec::with_capacity(weeks as usize);
    for offset in (0..weeks).rev() {
        let end = reference_date - Duration::days(offset as i64 * 7);
        let start = end - Duration::days(6);
        periods.push(window(&completed, start, end, 7));
    }
    periods
}

/// Completion rates for the last `months` calendar months, oldest first.
///
/// Months are calendar months by month number, not rolling 30-day
/// windows; the month containing the reference day is included and every
/// denominator is that month's actual day count.
pub fn monthly_patterns(
    entries: &[Entry],
    habit_id: &str,
    months: u32,
    reference_date: NaiveDate,
) -> Vec<CompletionPeriod> {
    let completed = completed_dates(entries, habit_id);
    let mut periods = Vec::with_capacity(months as usize);
    for offset in (0..months).rev() {
        let (year, month) = months_back(reference_date.year(), reference_date.month(), offset);
        if let Some((start, end)) = month_window(year, month) {
            let total = (end - start).num_days() as u32 + 1;
            periods.push(window(&completed, start, end, total));
        }
    }
    periods
}

fn window(completed: &[NaiveDate], start: NaiveDate, end: NaiveDate, total_days: u32) -> CompletionPeriod {
    let completed_days = completed
        .iter()
        .filter(|&&date| date >= start && date <= end)
        .count() as u32;
    CompletionPeriod {
        period_start: start,
        period_end: end,
        completed_days,
        total_days,
        completion_rate: (completed_days as f64 / total_days as f64 * 100.0).round() as u32,
    }
}

/// Step `offset` whole calendar months backward from a 1-based month.
fn months_back(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let index = year as i64 * 12 + month as i64 - 1 - offset as i64;
    (index.div_euclid(12) as i32, (index.rem_euclid(12) + 1) as u32)
}

fn month_window(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some((start, end))
}
