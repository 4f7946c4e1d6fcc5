//! Integration tests exercising the full analytics pipeline.
//!
//! One fixed month of history drives every component, so the exact
//! numbers here double as worked examples. All calendar days are fixed;
//! nothing depends on when the suite runs.

use chrono::{Duration, NaiveDate};
use habitdash_core::{
    consistency_score, habit_report, milestone_info, monthly_patterns, streak_summary,
    weekly_patterns, Entry, ReportOptions, StreakCalculator,
};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn done(habit: &str, date: &str) -> Entry {
    Entry::new(habit, d(date), true, 1.0)
}

fn run_of_done(habit: &str, from: &str, days: u32) -> Vec<Entry> {
    let start = d(from);
    (0..days)
        .map(|i| Entry::new(habit, start + Duration::days(i as i64), true, 1.0))
        .collect()
}

/// March 2024 for two habits. "water" is strong: three runs separated by
/// one explicit miss (Mar 11) and one silent gap (Mar 21). "reading" is
/// sparse: three scattered days.
fn march_entries() -> Vec<Entry> {
    let mut entries = run_of_done("water", "2024-03-01", 10);
    entries.push(Entry::new("water", d("2024-03-11"), false, 0.0));
    entries.extend(run_of_done("water", "2024-03-12", 9));
    entries.extend(run_of_done("water", "2024-03-22", 10));

    entries.push(done("reading", "2024-03-03"));
    entries.push(done("reading", "2024-03-10"));
    entries.push(done("reading", "2024-03-17"));
    entries
}

#[test]
fn test_streaks_across_miss_and_gap() {
    let entries = march_entries();
    let summary = streak_summary(&entries, "water", d("2024-03-31"));

    assert_eq!(summary.current, 10);
    assert_eq!(summary.best, 10);
    assert_eq!(summary.total, 29);
    assert!(summary.is_active);

    // Most recent run first; lengths sum to the lifetime total
    let lengths: Vec<u32> = summary.streak_history.iter().map(|s| s.length).collect();
    assert_eq!(lengths, vec![10, 9, 10]);
    assert_eq!(summary.streak_history[0].start, d("2024-03-22"));
    assert_eq!(summary.streak_history[0].end, d("2024-03-31"));
    assert_eq!(summary.streak_history[2].start, d("2024-03-01"));
    assert_eq!(lengths.iter().sum::<u32>(), summary.total);
}

#[test]
fn test_weekly_windows_see_miss_and_gap_alike() {
    let entries = march_entries();
    let weekly = weekly_patterns(&entries, "water", 4, d("2024-03-31"));

    let rates: Vec<u32> = weekly.iter().map(|p| p.completion_rate).collect();
    // Full week, week with the explicit miss, week with the silent gap, full week
    assert_eq!(rates, vec![100, 86, 86, 100]);
    assert_eq!(weekly[0].period_start, d("2024-03-04"));
    assert_eq!(weekly[3].period_end, d("2024-03-31"));
    assert!(weekly.iter().all(|p| p.total_days == 7));
}

#[test]
fn test_monthly_windows_use_calendar_lengths() {
    let entries = march_entries();
    let monthly = monthly_patterns(&entries, "water", 3, d("2024-03-31"));

    assert_eq!(monthly.len(), 3);
    assert_eq!(monthly[0].period_start, d("2024-01-01"));
    assert_eq!(monthly[0].total_days, 31);
    assert_eq!(monthly[0].completed_days, 0);
    assert_eq!(monthly[1].total_days, 29); // leap February
    assert_eq!(monthly[2].completed_days, 29);
    assert_eq!(monthly[2].completion_rate, 94); // 29 of 31 days
}

#[test]
fn test_consistency_scores_separate_the_habits() {
    let entries = march_entries();

    // water: 28 of the trailing 30 days, a 10-day current run, and a
    // perfect trailing week blend to 77
    assert_eq!(consistency_score(&entries, "water", d("2024-03-31")), 77);
    // reading: 3 of 30, no current run, silent trailing week
    assert_eq!(consistency_score(&entries, "reading", d("2024-03-31")), 4);
    // unknown habits degrade to the no-data score
    assert_eq!(consistency_score(&entries, "meditation", d("2024-03-31")), 0);
}

#[test]
fn test_milestones_follow_the_streak_state() {
    let entries = march_entries();
    let summary = streak_summary(&entries, "water", d("2024-03-31"));
    let info = milestone_info(summary.current, summary.best);

    assert_eq!(info.next_milestone, Some(14));
    assert_eq!(info.days_to_next_milestone, 4);
    assert_eq!(info.achieved_milestones, vec![7]);
    assert_eq!(info.completion_percentage, 71);
}

#[test]
fn test_report_composes_the_components_verbatim() {
    let entries = march_entries();
    let reference = d("2024-03-31");
    let options = ReportOptions::default();
    let report = habit_report(&entries, "water", reference, &options);

    assert_eq!(report.streaks, streak_summary(&entries, "water", reference));
    assert_eq!(
        report.weekly,
        weekly_patterns(&entries, "water", options.weeks, reference)
    );
    assert_eq!(
        report.monthly,
        monthly_patterns(&entries, "water", options.months, reference)
    );
    assert_eq!(report.consistency.score, 77);
    assert_eq!(report.milestones.next_milestone, Some(14));
}

#[test]
fn test_midnight_rollover_is_caller_controlled() {
    let entries = march_entries();
    let calc = StreakCalculator::new();

    // The same collection read one day later: the run is over but the
    // grace period still reports the habit alive
    assert_eq!(calc.current_streak(&entries, "water", d("2024-04-01")), 0);
    assert!(calc.is_active(&entries, "water", d("2024-04-01")));
    assert!(!calc.is_active(&entries, "water", d("2024-04-02")));
}

#[test]
fn test_serialized_report_round_trips() {
    let entries = march_entries();
    let report = habit_report(&entries, "water", d("2024-03-31"), &ReportOptions::default());

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"2024-03-31\""));

    let back: habitdash_core::HabitReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.streaks, report.streaks);
    assert_eq!(back.consistency.score, report.consistency.score);
}
