//! Composed habit report.
//!
//! Bundles every analysis for one habit at one reference day into a
//! single serializable value, plus an aligned text rendering for
//! terminal display. Dataflow is one way: entries feed the streak
//! calculator, whose current/best counts feed the milestone tracker,
//! while the period aggregators and scorer read the entries directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::milestone::{milestone_info, MilestoneInfo};
use crate::periods::{monthly_patterns, weekly_patterns, CompletionPeriod};
use crate::score::{ConsistencyScorer, ScoreBreakdown, ScoreWeights};
use crate::streak::{StreakCalculator, StreakSummary};

/// Options for the composed report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Weekly windows to include
    pub weeks: u32,
    /// Calendar months to include
    pub months: u32,
    /// Weights for the consistency blend
    pub weights: ScoreWeights,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            weeks: 4,
            months: 3,
            weights: ScoreWeights::default(),
        }
    }
}

/// Every analysis for one habit at one reference day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitReport {
    /// Habit the report describes
    pub habit_id: String,
    /// Day the report was computed against
    pub reference_date: NaiveDate,
    /// Current/best/history streak state
    pub streaks: StreakSummary,
    /// Weekly completion windows, oldest first
    pub weekly: Vec<CompletionPeriod>,
    /// Monthly completion windows, oldest first
    pub monthly: Vec<CompletionPeriod>,
    /// Consistency score with its factor breakdown
    pub consistency: ScoreBreakdown,
    /// Milestone progress derived from the streak state
    pub milestones: MilestoneInfo,
}

/// Compute the full report for one habit.
///
/// # Arguments
/// * `entries` - Entry collection, any order, any mix of habits
/// * `habit_id` - Habit to report on
/// * `reference_date` - Day the analyses end at, supplied by the caller
/// * `options` - Window counts and score weights
pub fn habit_report(
    entries: &[Entry],
    habit_id: &str,
    reference_date: NaiveDate,
    options: &ReportOptions,
) -> HabitReport {
    let streaks = StreakCalculator::new().summary(entries, habit_id, reference_date);
    let consistency =
        ConsistencyScorer::with_weights(options.weights).breakdown(entries, habit_id, reference_date);
    let milestones = milestone_info(streaks.current, streaks.best);

    HabitReport {
        habit_id: habit_id.to_string(),
        reference_date,
        weekly: weekly_patterns(entries, habit_id, options.weeks, reference_date),
        monthly: monthly_patterns(entries, habit_id, options.months, reference_date),
        streaks,
        consistency,
        milestones,
    }
}

/// Render a report as an aligned text block for terminal display.
pub fn render_report(report: &HabitReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\nHabit Report: {} ({})\n",
        report.habit_id, report.reference_date
    ));
    output.push_str(&"=".repeat(64));
    output.push_str("\n\n");

    let streaks = &report.streaks;
    let state = if streaks.is_active { "active" } else { "broken" };
    output.push_str(&format!(
        "Streak: {} current / {} best / {} days completed ({})\n",
        streaks.current, streaks.best, streaks.total, state
    ));

    match report.milestones.next_milestone {
        Some(next) => output.push_str(&format!(
            "Next milestone: {} days ({} to go, {}%)\n",
            next,
            report.milestones.days_to_next_milestone,
            report.milestones.completion_percentage
        )),
        None => output.push_str("Next milestone: all reached\n"),
    }
    if !report.milestones.achieved_milestones.is_empty() {
        let badges: Vec<String> = report
            .milestones
            .achieved_milestones
            .iter()
            .map(|t| t.to_string())
            .collect();
        output.push_str(&format!("Achieved: {}\n", badges.join(", ")));
    }
    output.push('\n');

    output.push_str(&format!("Consistency score: {}\n", report.consistency.score));
    for factor in &report.consistency.factors {
        output.push_str(&format!(
            "  {:<20} {:>5.1} x {:.2} = {:>5.1}\n",
            factor.name, factor.value, factor.weight, factor.contribution
        ));
    }
    output.push('\n');

    output.push_str("Weekly completion:\n");
    for period in &report.weekly {
        output.push_str(&render_window(period));
    }
    output.push_str("\nMonthly completion:\n");
    for period in &report.monthly {
        output.push_str(&render_window(period));
    }

    output
}

fn render_window(period: &CompletionPeriod) -> String {
    const WIDTH: usize = 20;
    let filled = period.completion_rate as usize * WIDTH / 100;
    format!(
        "  {} .. {}  {:>2}/{:<2} {}{} {:>3}%\n",
        period.period_start,
        period.period_end,
        period.completed_days,
        period.total_days,
        "█".repeat(filled),
        "░".repeat(WIDTH - filled),
        period.completion_rate
    )
}
