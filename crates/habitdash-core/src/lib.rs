//! # Habitdash Core Library
//!
//! This library provides the habit analytics engine for the Habitdash
//! productivity dashboard: streak detection, completion-rate aggregation,
//! consistency scoring, and milestone progress, all computed on demand
//! from an entry collection supplied by the caller.
//!
//! ## Architecture
//!
//! - **Streak Calculator**: current/best/history runs plus a grace-aware
//!   activity flag, derived from consecutive-day scans
//! - **Period Aggregator**: weekly and calendar-month completion windows
//! - **Consistency Scorer**: weighted blend of completion rate, streak
//!   health, and recent activity into one 0-100 score
//! - **Milestone Tracker**: progress over fixed streak-length thresholds
//!
//! Every operation is a pure function of the entries and an explicitly
//! passed reference date; the engine never reads a clock, performs I/O,
//! or keeps state between calls, so identical inputs always produce
//! identical results.
//!
//! ## Key Components
//!
//! - [`StreakCalculator`]: streak views over one habit's history
//! - [`ConsistencyScorer`]: the 0-100 consistency blend
//! - [`habit_report`]: every analysis composed into one serializable value
//! - [`generate_entries`]: seeded sample histories for demos and tests

pub mod entry;
pub mod streak;
pub mod periods;
pub mod score;
pub mod milestone;
pub mod report;
pub mod sample;
pub mod error;

pub use entry::{completed_dates, habit_entries, parse_date, Entry};
pub use streak::{streak_summary, StreakCalculator, StreakSegment, StreakSummary};
pub use periods::{monthly_patterns, weekly_patterns, CompletionPeriod};
pub use score::{consistency_score, ConsistencyScorer, ScoreBreakdown, ScoreFactor, ScoreWeights};
pub use milestone::{milestone_info, MilestoneInfo, MILESTONES};
pub use report::{habit_report, render_report, HabitReport, ReportOptions};
pub use sample::{generate_entries, SampleConfig};
pub use error::{CoreError, Result};
