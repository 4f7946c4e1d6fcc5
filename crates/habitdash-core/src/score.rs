//! Consistency scoring for habit completion history.
//!
//! Blends three explainable factors over the trailing 30 days into one
//! 0-100 integer: the 30-day completion rate, the health of the current
//! streak, and recent activity across the trailing 7 days. Weights are
//! configurable but default to the standard 0.4 / 0.3 / 0.3 blend.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entry::{habit_entries, Entry};
use crate::error::{CoreError, Result};
use crate::streak::StreakCalculator;

/// One weighted factor of the consistency blend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactor {
    /// Factor name
    pub name: String,
    /// Weight for this factor (0.0 to 1.0)
    pub weight: f64,
    /// Raw factor value (0 to 100)
    pub value: f64,
    /// Weighted contribution to the final score
    pub contribution: f64,
}

impl ScoreFactor {
    fn new(name: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
            contribution: weight * value,
        }
    }
}

/// Complete scoring breakdown for explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Individual weighted factors
    pub factors: Vec<ScoreFactor>,
    /// Final rounded score (0 to 100)
    pub score: u32,
}

impl ScoreBreakdown {
    /// Get the top contributing factor.
    pub fn top_factor(&self) -> Option<&ScoreFactor> {
        self.factors
            .iter()
            .max_by(|a, b| a.contribution.partial_cmp(&b.contribution).unwrap())
    }
}

/// Weights for the consistency blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of the 30-day completion rate
    pub completion_rate: f64,
    /// Weight of current-streak health
    pub streak_consistency: f64,
    /// Weight of 7-day recent activity
    pub recent_activity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            completion_rate: 0.4,
            streak_consistency: 0.3,
            recent_activity: 0.3,
        }
    }
}

impl ScoreWeights {
    /// Validate that the weights form a usable blend.
    ///
    /// Each weight must lie in `[0.0, 1.0]` and together they must sum to
    /// 1.0, so that a habit scoring 100 on every factor scores 100 overall.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("completion_rate", self.completion_rate),
            ("streak_consistency", self.streak_consistency),
            ("recent_activity", self.recent_activity),
        ];

        for (name, weight) in weights {
            if !(0.0..=1.0).contains(&weight) {
                return Err(CoreError::InvalidWeights {
                    reason: format!("'{name}' must be in [0.0, 1.0], got {weight}"),
                });
            }
        }

        let sum: f64 = weights.iter().map(|(_, weight)| weight).sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(CoreError::InvalidWeights {
                reason: format!("weights must sum to 1.0, got {sum}"),
            });
        }
        Ok(())
    }
}

/// Computes consistency scores over the trailing 30 days.
#[derive(Debug, Clone)]
pub struct ConsistencyScorer {
    weights: ScoreWeights,
}

impl Default for ConsistencyScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsistencyScorer {
    /// Create a scorer with the standard weights.
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    /// Create a scorer with custom weights.
    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// The 0-100 consistency score at `reference_date`.
    pub fn score(&self, entries: &[Entry], habit_id: &str, reference_date: NaiveDate) -> u32 {
        self.breakdown(entries, habit_id, reference_date).score
    }

    /// The score together with its per-factor breakdown.
    ///
    /// A habit with no entries at all in the trailing 30 days scores 0
    /// with an empty factor list; no data means no confidence, not a
    /// blend of zeros.
    pub fn breakdown(
        &self,
        entries: &[Entry],
        habit_id: &str,
        reference_date: NaiveDate,
    ) -> ScoreBreakdown {
        let by_date = habit_entries(entries, habit_id);
        let month_start = reference_date - Duration::days(29);
        let week_start = reference_date - Duration::days(6);

        if by_date.range(month_start..=reference_date).next().is_none() {
            return ScoreBreakdown {
                factors: Vec::new(),
                score: 0,
            };
        }

        let completed_in = |start: NaiveDate| {
            by_date
                .range(start..=reference_date)
                .filter(|(_, entry)| entry.completed)
                .count() as f64
        };
        let current =
            StreakCalculator::new().current_streak(entries, habit_id, reference_date) as f64;

        let completion_rate = completed_in(month_start) / 30.0 * 100.0;
        let streak_consistency = (current / 30.0 * 100.0).min(100.0);
        let recent_activity = completed_in(week_start) / 7.0 * 100.0;

        let factors = vec![
            ScoreFactor::new("completion_rate", self.weights.completion_rate, completion_rate),
            ScoreFactor::new(
                "streak_consistency",
                self.weights.streak_consistency,
                streak_consistency,
            ),
            ScoreFactor::new("recent_activity", self.weights.recent_activity, recent_activity),
        ];
        let total: f64 = factors.iter().map(|factor| factor.contribution).sum();

        ScoreBreakdown {
            factors,
            score: total.round() as u32,
        }
    }
}

/// Compute the 0-100 consistency score with the standard weights.
pub fn consistency_score(entries: &[Entry], habit_id: &str, reference_date: NaiveDate) -> u32 {
    ConsistencyScorer::new().score(entries, habit_id, reference_date)
}
