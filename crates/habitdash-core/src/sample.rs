//! Seeded generation of plausible habit histories.
//!
//! Demos and smoke tests need entry collections with realistic texture:
//! runs of completed days, explicit misses, and silent gaps. The generator
//! flips a weighted coin per day over a fixed window; with a fixed seed
//! the output is fully reproducible.

use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Configuration for sample-history generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Habit identifier stamped on every generated entry
    pub habit_id: String,
    /// Days to cover, ending at the reference day
    pub days: u32,
    /// Probability that a day is completed (0.0-1.0)
    pub completion: f64,
    /// Probability that a non-completed day is logged as an explicit miss (0.0-1.0)
    pub miss_entry: f64,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            habit_id: "sample-habit".to_string(),
            days: 90,
            completion: 0.7,
            miss_entry: 0.5,
            seed: None,
        }
    }
}

/// Generate one habit's history over the window ending at `reference_date`.
///
/// Completed days carry `current_value = 1.0` and explicit misses 0.0.
/// Days that are neither completed nor logged as a miss are simply absent,
/// so generated histories exercise both kinds of streak break.
pub fn generate_entries(config: &SampleConfig, reference_date: NaiveDate) -> Vec<Entry> {
    if config.days == 0 {
        return Vec::new();
    }

    let mut rng = match config.seed {
        Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
        None => Mcg128Xsl64::from_entropy(),
    };

    let mut entries = Vec::new();
    let mut day = reference_date - Duration::days(config.days as i64 - 1);
    while day <= reference_date {
        if rng.gen::<f64>() < config.completion {
            entries.push(Entry::new(config.habit_id.clone(), day, true, 1.0));
        } else if rng.gen::<f64>() < config.miss_entry {
            entries.push(Entry::new(config.habit_id.clone(), day, false, 0.0));
        }
        day = day + Duration::days(1);
    }
    entries
}
