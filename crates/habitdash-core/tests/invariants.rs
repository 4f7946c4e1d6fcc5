//! Property tests for the engine's universal invariants.
//!
//! Histories are generated as (day-offset, completed) pairs behind a
//! fixed anchor day, which covers duplicate days, explicit misses, silent
//! gaps, and unsorted input in one strategy.

use chrono::{Duration, NaiveDate};
use habitdash_core::{consistency_score, milestone_info, streak_summary, Entry};
use proptest::prelude::*;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn entries_from(pattern: &[(u8, bool)]) -> Vec<Entry> {
    pattern.iter()
        .map(|&(offset, completed)| {
            Entry::new(
                "habit",
                anchor() - Duration::days(offset as i64),
                completed,
                if completed { 1.0 } else { 0.0 },
            )
        })
        .collect()
}

fn history() -> impl Strategy<Value = Vec<(u8, bool)>> {
    proptest::collection::vec((0u8..60, any::<bool>()), 0..80)
}

proptest! {
    #[test]
    fn best_is_never_below_current(pattern in history()) {
        let summary = streak_summary(&entries_from(&pattern), "habit", anchor());
        prop_assert!(summary.best >= summary.current);
    }

    #[test]
    fn history_lengths_sum_to_the_completed_count(pattern in history()) {
        let summary = streak_summary(&entries_from(&pattern), "habit", anchor());
        let summed: u32 = summary.streak_history.iter().map(|s| s.length).sum();
        prop_assert_eq!(summed, summary.total);
    }

    #[test]
    fn segments_are_ordered_most_recent_first(pattern in history()) {
        let summary = streak_summary(&entries_from(&pattern), "habit", anchor());
        for pair in summary.streak_history.windows(2) {
            prop_assert!(pair[0].start > pair[1].end);
        }
        for segment in &summary.streak_history {
            prop_assert_eq!(
                segment.length as i64,
                (segment.end - segment.start).num_days() + 1
            );
        }
    }

    #[test]
    fn identical_inputs_yield_identical_outputs(pattern in history()) {
        let entries = entries_from(&pattern);
        prop_assert_eq!(
            streak_summary(&entries, "habit", anchor()),
            streak_summary(&entries, "habit", anchor())
        );
        prop_assert_eq!(
            consistency_score(&entries, "habit", anchor()),
            consistency_score(&entries, "habit", anchor())
        );
    }

    #[test]
    fn an_extra_completed_day_never_lowers_the_score(
        pattern in proptest::collection::vec((0u8..30, any::<bool>()), 0..40),
        new_offset in 0u8..30,
    ) {
        let entries = entries_from(&pattern);
        let before = consistency_score(&entries, "habit", anchor());

        let mut more = entries;
        more.push(Entry::new(
            "habit",
            anchor() - Duration::days(new_offset as i64),
            true,
            1.0,
        ));
        let after = consistency_score(&more, "habit", anchor());

        prop_assert!(after >= before);
    }

    #[test]
    fn scores_stay_in_range(pattern in history()) {
        let score = consistency_score(&entries_from(&pattern), "habit", anchor());
        prop_assert!(score <= 100);
    }

    #[test]
    fn milestone_arithmetic_stays_consistent(current in 0u32..500) {
        // best tracks at least the current run in any real summary
        let info = milestone_info(current, current);

        prop_assert!(info.completion_percentage <= 100);
        match info.next_milestone {
            Some(next) => {
                prop_assert!(next > current);
                prop_assert_eq!(info.days_to_next_milestone, next - current);
            }
            None => {
                prop_assert!(current >= 365);
                prop_assert_eq!(info.days_to_next_milestone, 0);
                prop_assert_eq!(info.completion_percentage, 100);
            }
        }
    }
}
