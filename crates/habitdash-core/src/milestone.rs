//! Milestone progress over the fixed streak-length thresholds.

use serde::{Deserialize, Serialize};

/// Streak-length achievement thresholds, ascending.
pub const MILESTONES: [u32; 8] = [7, 14, 21, 30, 60, 90, 180, 365];

/// Progress toward the fixed milestone thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneInfo {
    /// Smallest threshold above the current streak; `None` past the last one
    pub next_milestone: Option<u32>,
    /// Days from the current streak to the next threshold, 0 when none remain
    pub days_to_next_milestone: u32,
    /// Every threshold the best streak has reached
    pub achieved_milestones: Vec<u32>,
    /// Progress toward the next threshold as a rounded percentage
    pub completion_percentage: u32,
}

/// Milestone progress for a current/best streak pair.
///
/// Purely arithmetic over the two counts; achieved thresholds follow the
/// best streak ever recorded while next-milestone progress follows the
/// current one, so a broken long streak keeps its badges but restarts its
/// countdown.
pub fn milestone_info(current_streak: u32, best_streak: u32) -> MilestoneInfo {
    let next_milestone = MILESTONES.iter().copied().find(|&t| t > current_streak);
    let achieved_milestones = MILESTONES
        .iter()
        .copied()
        .filter(|&t| t <= best_streak)
        .collect();

    let (days_to_next_milestone, completion_percentage) = match next_milestone {
        Some(next) => (
            next - current_streak,
            (current_streak as f64 / next as f64 * 100.0).round() as u32,
        ),
        None => (0, 100),
    };

    MilestoneInfo {
        next_milestone,
        days_to_next_milestone,
        achieved_milestones,
        completion_percentage,
    }
}
