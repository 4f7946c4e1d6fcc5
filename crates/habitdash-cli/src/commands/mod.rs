pub mod config;
pub mod milestones;
pub mod patterns;
pub mod report;
pub mod sample;
pub mod score;
pub mod streaks;
