use clap::Subcommand;
use habitdash_core::{streak_summary, StreakCalculator};

use crate::common::{load_entries_from, reference_date};

#[derive(Subcommand)]
pub enum StreaksAction {
    /// Current streak, best streak, and activity state for a habit
    Show {
        /// Habit to analyze
        #[arg(long)]
        habit: String,
        /// Entries file (defaults to the configured data.entries_file)
        #[arg(long)]
        file: Option<String>,
        /// Reference date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Every streak ever recorded, most recent first
    History {
        /// Habit to analyze
        #[arg(long)]
        habit: String,
        /// Entries file (defaults to the configured data.entries_file)
        #[arg(long)]
        file: Option<String>,
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StreaksAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StreaksAction::Show { habit, file, date } => {
            let entries = load_entries_from(file)?;
            let summary = streak_summary(&entries, &habit, reference_date(date)?);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StreaksAction::History { habit, file, json } => {
            let entries = load_entries_from(file)?;
            let history = StreakCalculator::new().streak_history(&entries, &habit);
            if json {
                println!("{}", serde_json::to_string_pretty(&history)?);
            } else if history.is_empty() {
                println!("no completed days for '{habit}'");
            } else {
                println!("{:<12} {:<12} {:>5}", "Start", "End", "Days");
                for segment in &history {
                    println!(
                        "{:<12} {:<12} {:>5}",
                        segment.start.to_string(),
                        segment.end.to_string(),
                        segment.length
                    );
                }
            }
        }
    }
    Ok(())
}
