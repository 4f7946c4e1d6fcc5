use clap::Subcommand;
use habitdash_core::{milestone_info, streak_summary};

use crate::common::{load_entries_from, reference_date};

#[derive(Subcommand)]
pub enum MilestonesAction {
    /// Achieved milestones and progress toward the next one
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
}

pub fn run(action: MilestonesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MilestonesAction::Show { habit, file, date } => {
            let entries = load_entries_from(file)?;
            let summary = streak_summary(&entries, &habit, reference_date(date)?);
            let info = milestone_info(summary.current, summary.best);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }
    Ok(())
}
