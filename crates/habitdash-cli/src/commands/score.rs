use clap::Subcommand;
use habitdash_core::ConsistencyScorer;

use crate::common::{load_entries_from, reference_date};
use crate::config::Config;

#[derive(Subcommand)]
pub enum ScoreAction {
    /// Consistency score for a habit, 0-100
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
        /// Print the per-factor breakdown as JSON
        #[arg(long)]
        breakdown: bool,
    },
}

pub fn run(action: ScoreAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScoreAction::Show {
            habit,
            file,
            date,
            breakdown,
        } => {
            let entries = load_entries_from(file)?;
            let reference = reference_date(date)?;
            let weights = Config::load_or_default().score_weights();
            weights.validate()?;
            let scorer = ConsistencyScorer::with_weights(weights);
            if breakdown {
                let result = scorer.breakdown(&entries, &habit, reference);
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", scorer.score(&entries, &habit, reference));
            }
        }
    }
    Ok(())
}
