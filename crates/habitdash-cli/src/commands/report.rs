use clap::Subcommand;
use habitdash_core::{habit_report, render_report, ReportOptions};

use crate::common::{load_entries_from, reference_date};
use crate::config::Config;

#[derive(Subcommand)]
pub enum ReportAction {
    /// Full report: streaks, patterns, score, and milestones
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
        /// Weekly windows to include (defaults to the configured report.weeks)
        #[arg(long)]
        weeks: Option<u32>,
        /// Calendar months to include (defaults to the configured report.months)
        #[arg(long)]
        months: Option<u32>,
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ReportAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ReportAction::Show {
            habit,
            file,
            date,
            weeks,
            months,
            json,
        } => {
            let entries = load_entries_from(file)?;
            let config = Config::load_or_default();
            let options = ReportOptions {
                weeks: weeks.unwrap_or(config.report.weeks),
                months: months.unwrap_or(config.report.months),
                weights: config.score_weights(),
            };
            options.weights.validate()?;
            let report = habit_report(&entries, &habit, reference_date(date)?, &options);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_report(&report));
            }
        }
    }
    Ok(())
}
