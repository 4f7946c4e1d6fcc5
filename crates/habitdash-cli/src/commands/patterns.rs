use clap::Subcommand;
use habitdash_core::{monthly_patterns, weekly_patterns, CompletionPeriod};

use crate::common::{load_entries_from, reference_date};
use crate::config::Config;

#[derive(Subcommand)]
pub enum PatternsAction {
    /// Completion rates over trailing 7-day windows
    Weekly {
        /// Habit to analyze
        #[arg(long)]
        habit: String,
        /// Number of windows (defaults to the configured report.weeks)
        #[arg(long)]
        weeks: Option<u32>,
        /// Entries file (defaults to the configured data.entries_file)
        #[arg(long)]
        file: Option<String>,
        /// Reference date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Completion rates over calendar months
    Monthly {
        /// Habit to analyze
        #[arg(long)]
        habit: String,
        /// Number of months (defaults to the configured report.months)
        #[arg(long)]
        months: Option<u32>,
        /// Entries file (defaults to the configured data.entries_file)
        #[arg(long)]
        file: Option<String>,
        /// Reference date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PatternsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PatternsAction::Weekly {
            habit,
            weeks,
            file,
            date,
            json,
        } => {
            let entries = load_entries_from(file)?;
            let weeks = weeks.unwrap_or_else(|| Config::load_or_default().report.weeks);
            let periods = weekly_patterns(&entries, &habit, weeks, reference_date(date)?);
            print_periods(&periods, json)?;
        }
        PatternsAction::Monthly {
            habit,
            months,
            file,
            date,
            json,
        } => {
            let entries = load_entries_from(file)?;
            let months = months.unwrap_or_else(|| Config::load_or_default().report.months);
            let periods = monthly_patterns(&entries, &habit, months, reference_date(date)?);
            print_periods(&periods, json)?;
        }
    }
    Ok(())
}

fn print_periods(periods: &[CompletionPeriod], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(periods)?);
        return Ok(());
    }
    println!(
        "{:<12} {:<12} {:>10} {:>6}",
        "Start", "End", "Completed", "Rate"
    );
    for p in periods {
        println!(
            "{:<12} {:<12} {:>6}/{:<3} {:>5}%",
            p.period_start.to_string(),
            p.period_end.to_string(),
            p.completed_days,
            p.total_days,
            p.completion_rate
        );
    }
    Ok(())
}
