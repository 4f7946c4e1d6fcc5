use clap::Subcommand;
use habitdash_core::{generate_entries, SampleConfig};

use crate::common::reference_date;

#[derive(Subcommand)]
pub enum SampleAction {
    /// Generate a random entry history for trying out the analytics
    Generate {
        /// Habit identifier for the generated entries
        #[arg(long, default_value = "sample-habit")]
        habit: String,
        /// Days of history to generate, ending at the reference date
        #[arg(long, default_value_t = 90)]
        days: u32,
        /// Probability that a day is completed
        #[arg(long, default_value_t = 0.7)]
        rate: f64,
        /// Probability that a skipped day is logged as an explicit miss
        #[arg(long, default_value_t = 0.5)]
        miss_rate: f64,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Reference date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
}

pub fn run(action: SampleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SampleAction::Generate {
            habit,
            days,
            rate,
            miss_rate,
            seed,
            date,
            out,
        } => {
            let config = SampleConfig {
                habit_id: habit,
                days,
                completion: rate,
                miss_entry: miss_rate,
                seed,
            };
            let entries = generate_entries(&config, reference_date(date)?);
            let json = serde_json::to_string_pretty(&entries)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("wrote {} entries to {path}", entries.len());
                }
                None => println!("{json}"),
            }
        }
    }
    Ok(())
}
