//! Habitdash CLI entry point.

use clap::{Parser, Subcommand};

mod commands;
mod common;
mod config;

#[derive(Parser)]
#[command(name = "habitdash-cli")]
#[command(about = "Habit streak and consistency analytics", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Streak analysis
    Streaks {
        #[command(subcommand)]
        action: commands::streaks::StreaksAction,
    },
    /// Weekly and monthly completion patterns
    Patterns {
        #[command(subcommand)]
        action: commands::patterns::PatternsAction,
    },
    /// Consistency score
    Score {
        #[command(subcommand)]
        action: commands::score::ScoreAction,
    },
    /// Milestone progress
    Milestones {
        #[command(subcommand)]
        action: commands::milestones::MilestonesAction,
    },
    /// Full habit report
    Report {
        #[command(subcommand)]
        action: commands::report::ReportAction,
    },
    /// Sample data generation
    Sample {
        #[command(subcommand)]
        action: commands::sample::SampleAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Streaks { action } => commands::streaks::run(action),
        Commands::Patterns { action } => commands::patterns::run(action),
        Commands::Score { action } => commands::score::run(action),
        Commands::Milestones { action } => commands::milestones::run(action),
        Commands::Report { action } => commands::report::run(action),
        Commands::Sample { action } => commands::sample::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
