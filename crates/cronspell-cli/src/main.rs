//! cronspell CLI - Command-line interface for cron expression expansion
//!
//! This binary provides commands for expanding a cron expression into the
//! explicit values each schedule field matches, and for checking an
//! expression's validity.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use cronspell_cli::commands;

/// cronspell - Spell out what a cron expression matches
#[derive(Parser)]
#[command(name = "cronspell")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a cron expression into the values each field matches
    Expand {
        /// The cron expression: five schedule fields followed by a command
        #[arg(short, long)]
        expr: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check whether a cron expression is valid without printing the report
    Check {
        /// The cron expression: five schedule fields followed by a command
        #[arg(short, long)]
        expr: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Expand { expr, json } => commands::expand::run(&expr, json),
        Commands::Check { expr, json } => commands::check::run(&expr, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}
