//! Expand command implementation
//!
//! Parses a cron expression and prints the per-field expansion report.

use anyhow::{Context, Result};
use colored::Colorize;
use cronspell_schedule::Schedule;
use std::process::ExitCode;

use super::json_output::{ExpandOutput, JsonError};

/// Run the expand command
///
/// # Arguments
/// * `expr` - The cron expression (five schedule fields followed by a command)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if the expression parses, 1 if it does not
pub fn run(expr: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(expr)
    } else {
        run_human(expr)
    }
}

/// Run expand with human-readable (colored) output
fn run_human(expr: &str) -> Result<ExitCode> {
    match Schedule::parse(expr) {
        Ok(schedule) => {
            for (label, values) in schedule.fields() {
                let rendered: Vec<String> =
                    values.iter().map(|value| value.to_string()).collect();
                println!(
                    "{} {}",
                    format!("{}:", label).cyan().bold(),
                    rendered.join(" ")
                );
            }
            println!("{} {}", "command:".cyan().bold(), schedule.command);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            Ok(ExitCode::from(1))
        }
    }
}

/// Run expand with machine-readable JSON output
fn run_json(expr: &str) -> Result<ExitCode> {
    let output = match Schedule::parse(expr) {
        Ok(schedule) => ExpandOutput::success(schedule),
        Err(e) => ExpandOutput::failure(JsonError::from_schedule_error(&e)),
    };

    let json =
        serde_json::to_string_pretty(&output).context("serializing expand output to JSON")?;
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
