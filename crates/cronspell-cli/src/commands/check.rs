//! Check command implementation
//!
//! Parses a cron expression without printing the report; validity is
//! signalled through the exit code.

use anyhow::{Context, Result};
use colored::Colorize;
use cronspell_schedule::Schedule;
use std::process::ExitCode;

use super::json_output::{CheckOutput, JsonError};

/// Run the check command
///
/// # Arguments
/// * `expr` - The cron expression (five schedule fields followed by a command)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if the expression is valid, 1 if it is not
pub fn run(expr: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(expr)
    } else {
        run_human(expr)
    }
}

/// Run check with human-readable (colored) output
fn run_human(expr: &str) -> Result<ExitCode> {
    match Schedule::parse(expr) {
        Ok(_) => {
            println!("{} Expression is valid", "SUCCESS".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{} {}", "FAILED".red().bold(), e);
            Ok(ExitCode::from(1))
        }
    }
}

/// Run check with machine-readable JSON output
fn run_json(expr: &str) -> Result<ExitCode> {
    let output = match Schedule::parse(expr) {
        Ok(_) => CheckOutput::success(),
        Err(e) => CheckOutput::failure(JsonError::from_schedule_error(&e)),
    };

    let json =
        serde_json::to_string_pretty(&output).context("serializing check output to JSON")?;
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_valid_expression() {
        let code = run("* * * * * /usr/bin/find", false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_check_reversed_range() {
        let code = run("30-10 * * * * /usr/bin/find", false).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_check_json_missing_command() {
        let code = run("0 0 1 1 1", true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
}
