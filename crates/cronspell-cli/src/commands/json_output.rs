//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on the
//! `expand` and `check` commands, so other tools can parse CLI results
//! without scraping colored terminal text.

use cronspell_schedule::{Schedule, ScheduleError};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Input did not split into five schedule fields plus a command
    pub const MALFORMED_SCHEDULE: &str = "CRON_001";
    /// A schedule field token failed expansion
    pub const INVALID_FIELD: &str = "CRON_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CRON_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// The schedule field the error refers to, when field-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl JsonError {
    /// Maps a schedule parse error onto its stable code and message.
    pub fn from_schedule_error(error: &ScheduleError) -> Self {
        match error {
            ScheduleError::Malformed { .. } => Self {
                code: error_codes::MALFORMED_SCHEDULE.to_string(),
                message: error.to_string(),
                field: None,
            },
            ScheduleError::InvalidField { field, .. } => Self {
                code: error_codes::INVALID_FIELD.to_string(),
                message: error.to_string(),
                field: Some((*field).to_string()),
            },
        }
    }
}

/// Output document for the `expand` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandOutput {
    /// Whether the expression parsed
    pub success: bool,
    /// The parsed schedule (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    /// The parse error (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl ExpandOutput {
    /// Creates a successful expand output.
    pub fn success(schedule: Schedule) -> Self {
        Self {
            success: true,
            schedule: Some(schedule),
            error: None,
        }
    }

    /// Creates a failed expand output.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            schedule: None,
            error: Some(error),
        }
    }
}

/// Output document for the `check` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutput {
    /// Whether the expression parsed
    pub success: bool,
    /// The parse error (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl CheckOutput {
    /// Creates a successful check output.
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// Creates a failed check output.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            error: Some(error),
        }
    }
}
