//! Error types for field expansion and schedule parsing.

use thiserror::Error;

/// Errors produced while expanding a single schedule field token.
///
/// Every variant is terminal for the field: an invalid atom fails the whole
/// token, never a partial expansion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFieldError {
    /// The token was empty.
    #[error("field token is empty")]
    EmptyToken,

    /// An atom was neither a known alias nor an integer.
    #[error("'{atom}' is neither a known name nor an integer")]
    Unresolvable {
        /// The atom text that failed to resolve.
        atom: String,
    },

    /// A resolved value fell outside the field's declared range.
    #[error("value {value} is outside the allowed range {min}-{max}")]
    OutOfRange {
        /// The resolved value.
        value: u32,
        /// The field's minimum.
        min: u32,
        /// The field's maximum.
        max: u32,
    },

    /// A range expression had its endpoints reversed.
    #[error("range start {start} is greater than range end {end}")]
    ReversedRange {
        /// The resolved start of the range.
        start: u32,
        /// The resolved end of the range.
        end: u32,
    },

    /// A step amount was missing, unparsable, or zero.
    #[error("step '{step}' is not a positive integer")]
    InvalidStep {
        /// The raw step text.
        step: String,
    },

    /// A nearest-weekday (`<day>W`) expression was used. The syntax is
    /// recognized for day-of-month but not supported.
    #[error("nearest-weekday expression '{token}' is not supported")]
    NearestWeekdayUnsupported {
        /// The full token containing the `W`.
        token: String,
    },
}

/// Errors produced while parsing a full cron line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The line did not split into five schedule fields plus a command.
    #[error("expected five schedule fields followed by a command, found {found} field(s)")]
    Malformed {
        /// How many whitespace-separated tokens the line contained.
        found: usize,
    },

    /// One of the five field tokens failed expansion.
    #[error("invalid {field} field: {source}")]
    InvalidField {
        /// The display label of the offending field.
        field: &'static str,
        /// The underlying expansion error.
        #[source]
        source: InvalidFieldError,
    },
}
