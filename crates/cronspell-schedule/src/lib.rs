//! Cron Schedule Expansion Library
//!
//! This crate parses a cron expression string into its five schedule fields
//! (minute, hour, day-of-month, month, day-of-week) plus a trailing command,
//! expanding each field's compact syntax (`*`, `-`, `,`, `/`, and named
//! month/weekday aliases) into the explicit ordered set of matching values.
//!
//! # Overview
//!
//! - A [`FieldSpec`] describes one schedule field: its value range, alias
//!   table, and which special characters it admits. The five instances are
//!   fixed associated constants.
//! - [`expand()`] is the field expander: it turns one token into the strictly
//!   ascending set of integers the token denotes, or an [`InvalidFieldError`].
//! - [`Schedule::parse`] orchestrates the five expansions over a whole cron
//!   line and stores the trailing command verbatim.
//! - [`render_report`] (and `Display` on [`Schedule`]) produce the fixed-order
//!   `<label>: <values>` report.
//!
//! Parsing is pure and reentrant: no I/O, no shared mutable state, fresh
//! results per call.
//!
//! # Example
//!
//! ```
//! use cronspell_schedule::Schedule;
//!
//! let schedule = Schedule::parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
//!
//! assert_eq!(schedule.minute, vec![0, 15, 30, 45]);
//! assert_eq!(schedule.day_of_month, vec![1, 15]);
//! assert_eq!(schedule.command, "/usr/bin/find");
//!
//! println!("{}", schedule);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types for expansion and parsing
//! - [`field`]: Field specifications (ranges, aliases, special characters)
//! - [`expand`](mod@expand): The field expander
//! - [`schedule`]: The parsed schedule type and line orchestrator
//! - [`render`]: Report rendering

pub mod error;
pub mod expand;
pub mod field;
pub mod render;
pub mod schedule;

// Re-export commonly used types at the crate root
pub use error::{InvalidFieldError, ScheduleError};
pub use expand::expand;
pub use field::FieldSpec;
pub use render::render_report;
pub use schedule::Schedule;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// The canonical end-to-end scenario: step, list, wildcard, range.
    #[test]
    fn test_expand_step_list_wildcard_range() {
        let schedule = Schedule::parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();

        assert_eq!(schedule.minute, vec![0, 15, 30, 45]);
        assert_eq!(schedule.hour, vec![0]);
        assert_eq!(schedule.day_of_month, vec![1, 15]);
        assert_eq!(schedule.month, (1..=12).collect::<Vec<_>>());
        assert_eq!(schedule.day_of_week, vec![1, 2, 3, 4, 5]);
        assert_eq!(schedule.command, "/usr/bin/find");
    }

    /// Month and weekday aliases resolve to canonical integers.
    #[test]
    fn test_expand_aliases() {
        let schedule = Schedule::parse("0 12 1 JAN,JUN MON /bin/x").unwrap();

        assert_eq!(schedule.minute, vec![0]);
        assert_eq!(schedule.hour, vec![12]);
        assert_eq!(schedule.day_of_month, vec![1]);
        assert_eq!(schedule.month, vec![1, 6]);
        assert_eq!(schedule.day_of_week, vec![1]);
    }

    /// Ranges inside comma lists, in every field at once.
    #[test]
    fn test_expand_lists_with_ranges() {
        let schedule = Schedule::parse("1-5,30 1,3-5 1-2,13 1,2-5 1-2,4-5 /usr/bin/find").unwrap();

        assert_eq!(schedule.minute, vec![1, 2, 3, 4, 5, 30]);
        assert_eq!(schedule.hour, vec![1, 3, 4, 5]);
        assert_eq!(schedule.day_of_month, vec![1, 2, 13]);
        assert_eq!(schedule.month, vec![1, 2, 3, 4, 5]);
        assert_eq!(schedule.day_of_week, vec![1, 2, 4, 5]);
    }

    /// Open and bounded stepped ranges.
    #[test]
    fn test_expand_stepped_ranges() {
        let schedule = Schedule::parse("0-30/5 4/4 1-7/2 1-3/1 1-5/2 /usr/bin/find").unwrap();

        assert_eq!(schedule.minute, vec![0, 5, 10, 15, 20, 25, 30]);
        assert_eq!(schedule.hour, vec![4, 8, 12, 16, 20]);
        assert_eq!(schedule.day_of_month, vec![1, 3, 5, 7]);
        assert_eq!(schedule.month, vec![1, 2, 3]);
        assert_eq!(schedule.day_of_week, vec![1, 3, 5]);
    }

    /// `?` in the fields that admit it behaves like `*`.
    #[test]
    fn test_expand_unspecified_markers() {
        let schedule = Schedule::parse("0 0 ? 1 ? /bin/x").unwrap();

        assert_eq!(schedule.day_of_month, (1..=31).collect::<Vec<_>>());
        assert_eq!(schedule.day_of_week, (1..=7).collect::<Vec<_>>());
    }

    /// Every invariant at once: unique, sorted, in range.
    #[test]
    fn test_expansion_invariants_hold_per_field() {
        let schedule = Schedule::parse("7,3,7 */9 28-31 SEP-DEC 5/2 /bin/x").unwrap();

        let bounds: [(u32, u32); 5] = [(0, 59), (0, 23), (1, 31), (1, 12), (1, 7)];
        for ((_, values), (min, max)) in schedule.fields().into_iter().zip(bounds) {
            for pair in values.windows(2) {
                assert!(pair[0] < pair[1]);
            }
            for value in values {
                assert!((min..=max).contains(value));
            }
        }
    }

    /// The rendered report is exactly six labeled lines in fixed order.
    #[test]
    fn test_report_shape() {
        let schedule = Schedule::parse("5 1 6 11 3 /usr/bin/find").unwrap();
        let report = schedule.to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            vec![
                "minute: 5",
                "hour: 1",
                "day of month: 6",
                "month: 11",
                "day of week: 3",
                "command: /usr/bin/find",
            ]
        );
    }

    #[test]
    fn test_errors_surface_immediately() {
        assert!(matches!(
            Schedule::parse("0 0 1 1 1"),
            Err(ScheduleError::Malformed { .. })
        ));
        assert!(matches!(
            Schedule::parse("30-10 * * * * /bin/x"),
            Err(ScheduleError::InvalidField { field: "minute", .. })
        ));
        assert!(matches!(
            Schedule::parse("* * 6W * * /bin/x"),
            Err(ScheduleError::InvalidField {
                field: "day of month",
                source: InvalidFieldError::NearestWeekdayUnsupported { .. },
            })
        ));
    }
}
