//! Schedule parsing: the thin orchestrator over field expansion.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::expand::expand;
use crate::field::FieldSpec;

/// A fully parsed cron line: five expanded fields plus the command.
///
/// Created once per input string and immutable thereafter. Each field holds
/// the explicit, strictly ascending set of values its token matched; the
/// command is stored verbatim, unparsed and unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Minutes of the hour the schedule matches (0-59).
    pub minute: Vec<u32>,
    /// Hours of the day the schedule matches (0-23).
    pub hour: Vec<u32>,
    /// Days of the month the schedule matches (1-31).
    pub day_of_month: Vec<u32>,
    /// Months of the year the schedule matches (1-12).
    pub month: Vec<u32>,
    /// Days of the week the schedule matches (1-7, MON=1).
    pub day_of_week: Vec<u32>,
    /// The command to run, verbatim (may contain whitespace).
    pub command: String,
}

impl Schedule {
    /// Parses a cron line of the form
    /// `<minute> <hour> <day of month> <month> <day of week> <command>`.
    ///
    /// The first five whitespace-separated tokens are the schedule fields;
    /// everything after the fifth is the command, verbatim. A field error
    /// aborts the whole parse.
    ///
    /// # Example
    /// ```
    /// use cronspell_schedule::Schedule;
    ///
    /// let schedule = Schedule::parse("0 12 1 JAN,JUN MON /bin/x").unwrap();
    /// assert_eq!(schedule.month, vec![1, 6]);
    /// assert_eq!(schedule.day_of_week, vec![1]);
    /// ```
    pub fn parse(line: &str) -> Result<Self, ScheduleError> {
        let mut rest = line.trim();
        let mut tokens = [""; 5];

        for slot in &mut tokens {
            let Some((token, tail)) = rest.split_once(char::is_whitespace) else {
                return Err(malformed(line));
            };
            *slot = token;
            rest = tail.trim_start();
        }

        if rest.is_empty() {
            return Err(malformed(line));
        }

        let [minute, hour, day_of_month, month, day_of_week] = tokens;

        Ok(Self {
            minute: expand_field(minute, &FieldSpec::MINUTE)?,
            hour: expand_field(hour, &FieldSpec::HOUR)?,
            day_of_month: expand_field(day_of_month, &FieldSpec::DAY_OF_MONTH)?,
            month: expand_field(month, &FieldSpec::MONTH)?,
            day_of_week: expand_field(day_of_week, &FieldSpec::DAY_OF_WEEK)?,
            command: rest.to_string(),
        })
    }

    /// The five expanded fields paired with their display labels, in report
    /// order.
    pub fn fields(&self) -> [(&'static str, &[u32]); 5] {
        [
            (FieldSpec::MINUTE.label(), self.minute.as_slice()),
            (FieldSpec::HOUR.label(), self.hour.as_slice()),
            (FieldSpec::DAY_OF_MONTH.label(), self.day_of_month.as_slice()),
            (FieldSpec::MONTH.label(), self.month.as_slice()),
            (FieldSpec::DAY_OF_WEEK.label(), self.day_of_week.as_slice()),
        ]
    }
}

fn expand_field(token: &str, spec: &FieldSpec) -> Result<Vec<u32>, ScheduleError> {
    expand(token, spec).map_err(|source| ScheduleError::InvalidField {
        field: spec.label(),
        source,
    })
}

fn malformed(line: &str) -> ScheduleError {
    ScheduleError::Malformed {
        found: line.split_whitespace().count(),
    }
}
