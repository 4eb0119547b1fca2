//! Field specifications for the five cron schedule fields.
//!
//! A [`FieldSpec`] is an immutable description of one field: its display
//! label, its inclusive value range, its alias table, and which special
//! characters (`?`, `W`) its alphabet admits. The five instances are
//! associated constants, constructed once and shared freely.

use crate::error::InvalidFieldError;

/// Month name aliases, canonical values 1-12.
const MONTH_ALIASES: &[(&str, u32)] = &[
    ("JAN", 1),
    ("FEB", 2),
    ("MAR", 3),
    ("APR", 4),
    ("MAY", 5),
    ("JUN", 6),
    ("JUL", 7),
    ("AUG", 8),
    ("SEP", 9),
    ("OCT", 10),
    ("NOV", 11),
    ("DEC", 12),
];

/// Weekday name aliases, canonical values 1-7 anchored at MON=1.
const DAY_OF_WEEK_ALIASES: &[(&str, u32)] = &[
    ("MON", 1),
    ("TUE", 2),
    ("WED", 3),
    ("THU", 4),
    ("FRI", 5),
    ("SAT", 6),
    ("SUN", 7),
];

/// Immutable description of one schedule field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    label: &'static str,
    min: u32,
    max: u32,
    aliases: &'static [(&'static str, u32)],
    accepts_unspecified: bool,
    accepts_nearest_weekday: bool,
}

impl FieldSpec {
    /// Minute of the hour, 0-59.
    pub const MINUTE: FieldSpec = FieldSpec {
        label: "minute",
        min: 0,
        max: 59,
        aliases: &[],
        accepts_unspecified: false,
        accepts_nearest_weekday: false,
    };

    /// Hour of the day, 0-23.
    pub const HOUR: FieldSpec = FieldSpec {
        label: "hour",
        min: 0,
        max: 23,
        aliases: &[],
        accepts_unspecified: false,
        accepts_nearest_weekday: false,
    };

    /// Day of the month, 1-31. Admits `?` and the (unsupported) `W` marker.
    pub const DAY_OF_MONTH: FieldSpec = FieldSpec {
        label: "day of month",
        min: 1,
        max: 31,
        aliases: &[],
        accepts_unspecified: true,
        accepts_nearest_weekday: true,
    };

    /// Month of the year, 1-12, with JAN-DEC aliases.
    pub const MONTH: FieldSpec = FieldSpec {
        label: "month",
        min: 1,
        max: 12,
        aliases: MONTH_ALIASES,
        accepts_unspecified: false,
        accepts_nearest_weekday: false,
    };

    /// Day of the week, 1-7 (MON=1), with SUN-SAT aliases. Admits `?`.
    pub const DAY_OF_WEEK: FieldSpec = FieldSpec {
        label: "day of week",
        min: 1,
        max: 7,
        aliases: DAY_OF_WEEK_ALIASES,
        accepts_unspecified: true,
        accepts_nearest_weekday: false,
    };

    /// The five fields in the order they appear in a cron line.
    pub const ALL: [FieldSpec; 5] = [
        FieldSpec::MINUTE,
        FieldSpec::HOUR,
        FieldSpec::DAY_OF_MONTH,
        FieldSpec::MONTH,
        FieldSpec::DAY_OF_WEEK,
    ];

    /// Returns the field's display label (e.g., "day of month").
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the field's minimum value (inclusive).
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Returns the field's maximum value (inclusive).
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether the field's alphabet admits the `?` "no specific value" token.
    pub fn accepts_unspecified(&self) -> bool {
        self.accepts_unspecified
    }

    /// Whether the field's alphabet admits the `W` nearest-weekday marker.
    pub fn accepts_nearest_weekday(&self) -> bool {
        self.accepts_nearest_weekday
    }

    /// Every value the field can take, ascending.
    pub fn all_values(&self) -> Vec<u32> {
        (self.min..=self.max).collect()
    }

    /// Resolves a single atom to its integer value.
    ///
    /// Alias lookup runs first (case-insensitive), integer parse is the
    /// fallback. The resolved value is checked against the field's range.
    pub fn resolve(&self, atom: &str) -> Result<u32, InvalidFieldError> {
        let value = match self.lookup_alias(atom) {
            Some(value) => value,
            None => atom
                .parse::<u32>()
                .map_err(|_| InvalidFieldError::Unresolvable {
                    atom: atom.to_string(),
                })?,
        };

        if value < self.min || value > self.max {
            return Err(InvalidFieldError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }

        Ok(value)
    }

    fn lookup_alias(&self, atom: &str) -> Option<u32> {
        self.aliases
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(atom))
            .map(|(_, value)| *value)
    }
}
