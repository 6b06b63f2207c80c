//! Common data types used throughout the workspace

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_NO_DIFF};
use crate::impl_calendar_name_conversions;

/// Calendar unit of a difference component
///
/// Variants are declared largest to smallest; the derived ordering is the
/// descending-unit order a rendered difference must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl CalendarUnit {
    /// All units, largest first
    pub const ALL: [Self; 6] =
        [Self::Year, Self::Month, Self::Day, Self::Hour, Self::Minute, Self::Second];
}

impl_calendar_name_conversions!(CalendarUnit {
    Year => "year",
    Month => "month",
    Day => "day",
    Hour => "hour",
    Minute => "minute",
    Second => "second",
});

/// One (magnitude, unit) pair in a calendar difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffComponent {
    pub magnitude: u32,
    pub unit: CalendarUnit,
}

/// Structured calendar difference: non-zero components, largest unit first
///
/// The component list is kept private so every value upholds the same
/// invariants: magnitudes are non-zero, units appear at most once and in
/// descending order, and two identical timestamps produce the explicit
/// empty value rather than an ambiguous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDiff {
    components: Vec<DiffComponent>,
}

impl CalendarDiff {
    /// The empty difference (two identical timestamps)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a difference from per-unit magnitudes in descending unit order
    ///
    /// Zero magnitudes are dropped; the relative order of the rest is
    /// preserved. Callers supply the pairs largest unit first.
    pub fn from_ordered(pairs: impl IntoIterator<Item = (CalendarUnit, u32)>) -> Self {
        let components = pairs
            .into_iter()
            .filter(|(_, magnitude)| *magnitude > 0)
            .map(|(unit, magnitude)| DiffComponent { magnitude, unit })
            .collect();
        Self { components }
    }

    /// True when every component was zero
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components in descending unit order
    pub fn components(&self) -> &[DiffComponent] {
        &self.components
    }

    /// Magnitude of `unit`, if it appears in this difference
    pub fn magnitude_of(&self, unit: CalendarUnit) -> Option<u32> {
        self.components.iter().find(|c| c.unit == unit).map(|c| c.magnitude)
    }
}

impl<'a> IntoIterator for &'a CalendarDiff {
    type Item = &'a DiffComponent;
    type IntoIter = std::slice::Iter<'a, DiffComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Civil calendar fields of a timestamp
///
/// Months are 1-based (January is 1) everywhere in the workspace. The
/// derived lexicographic ordering, year down to second, is chronological
/// order for fields read from one calendar, so it doubles as the
/// comparison primitive of the difference engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarFields {
    /// Assemble fields in calendar order
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self { year, month, day, hour, minute, second }
    }
}

/// Rendering table for calendar differences
///
/// An explicit configuration value passed to the render step, never
/// process-global state. Defaults to English labels joined with single
/// spaces, and the empty string when there is no difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLabels {
    pub year: String,
    pub years: String,
    pub month: String,
    pub months: String,
    pub day: String,
    pub days: String,
    pub hour: String,
    pub hours: String,
    pub minute: String,
    pub minutes: String,
    pub second: String,
    pub seconds: String,
    /// Separator placed between rendered components
    pub delimiter: String,
    /// Rendered when the difference is empty
    pub no_diff: String,
}

impl Default for DiffLabels {
    fn default() -> Self {
        Self {
            year: "year".to_string(),
            years: "years".to_string(),
            month: "month".to_string(),
            months: "months".to_string(),
            day: "day".to_string(),
            days: "days".to_string(),
            hour: "hour".to_string(),
            hours: "hours".to_string(),
            minute: "minute".to_string(),
            minutes: "minutes".to_string(),
            second: "second".to_string(),
            seconds: "seconds".to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            no_diff: DEFAULT_NO_DIFF.to_string(),
        }
    }
}

impl DiffLabels {
    /// Label for `unit`: singular when `magnitude` is exactly 1, plural
    /// otherwise
    pub fn label_for(&self, unit: CalendarUnit, magnitude: u32) -> &str {
        let singular = magnitude == 1;
        match unit {
            CalendarUnit::Year => {
                if singular {
                    &self.year
                } else {
                    &self.years
                }
            }
            CalendarUnit::Month => {
                if singular {
                    &self.month
                } else {
                    &self.months
                }
            }
            CalendarUnit::Day => {
                if singular {
                    &self.day
                } else {
                    &self.days
                }
            }
            CalendarUnit::Hour => {
                if singular {
                    &self.hour
                } else {
                    &self.hours
                }
            }
            CalendarUnit::Minute => {
                if singular {
                    &self.minute
                } else {
                    &self.minutes
                }
            }
            CalendarUnit::Second => {
                if singular {
                    &self.second
                } else {
                    &self.seconds
                }
            }
        }
    }
}
