//! Timestamp port interfaces
//!
//! External calendar sources supply civil fields and a single calendar
//! query; everything else the difference engine needs is derived from
//! those. The engine never constructs or parses timestamps itself.

use calspan_domain::{CalendarFields, Result};

/// Calendar-aware timestamp as seen by the difference engine
///
/// Months are 1-based (January is 1) across the whole trait. The pipeline
/// is synchronous and side-effect-free, so implementations should be too.
pub trait CalendarTimestamp {
    /// Calendar year
    fn year(&self) -> i32;

    /// Calendar month, 1-based
    fn month(&self) -> u32;

    /// Day of month, 1-based
    fn day(&self) -> u32;

    /// Hour of day (0-23)
    fn hour(&self) -> u32;

    /// Minute of hour (0-59)
    fn minute(&self) -> u32;

    /// Second of minute (0-59)
    fn second(&self) -> u32;

    /// Number of days in month `month` of `year`, leap-year aware
    ///
    /// The `(year, month)` pair is arbitrary, not tied to this instant.
    /// Fails with `InvalidTimestamp` when the pair does not name a
    /// representable calendar month.
    fn days_in_month(&self, year: i32, month: u32) -> Result<u32>;

    /// All six civil fields of this instant
    fn fields(&self) -> CalendarFields {
        CalendarFields::new(
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
        )
    }
}
