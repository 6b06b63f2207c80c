//! Chrono-backed timestamp providers
//!
//! Implements the timestamp port for chrono's naive and zoned types. A
//! zoned timestamp is diffed in its own civil calendar; converting between
//! zones is out of scope here.

use calspan_domain::{CalspanError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use tracing::warn;

use super::ports::CalendarTimestamp;

/// Days in `month` of `year`, from first-of-month date arithmetic
fn chrono_days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        first_of_month(year + 1, 1)?
    } else {
        first_of_month(year, month + 1)?
    };
    Ok((next - first).num_days() as u32)
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        warn!(year, month, "calendar month is not representable");
        CalspanError::InvalidTimestamp(format!("no such calendar month: {year}-{month}"))
    })
}

impl CalendarTimestamp for NaiveDateTime {
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    fn day(&self) -> u32 {
        Datelike::day(self)
    }

    fn hour(&self) -> u32 {
        Timelike::hour(self)
    }

    fn minute(&self) -> u32 {
        Timelike::minute(self)
    }

    fn second(&self) -> u32 {
        Timelike::second(self)
    }

    fn days_in_month(&self, year: i32, month: u32) -> Result<u32> {
        chrono_days_in_month(year, month)
    }
}

/// A bare date diffs as midnight of that day.
impl CalendarTimestamp for NaiveDate {
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    fn day(&self) -> u32 {
        Datelike::day(self)
    }

    fn hour(&self) -> u32 {
        0
    }

    fn minute(&self) -> u32 {
        0
    }

    fn second(&self) -> u32 {
        0
    }

    fn days_in_month(&self, year: i32, month: u32) -> Result<u32> {
        chrono_days_in_month(year, month)
    }
}

impl<Tz: TimeZone> CalendarTimestamp for DateTime<Tz> {
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    fn day(&self) -> u32 {
        Datelike::day(self)
    }

    fn hour(&self) -> u32 {
        Timelike::hour(self)
    }

    fn minute(&self) -> u32 {
        Timelike::minute(self)
    }

    fn second(&self) -> u32 {
        Timelike::second(self)
    }

    fn days_in_month(&self, year: i32, month: u32) -> Result<u32> {
        chrono_days_in_month(year, month)
    }
}
