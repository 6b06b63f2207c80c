use calspan_core::CalendarTimestamp;
use calspan_domain::{CalendarFields, CalspanError, Result};

/// Chrono-free mock for `CalendarTimestamp`.
///
/// Reports a fixed set of civil fields and answers the days-in-month query
/// from the Gregorian rules directly. Designed for tests where the engine
/// must be driven through the port without the chrono providers.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimestamp {
    fields: CalendarFields,
}

impl FixedTimestamp {
    /// Create a mock timestamp from explicit civil fields.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self { fields: CalendarFields::new(year, month, day, hour, minute, second) }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

impl CalendarTimestamp for FixedTimestamp {
    fn year(&self) -> i32 {
        self.fields.year
    }

    fn month(&self) -> u32 {
        self.fields.month
    }

    fn day(&self) -> u32 {
        self.fields.day
    }

    fn hour(&self) -> u32 {
        self.fields.hour
    }

    fn minute(&self) -> u32 {
        self.fields.minute
    }

    fn second(&self) -> u32 {
        self.fields.second
    }

    fn days_in_month(&self, year: i32, month: u32) -> Result<u32> {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
            4 | 6 | 9 | 11 => Ok(30),
            2 => Ok(if is_leap_year(year) { 29 } else { 28 }),
            other => Err(CalspanError::InvalidTimestamp(format!(
                "no such calendar month: {year}-{other}"
            ))),
        }
    }
}

/// Provider whose calendar query always fails.
///
/// Used to verify that a collaborator failure propagates out of the engine
/// unchanged instead of being swallowed or recovered from.
#[derive(Debug, Clone, Copy)]
pub struct BrokenCalendar {
    fields: CalendarFields,
}

impl BrokenCalendar {
    /// Create a failing provider with the given civil fields.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self { fields: CalendarFields::new(year, month, day, hour, minute, second) }
    }
}

impl CalendarTimestamp for BrokenCalendar {
    fn year(&self) -> i32 {
        self.fields.year
    }

    fn month(&self) -> u32 {
        self.fields.month
    }

    fn day(&self) -> u32 {
        self.fields.day
    }

    fn hour(&self) -> u32 {
        self.fields.hour
    }

    fn minute(&self) -> u32 {
        self.fields.minute
    }

    fn second(&self) -> u32 {
        self.fields.second
    }

    fn days_in_month(&self, _year: i32, _month: u32) -> Result<u32> {
        Err(CalspanError::InvalidTimestamp("calendar backend unavailable".to_string()))
    }
}
