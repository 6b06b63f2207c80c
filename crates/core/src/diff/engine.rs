//! Calendar difference engine
//!
//! Computes the exact civil-calendar span between two timestamps as a
//! descending sequence of non-zero components. The borrow cascade runs as
//! one fixed pass, seconds up to months: each stage fires only when its
//! naive difference went negative, and for two valid timestamps at most
//! one borrow per unit boundary can occur, so nothing is re-checked.

use calspan_domain::constants::{
    HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR, SECONDS_PER_MINUTE,
};
use calspan_domain::{CalendarDiff, CalendarUnit, Result};

use super::ports::CalendarTimestamp;

/// Structured calendar difference between `a` and `b`
///
/// Order-insensitive: the result is the non-negative span between the
/// earlier and the later of the two, so swapping the arguments changes
/// nothing. Equal timestamps yield the empty difference.
///
/// The only fallible step is the provider's days-in-month query, needed
/// when the day column borrows; its error is propagated unchanged.
///
/// # Examples
///
/// ```
/// use calspan_core::between;
/// use calspan_domain::CalendarUnit;
/// use chrono::NaiveDate;
///
/// let a = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let b = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap().and_hms_opt(1, 0, 0).unwrap();
///
/// let diff = between(&a, &b).unwrap();
/// assert_eq!(diff.magnitude_of(CalendarUnit::Day), Some(1));
/// assert_eq!(diff.magnitude_of(CalendarUnit::Hour), Some(1));
/// ```
pub fn between<A, B>(a: &A, b: &B) -> Result<CalendarDiff>
where
    A: CalendarTimestamp + ?Sized,
    B: CalendarTimestamp + ?Sized,
{
    let (fields_a, fields_b) = (a.fields(), b.fields());
    if fields_a == fields_b {
        return Ok(CalendarDiff::empty());
    }

    // Direction is discarded: magnitude only.
    let (earlier, later) =
        if fields_a > fields_b { (fields_b, fields_a) } else { (fields_a, fields_b) };

    let mut years = i64::from(later.year) - i64::from(earlier.year);
    let mut months = i64::from(later.month) - i64::from(earlier.month);
    let mut days = i64::from(later.day) - i64::from(earlier.day);
    let mut hours = i64::from(later.hour) - i64::from(earlier.hour);
    let mut minutes = i64::from(later.minute) - i64::from(earlier.minute);
    let mut seconds = i64::from(later.second) - i64::from(earlier.second);

    if seconds < 0 {
        seconds += SECONDS_PER_MINUTE;
        minutes -= 1;
    }
    if minutes < 0 {
        minutes += MINUTES_PER_HOUR;
        hours -= 1;
    }
    if hours < 0 {
        hours += HOURS_PER_DAY;
        days -= 1;
    }
    if days < 0 {
        // Borrow from the last fully-elapsed month before `later`.
        let borrowed = i64::from(days_in_preceding_month(a, later.year, later.month)?);
        let earlier_day = i64::from(earlier.day);
        days = if borrowed < earlier_day {
            // 31/01 -> 02/03: the earlier day-of-month does not exist in the
            // borrowed month; the missing days are added back on top.
            borrowed + days + (earlier_day - borrowed)
        } else {
            borrowed + days
        };
        months -= 1;
    }
    if months < 0 {
        months += MONTHS_PER_YEAR;
        years -= 1;
    }

    Ok(CalendarDiff::from_ordered([
        (CalendarUnit::Year, years as u32),
        (CalendarUnit::Month, months as u32),
        (CalendarUnit::Day, days as u32),
        (CalendarUnit::Hour, hours as u32),
        (CalendarUnit::Minute, minutes as u32),
        (CalendarUnit::Second, seconds as u32),
    ]))
}

/// Length of the month immediately preceding (`year`, `month`), rolling
/// into December of the previous year when `month` is January.
///
/// This is the single point where the 1-based month convention needs
/// converting to a neighbouring month.
fn days_in_preceding_month<T>(provider: &T, year: i32, month: u32) -> Result<u32>
where
    T: CalendarTimestamp + ?Sized,
{
    if month == 1 {
        provider.days_in_month(year - 1, 12)
    } else {
        provider.days_in_month(year, month - 1)
    }
}
