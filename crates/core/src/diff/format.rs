//! Rendering calendar differences into human phrases
//!
//! Pure formatting: magnitude plus pluralized label per component, joined
//! with the configured delimiter. No calendar knowledge lives here.

use calspan_domain::{CalendarDiff, DiffLabels, Result};
use once_cell::sync::Lazy;

use super::engine::between;
use super::ports::CalendarTimestamp;

static DEFAULT_LABELS: Lazy<DiffLabels> = Lazy::new(DiffLabels::default);

/// Render a structured difference with the given label table
///
/// Each component renders as `"<magnitude> <label>"`, singular label when
/// the magnitude is exactly 1; components are joined with the table's
/// delimiter. An empty difference renders the table's no-diff string.
///
/// # Examples
///
/// ```
/// use calspan_core::render;
/// use calspan_domain::{CalendarDiff, CalendarUnit, DiffLabels};
///
/// let diff = CalendarDiff::from_ordered([
///     (CalendarUnit::Minute, 1),
///     (CalendarUnit::Second, 30),
/// ]);
/// assert_eq!(render(&diff, &DiffLabels::default()), "1 minute 30 seconds");
/// ```
pub fn render(diff: &CalendarDiff, labels: &DiffLabels) -> String {
    if diff.is_empty() {
        return labels.no_diff.clone();
    }

    diff.components()
        .iter()
        .map(|component| {
            format!(
                "{} {}",
                component.magnitude,
                labels.label_for(component.unit, component.magnitude)
            )
        })
        .collect::<Vec<_>>()
        .join(&labels.delimiter)
}

/// Human-readable difference between two timestamps, default labels
///
/// Composes [`between`] and [`render`] with the default English table.
///
/// # Examples
///
/// ```
/// use calspan_core::precise_diff;
/// use chrono::NaiveDate;
///
/// let a = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let b = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// assert_eq!(precise_diff(&a, &b).unwrap(), "1 year");
/// ```
pub fn precise_diff<A, B>(a: &A, b: &B) -> Result<String>
where
    A: CalendarTimestamp + ?Sized,
    B: CalendarTimestamp + ?Sized,
{
    Ok(render(&between(a, b)?, &DEFAULT_LABELS))
}

/// Human-readable difference with a caller-supplied label table
pub fn precise_diff_with<A, B>(a: &A, b: &B, labels: &DiffLabels) -> Result<String>
where
    A: CalendarTimestamp + ?Sized,
    B: CalendarTimestamp + ?Sized,
{
    Ok(render(&between(a, b)?, labels))
}
