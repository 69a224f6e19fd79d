//! True date of a lunar day.
//!
//! A lunar day is addressed by `(day, month_count)` where `day` runs
//! `1..=30` on an idealised 30-day grid. Its true date is the mean date
//! corrected by the lunar and solar equations (both in 1/60 day), and the
//! civil day on which it ends is the integer part of that value.

use crate::lunar::moon_equ;
use crate::solar::sun_equ;

/// Mean synodic month in days (about 29.53).
pub const M1: f64 = 167025.0 / 5656.0;
/// Mean lunar day in days.
pub const M2: f64 = M1 / 30.0;
/// Mean date at the epoch, as a Julian day.
pub const M0: f64 = 2015501.0 + 4783.0 / 5656.0;

/// Mean date, as a real Julian day, at the end of a lunar day.
pub fn mean_date(day: i64, month_count: i64) -> f64 {
    month_count as f64 * M1 + day as f64 * M2 + M0
}

/// True date, as a real Julian day, at the end of a lunar day.
pub fn true_date(day: i64, month_count: i64) -> f64 {
    mean_date(day, month_count) + moon_equ(day, month_count) / 60.0
        - sun_equ(day, month_count) / 60.0
}

/// The lunar day immediately before `(day, month_count)` on the 30-day grid.
///
/// Day 1 borrows from the previous month count. Leap months and true month
/// lengths are not consulted.
pub fn day_before(day: i64, month_count: i64) -> (i64, i64) {
    if day == 1 {
        (30, month_count - 1)
    } else {
        (day - 1, month_count)
    }
}

/// Julian day number of the civil day on which the lunar day ends.
pub fn julian_day(day: i64, month_count: i64) -> i64 {
    true_date(day, month_count).floor() as i64
}

/// How a lunar day maps onto civil days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// Ends on the civil day after the previous lunar day.
    Normal,
    /// Ends on the same civil day as the previous lunar day, so it is
    /// omitted from the calendar.
    Skipped,
    /// Spans two civil days; the first carries the leap (repeated) date.
    Duplicated,
}

impl DayKind {
    /// Whether the lunar day appears in the civil calendar at all.
    pub const fn occurs(self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

/// Classify a lunar day by comparing its civil day with its predecessor's.
pub fn day_kind(day: i64, month_count: i64) -> DayKind {
    let (prev_day, prev_month) = day_before(day, month_count);
    match julian_day(day, month_count) - julian_day(prev_day, prev_month) {
        0 => DayKind::Skipped,
        1 => DayKind::Normal,
        _ => DayKind::Duplicated,
    }
}
