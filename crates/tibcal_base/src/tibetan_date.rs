//! Full Tibetan dates and their civil Julian day numbers.

use crate::date::{DayKind, M0, M1, day_kind, julian_day};
use crate::error::CalendarError;
use crate::gregorian::jdn_to_gregorian;
use crate::month_count::{from_month_count, has_leap_month, to_month_count};

/// A day of the Tibetan calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TibetanDate {
    /// Tibetan year number.
    pub year: i64,
    /// Month number, 1..=12.
    pub month: u8,
    /// Whether the month is the leap occurrence.
    pub is_leap_month: bool,
    /// Lunar day, 1..=30.
    pub day: u8,
    /// Whether this is the first civil day of a duplicated lunar day.
    pub is_leap_day: bool,
}

impl TibetanDate {
    /// Month count of the date's month.
    pub fn month_count(&self) -> i64 {
        to_month_count(self.year, i64::from(self.month), self.is_leap_month)
    }

    /// Civil Julian day number of this date.
    pub fn julian_day(&self) -> i64 {
        julian_day(i64::from(self.day), self.month_count()) - i64::from(self.is_leap_day)
    }

    /// Gregorian `(year, month, day)` of this date.
    pub fn gregorian(&self) -> (i64, u8, u8) {
        jdn_to_gregorian(self.julian_day())
    }
}

/// Julian day number of a Tibetan date.
///
/// For a duplicated lunar day this is the second (regular) civil day.
/// Fails when the month or day is out of range, when a leap month is asked
/// for a month that is not duplicated, or when the day is skipped.
pub fn tibetan_to_jdn(
    year: i64,
    month: i64,
    is_leap_month: bool,
    day: i64,
) -> Result<i64, CalendarError> {
    if !(1..=12).contains(&month) {
        tracing::debug!(year, month, "rejected month");
        return Err(CalendarError::InvalidMonth(month));
    }
    if !(1..=30).contains(&day) {
        tracing::debug!(year, month, day, "rejected day");
        return Err(CalendarError::InvalidDay(day));
    }
    if is_leap_month && !has_leap_month(year, month) {
        tracing::debug!(year, month, "no leap month");
        return Err(CalendarError::NotLeapMonth {
            year,
            month: month as u8,
        });
    }
    let month_count = to_month_count(year, month, is_leap_month);
    if day_kind(day, month_count) == DayKind::Skipped {
        tracing::debug!(month_count, day, "skipped day");
        return Err(CalendarError::SkippedDay {
            month_count,
            day: day as u8,
        });
    }
    Ok(julian_day(day, month_count))
}

/// Tibetan date falling on a civil Julian day number.
pub fn jdn_to_tibetan(jdn: i64) -> TibetanDate {
    // Start one month before the mean estimate; true dates stay within a
    // day of mean dates, so the first lunar day checked ends before `jdn`.
    let mut month_count = ((jdn as f64 - M0) / M1).floor() as i64 - 1;
    let mut day = 1;
    let mut end = julian_day(day, month_count);
    while end < jdn {
        if day == 30 {
            day = 1;
            month_count += 1;
        } else {
            day += 1;
        }
        end = julian_day(day, month_count);
    }
    tracing::trace!(jdn, month_count, day, end, "located lunar day");
    let month = from_month_count(month_count);
    TibetanDate {
        year: month.year,
        month: month.month,
        is_leap_month: month.is_leap,
        day: day as u8,
        is_leap_day: end > jdn,
    }
}
