//! Error types for Tibetan calendar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar conversions.
///
/// Every variant describes an argument the caller supplied that the
/// calendar cannot represent; nothing here is recoverable internally.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Year number within a Rabjung cycle outside `1..=60`.
    InvalidYearInCycle(i64),
    /// Rabjung cycle whose years do not fit in an `i64`.
    CycleOutOfRange(i64),
    /// Month number outside `1..=12`.
    InvalidMonth(i64),
    /// Day number outside `1..=30`.
    InvalidDay(i64),
    /// A leap month was requested for a month that is not duplicated.
    NotLeapMonth { year: i64, month: u8 },
    /// The requested lunar day is omitted from the civil calendar.
    SkippedDay { month_count: i64, day: u8 },
}

impl CalendarError {
    /// All current variants are invalid-argument conditions.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidYearInCycle(_)
                | Self::CycleOutOfRange(_)
                | Self::InvalidMonth(_)
                | Self::InvalidDay(_)
                | Self::NotLeapMonth { .. }
                | Self::SkippedDay { .. }
        )
    }
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYearInCycle(y) => {
                write!(f, "invalid argument: year in cycle must be 1..=60, got {y}")
            }
            Self::CycleOutOfRange(c) => {
                write!(f, "invalid argument: Rabjung cycle {c} is out of range")
            }
            Self::InvalidMonth(m) => write!(f, "invalid argument: month must be 1..=12, got {m}"),
            Self::InvalidDay(d) => write!(f, "invalid argument: day must be 1..=30, got {d}"),
            Self::NotLeapMonth { year, month } => {
                write!(f, "invalid argument: month {month} of year {year} has no leap month")
            }
            Self::SkippedDay { month_count, day } => {
                write!(f, "invalid argument: day {day} of month count {month_count} is skipped")
            }
        }
    }
}

impl Error for CalendarError {}
