//! Month count ↔ (year, month, leap) conversion and the leap-month test.
//!
//! The month count is the number of lunar months since the epoch. Month
//! numbers come from the mean sun alone: the `k`-th month of the calendar
//! is the first month count whose mean sun passes the `k`-th twelfth of the
//! ecliptic (offset by `alpha`). When two consecutive month counts map to
//! the same month number, the first is the leap occurrence.
//!
//! Year numbers here are Tibetan years (western year + 127).

use tibcal_math::amod;

use crate::solar::S1;

/// Offset between Tibetan and western year numbers.
pub const TIBETAN_YEAR_OFFSET: i64 = 127;

/// Western epoch year of the Phugpa month count.
pub const YEAR0: i64 = 806;

/// Intercalation offset of the Phugpa epoch.
pub const ALPHA: f64 = 1.0 + 827.0 / 1005.0;

/// Leap-month residue of the Phugpa epoch.
pub const BETA: i64 = 123;

/// Epoch parameters for month-count conversion and leap-month detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthCountConfig {
    /// Western year in which month count 0 falls. Default: 806.
    pub year0: i64,
    /// Intercalation offset in twelfths of a revolution. Default: 1 + 827/1005.
    pub alpha: f64,
    /// Residue (mod 65) marking duplicated months. Default: 123.
    pub beta: i64,
}

impl Default for MonthCountConfig {
    fn default() -> Self {
        Self::PHUGPA
    }
}

/// A month of the Tibetan calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TibetanMonth {
    /// Tibetan year number.
    pub year: i64,
    /// Month number, 1..=12.
    pub month: u8,
    /// Whether this is the leap occurrence, preceding the regular month.
    pub is_leap: bool,
}

impl MonthCountConfig {
    /// The Phugpa tradition's epoch.
    pub const PHUGPA: Self = Self {
        year0: YEAR0,
        alpha: ALPHA,
        beta: BETA,
    };

    /// Twelfth of the ecliptic reached by the mean sun during month count `n`.
    ///
    /// Takes the count as `f64` so that `n + 1` cannot overflow.
    fn true_month(&self, n: f64) -> i64 {
        (12.0 * S1 * n + self.alpha).ceil() as i64
    }

    /// Nominal months from the epoch to month `month` of Tibetan year `year`.
    ///
    /// Widened to `i128` so any `i64` year and month is accepted.
    fn months_since_epoch(&self, year: i64, month: i64) -> i128 {
        let western = i128::from(year) - i128::from(TIBETAN_YEAR_OFFSET);
        12 * (western - i128::from(self.year0)) + i128::from(month)
    }

    /// Resolve a month count into year, month and leap flag.
    pub fn from_month_count(&self, n: i64) -> TibetanMonth {
        let x = self.true_month(n as f64);
        let month = amod(x, 12);
        let year = (x - month) / 12 + self.year0 + TIBETAN_YEAR_OFFSET;
        let is_leap = self.true_month(n as f64 + 1.0) == x;
        tracing::trace!(month_count = n, year, month, is_leap, "resolved month count");
        TibetanMonth {
            year,
            month: month as u8,
            is_leap,
        }
    }

    /// Month count of a Tibetan year, month and leap flag.
    ///
    /// Inverse of [`Self::from_month_count`] for every month it produces.
    pub fn to_month_count(&self, year: i64, month: i64, is_leap: bool) -> i64 {
        let leap = if is_leap { 1.0 } else { 0.0 };
        let numerator =
            self.months_since_epoch(year, month) as f64 - self.alpha - (1.0 - 12.0 * S1) * leap;
        (numerator / (12.0 * S1)).floor() as i64
    }

    /// Whether month `month` of Tibetan year `year` is duplicated, i.e.
    /// preceded by a leap month with the same number.
    pub fn has_leap_month(&self, year: i64, month: i64) -> bool {
        let r = (2 * self.months_since_epoch(year, month)).rem_euclid(65) as i64;
        r == self.beta.rem_euclid(65) || r == (self.beta + 1).rem_euclid(65)
    }
}

/// [`MonthCountConfig::from_month_count`] for the Phugpa epoch.
pub fn from_month_count(n: i64) -> TibetanMonth {
    MonthCountConfig::PHUGPA.from_month_count(n)
}

/// [`MonthCountConfig::to_month_count`] for the Phugpa epoch.
pub fn to_month_count(year: i64, month: i64, is_leap: bool) -> i64 {
    MonthCountConfig::PHUGPA.to_month_count(year, month, is_leap)
}

/// [`MonthCountConfig::has_leap_month`] for the Phugpa epoch.
pub fn has_leap_month(year: i64, month: i64) -> bool {
    MonthCountConfig::PHUGPA.has_leap_month(year, month)
}

impl TibetanMonth {
    /// Month count of this month under the Phugpa epoch.
    pub fn month_count(&self) -> i64 {
        to_month_count(self.year, i64::from(self.month), self.is_leap)
    }
}
