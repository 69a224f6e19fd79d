//! Equation of the sun.
//!
//! The mean sun is measured in revolutions from the epoch; the correction
//! comes from a 12-step symmetric table, offset by a quarter revolution to
//! the solar apogee.

use tibcal_math::QuarterTable;

/// Quarter of the sun correction table (period 12).
pub const SUN_TABLE: QuarterTable = QuarterTable::new(&[0, 6, 10, 11]);

/// Mean sun advance per month count.
pub const S1: f64 = 65.0 / 804.0;
/// Mean sun at the epoch.
pub const S0: f64 = 743.0 / 804.0;
/// Mean sun advance per lunar day.
pub const S2: f64 = S1 / 30.0;

/// Mean longitude of the sun, in revolutions, at the end of a lunar day.
pub fn mean_sun(day: i64, month_count: i64) -> f64 {
    month_count as f64 * S1 + day as f64 * S2 + S0
}

/// Solar correction from the sun table.
pub fn sun_equ(day: i64, month_count: i64) -> f64 {
    SUN_TABLE.interpolate(12.0 * (mean_sun(day, month_count) - 1.0 / 4.0))
}
