//! Equation of the moon.
//!
//! The moon's anomaly advances linearly with the month count and lunar day;
//! its correction is read from a 28-step symmetric table in units of
//! 1/60 day.

use tibcal_math::QuarterTable;

/// Quarter of the moon correction table (period 28).
pub const MOON_TABLE: QuarterTable = QuarterTable::new(&[0, 5, 10, 15, 19, 22, 24, 25]);

/// Anomaly advance per month count.
pub const A1: f64 = 253.0 / 3528.0;
/// Anomaly advance per lunar day.
pub const A2: f64 = 1.0 / 28.0;
/// Anomaly at the epoch.
pub const A0: f64 = 475.0 / 3528.0;

/// Mean anomaly of the moon, in revolutions, at the end of a lunar day.
pub fn moon_anomaly(day: i64, month_count: i64) -> f64 {
    month_count as f64 * A1 + day as f64 * A2 + A0
}

/// Lunar correction from the moon table.
pub fn moon_equ(day: i64, month_count: i64) -> f64 {
    MOON_TABLE.interpolate(28.0 * moon_anomaly(day, month_count))
}
