//! Piecewise-linear interpolation over quarter-period symmetric tables.
//!
//! A table stores the first quarter of a periodic signal, rising from zero
//! to its peak. The remaining quarters are produced by reflection:
//!
//! ```text
//! j in [0, q]      ->  t[j]          rising
//! j in (q, 2q]     ->  t[2q - j]     falling
//! j in (2q, 3q]    -> -t[j - 2q]     falling below zero
//! j in (3q, 4q)    -> -t[4q - j]     rising back to zero
//! ```
//!
//! where `q` is the quarter length (number of entries minus one) and the
//! full period is `4q`. Boundary indices belong to the earlier branch.

/// One quarter of a symmetric periodic integer signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterTable {
    values: &'static [i32],
}

impl QuarterTable {
    /// Wrap a quarter-period table. Needs at least two entries.
    pub const fn new(values: &'static [i32]) -> Self {
        assert!(values.len() >= 2, "quarter table needs at least two entries");
        Self { values }
    }

    /// The raw quarter-period entries.
    pub const fn values(&self) -> &'static [i32] {
        self.values
    }

    /// Quarter length in index steps.
    pub const fn quarter(&self) -> i64 {
        self.values.len() as i64 - 1
    }

    /// Full period in index steps (`4 * quarter`).
    pub const fn period(&self) -> i64 {
        4 * self.quarter()
    }

    /// Table value at an integer index, any sign, wrapped into one period.
    pub fn value_at(&self, index: i64) -> i32 {
        let q = self.quarter();
        let j = index.rem_euclid(self.period());
        if j <= q {
            self.values[j as usize]
        } else if j <= 2 * q {
            self.values[(2 * q - j) as usize]
        } else if j <= 3 * q {
            -self.values[(j - 2 * q) as usize]
        } else {
            -self.values[(4 * q - j) as usize]
        }
    }

    /// Linearly interpolated value at a real index.
    ///
    /// The fractional part is taken from the unreduced index so that
    /// results match the reference tables bit for bit; only the integer
    /// neighbours are wrapped.
    pub fn interpolate(&self, index: f64) -> f64 {
        let lo = index.floor();
        let d = f64::from(self.value_at(lo as i64));
        let u = f64::from(self.value_at(index.ceil() as i64));
        d + (index - lo) * (u - d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAMP: QuarterTable = QuarterTable::new(&[0, 2, 3]);

    #[test]
    fn quarter_and_period() {
        assert_eq!(RAMP.quarter(), 2);
        assert_eq!(RAMP.period(), 8);
    }

    #[test]
    fn four_quadrants() {
        let expected = [0, 2, 3, 2, 0, -2, -3, -2];
        for (j, &v) in expected.iter().enumerate() {
            assert_eq!(RAMP.value_at(j as i64), v, "index {j}");
        }
    }

    #[test]
    fn wraps_negative_index() {
        assert_eq!(RAMP.value_at(-1), -2);
        assert_eq!(RAMP.value_at(-8), 0);
        assert_eq!(RAMP.value_at(9), 2);
    }

    #[test]
    fn integer_index_is_exact() {
        assert_eq!(RAMP.interpolate(2.0), 3.0);
        assert_eq!(RAMP.interpolate(6.0), -3.0);
    }

    #[test]
    fn midpoint_interpolation() {
        assert_eq!(RAMP.interpolate(0.5), 1.0);
        assert_eq!(RAMP.interpolate(1.5), 2.5);
        assert_eq!(RAMP.interpolate(-0.5), -1.0);
    }

    #[test]
    fn exposes_values() {
        assert_eq!(RAMP.values(), &[0, 2, 3]);
    }
}
