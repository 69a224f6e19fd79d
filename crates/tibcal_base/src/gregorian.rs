//! Proleptic Gregorian calendar ↔ Julian day number.
//!
//! Integer algorithms (Fliegel & Van Flandern) with floored division, so
//! negative Julian day numbers and years before -4800 convert correctly.
//! Years are astronomical: 1 BC is year 0. Inputs are expected to stay
//! well inside `i64` (|jdn| below 2^60).

/// Julian day number of a Gregorian date.
pub fn gregorian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let (y, m, d) = (year, month, day);
    // January and February count as months 13 and 14 of the previous year.
    let a = if m <= 2 { -1 } else { 0 };
    (1461 * (y + 4800 + a)).div_euclid(4) + (367 * (m - 2 - 12 * a)).div_euclid(12)
        - (3 * (y + 4900 + a).div_euclid(100)).div_euclid(4)
        + d
        - 32075
}

/// Gregorian `(year, month, day)` of a Julian day number.
pub fn jdn_to_gregorian(jdn: i64) -> (i64, u8, u8) {
    let f = jdn + 1401 + ((4 * jdn + 274277).div_euclid(146097) * 3).div_euclid(4) - 38;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;
    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (12 + 2 - month).div_euclid(12);
    (year, month as u8, day as u8)
}
