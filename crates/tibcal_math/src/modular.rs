//! Modular arithmetic helpers.

/// Adjusted modulo: like `x mod n`, but maps a zero remainder to `n`.
///
/// The result is always in `[1, n]` for positive `n`. Month and
/// year-in-cycle numbers are 1-based, so this is the natural reduction for
/// both.
pub fn amod(x: i64, n: i64) -> i64 {
    let r = x.rem_euclid(n);
    if r == 0 { n } else { r }
}

/// Integer ceiling of `a / b` for positive `b`, exact for any `a`.
pub fn ceil_div(a: i64, b: i64) -> i64 {
    a.div_euclid(b) + i64::from(a.rem_euclid(b) != 0)
}
