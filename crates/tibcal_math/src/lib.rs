//! Numeric building blocks for the Tibetan calendar.
//!
//! This crate provides:
//! - Interpolation over quarter-period symmetric integer tables
//! - Adjusted modulo and integer ceiling division
//!
//! Nothing here knows about months or years; the calendar model lives in
//! `tibcal_base`.

pub mod interp;
pub mod modular;

pub use interp::QuarterTable;
pub use modular::{amod, ceil_div};
