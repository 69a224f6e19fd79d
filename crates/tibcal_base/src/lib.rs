//! Phugpa Tibetan lunisolar calendar.
//!
//! This crate provides:
//! - Lunar and solar equations and the true date of a lunar day
//! - Month count ↔ (year, month, leap month) conversion
//! - The leap-month residue test
//! - Year attributes (animal, element, gender) and Rabjung cycle numbering
//! - Tibetan date ↔ Julian day number ↔ Gregorian conversion
//!
//! The model follows Svante Janson, "Tibetan Calendar Mathematics". All
//! constants are the traditional rational values; results are not
//! astronomically refined.

pub mod date;
pub mod error;
pub mod gregorian;
pub mod lunar;
pub mod month_count;
pub mod solar;
pub mod tibetan_date;
pub mod weekday;
pub mod year;

pub use date::{DayKind, day_before, day_kind, julian_day, mean_date, true_date};
pub use error::CalendarError;
pub use gregorian::{gregorian_to_jdn, jdn_to_gregorian};
pub use lunar::{MOON_TABLE, moon_anomaly, moon_equ};
pub use month_count::{
    MonthCountConfig, TIBETAN_YEAR_OFFSET, TibetanMonth, YEAR0, from_month_count, has_leap_month,
    to_month_count,
};
pub use solar::{SUN_TABLE, mean_sun, sun_equ};
pub use tibetan_date::{TibetanDate, jdn_to_tibetan, tibetan_to_jdn};
pub use weekday::{ALL_WEEKDAYS, WEEKDAYS, Weekday, weekday};
pub use year::{
    ALL_ANIMALS, ALL_ELEMENTS, ALL_GENDERS, Animal, Element, Gender, MAX_WESTERN_YEAR,
    TibetanYear, YEAR_ANIMALS, YEAR_ELEMENTS, YEAR_GENDER, YearAttributes, rabjung_year,
    tibetan_year, western_year, year_attributes,
};
