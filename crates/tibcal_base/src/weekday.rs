//! Day of the week from a Julian day number.

/// The seven weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All weekdays in order (index 0 = Sunday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// Short weekday labels, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl Weekday {
    /// Short label ("Sun" .. "Sat").
    pub const fn name(self) -> &'static str {
        WEEKDAYS[self.index() as usize]
    }

    /// 0-based index (Sunday=0 .. Saturday=6).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Weekday of a civil Julian day number.
pub fn weekday(julian_day: i64) -> Weekday {
    ALL_WEEKDAYS[((julian_day.rem_euclid(7) + 1) % 7) as usize]
}
