//! Year attributes and Rabjung (60-year cycle) numbering.
//!
//! A Tibetan year number is the western year in which most of it falls,
//! plus 127. Its animal (12-cycle), element (5 elements, two years each)
//! and gender (alternating) depend only on that number. The first Rabjung
//! cycle began in western 1027.

use tibcal_math::{amod, ceil_div};

use crate::error::CalendarError;
use crate::month_count::TIBETAN_YEAR_OFFSET;

/// The twelve year animals, starting at the Mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animal {
    Mouse,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Sheep,
    Monkey,
    Bird,
    Dog,
    Pig,
}

/// All animals in cycle order (index 0 = Mouse).
pub const ALL_ANIMALS: [Animal; 12] = [
    Animal::Mouse,
    Animal::Ox,
    Animal::Tiger,
    Animal::Rabbit,
    Animal::Dragon,
    Animal::Snake,
    Animal::Horse,
    Animal::Sheep,
    Animal::Monkey,
    Animal::Bird,
    Animal::Dog,
    Animal::Pig,
];

/// Animal labels in cycle order.
pub const YEAR_ANIMALS: [&str; 12] = [
    "Mouse", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Sheep", "Monkey", "Bird", "Dog",
    "Pig",
];

/// The five year elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Iron,
    Water,
}

/// All elements in cycle order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Iron,
    Element::Water,
];

/// Element labels in cycle order.
pub const YEAR_ELEMENTS: [&str; 5] = ["Wood", "Fire", "Earth", "Iron", "Water"];

/// Year gender, alternating every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

/// Both genders (index 0 = Male).
pub const ALL_GENDERS: [Gender; 2] = [Gender::Male, Gender::Female];

/// Gender labels.
pub const YEAR_GENDER: [&str; 2] = ["Male", "Female"];

impl Animal {
    /// English label.
    pub const fn name(self) -> &'static str {
        YEAR_ANIMALS[self.index() as usize]
    }

    /// 0-based index (Mouse=0 .. Pig=11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl Element {
    /// English label.
    pub const fn name(self) -> &'static str {
        YEAR_ELEMENTS[self.index() as usize]
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl Gender {
    /// English label.
    pub const fn name(self) -> &'static str {
        YEAR_GENDER[self.index() as usize]
    }

    /// 0-based index (Male=0, Female=1).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Animal, element and gender of a Tibetan year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearAttributes {
    pub animal: Animal,
    pub element: Element,
    pub gender: Gender,
}

/// A Tibetan year with its cycle position and attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TibetanYear {
    /// Rabjung cycle number (cycle 1 began in 1027).
    pub cycle_no: i64,
    /// Year within the cycle, 1..=60.
    pub year_no: u8,
    /// Western year during which most of the Tibetan year falls.
    pub western_year: i64,
    /// Tibetan year number (western year + 127).
    pub tib_year: i64,
    pub animal: Animal,
    pub element: Element,
    pub gender: Gender,
}

impl TibetanYear {
    fn new(cycle_no: i64, year_no: u8, western_year: i64) -> Self {
        let tib_year = western_year + TIBETAN_YEAR_OFFSET;
        let YearAttributes {
            animal,
            element,
            gender,
        } = year_attributes(tib_year);
        Self {
            cycle_no,
            year_no,
            western_year,
            tib_year,
            animal,
            element,
            gender,
        }
    }

    /// The attribute triple of this year.
    pub fn attributes(&self) -> YearAttributes {
        YearAttributes {
            animal: self.animal,
            element: self.element,
            gender: self.gender,
        }
    }
}

/// Attributes of a Tibetan year number.
pub fn year_attributes(tib_year: i64) -> YearAttributes {
    // Reduce before offsetting so every i64 is accepted. The element cycle
    // repeats every 10 years.
    let in_ten = tib_year.rem_euclid(10);
    YearAttributes {
        animal: ALL_ANIMALS[((tib_year.rem_euclid(12) + 1) % 12) as usize],
        element: ALL_ELEMENTS[(in_ten - 1).div_euclid(2).rem_euclid(5) as usize],
        gender: ALL_GENDERS[((tib_year.rem_euclid(2) + 1) % 2) as usize],
    }
}

/// Year `year_no` (1..=60) of Rabjung cycle `cycle_no`.
///
/// Fails when `year_no` is outside `1..=60`, or when the cycle is so far
/// from the present that its years do not fit in an `i64`.
pub fn rabjung_year(cycle_no: i64, year_no: i64) -> Result<TibetanYear, CalendarError> {
    if !(1..=60).contains(&year_no) {
        tracing::debug!(cycle_no, year_no, "rejected year in cycle");
        return Err(CalendarError::InvalidYearInCycle(year_no));
    }
    let western_year = cycle_no
        .checked_mul(60)
        .and_then(|y| y.checked_add(966 + year_no))
        .filter(|y| y.checked_add(TIBETAN_YEAR_OFFSET).is_some())
        .ok_or_else(|| {
            tracing::debug!(cycle_no, "rejected cycle");
            CalendarError::CycleOutOfRange(cycle_no)
        })?;
    Ok(TibetanYear::new(cycle_no, year_no as u8, western_year))
}

/// Latest western year whose Tibetan year number fits in an `i64`.
pub const MAX_WESTERN_YEAR: i64 = i64::MAX - TIBETAN_YEAR_OFFSET;

/// The Tibetan year falling mostly in western year `w_year`.
///
/// `w_year` may be any value up to [`MAX_WESTERN_YEAR`]; beyond it the
/// Tibetan year number is not representable.
pub fn western_year(w_year: i64) -> TibetanYear {
    let cycle_no = ceil_div(w_year.rem_euclid(60) - 1026, 60) + w_year.div_euclid(60);
    let year_no = amod(w_year.rem_euclid(60) - 6, 60) as u8;
    TibetanYear::new(cycle_no, year_no, w_year)
}

/// The Tibetan year numbered `tib_year`.
///
/// Any `tib_year` from `i64::MIN + 127` upwards is accepted.
pub fn tibetan_year(tib_year: i64) -> TibetanYear {
    western_year(tib_year - TIBETAN_YEAR_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_arrays_match_enums() {
        for (i, a) in ALL_ANIMALS.iter().enumerate() {
            assert_eq!(a.index() as usize, i);
            assert_eq!(a.name(), YEAR_ANIMALS[i]);
        }
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
            assert_eq!(e.name(), YEAR_ELEMENTS[i]);
        }
        for (i, g) in ALL_GENDERS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
            assert_eq!(g.name(), YEAR_GENDER[i]);
        }
    }

    #[test]
    fn rabjung_17_1() {
        let y = rabjung_year(17, 1).unwrap();
        assert_eq!(y.western_year, 2007);
        assert_eq!(y.tib_year, 2134);
        assert_eq!(y.animal, Animal::Pig);
        assert_eq!(y.element, Element::Fire);
        assert_eq!(y.gender, Gender::Female);
    }

    #[test]
    fn rabjung_rejects_out_of_range() {
        assert_eq!(rabjung_year(17, 0), Err(CalendarError::InvalidYearInCycle(0)));
        assert_eq!(rabjung_year(17, 61), Err(CalendarError::InvalidYearInCycle(61)));
        assert!(rabjung_year(17, 0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn western_2008() {
        let y = western_year(2008);
        assert_eq!(y.cycle_no, 17);
        assert_eq!(y.year_no, 22);
        assert_eq!(y.tib_year, 2135);
        assert_eq!(y.animal, Animal::Mouse);
        assert_eq!(y.element, Element::Earth);
        assert_eq!(y.gender, Gender::Male);
    }

    #[test]
    fn tibetan_matches_western() {
        assert_eq!(tibetan_year(2135), western_year(2008));
    }

    #[test]
    fn first_rabjung_began_1027() {
        let y = western_year(1027);
        assert_eq!((y.cycle_no, y.year_no), (1, 1));
        assert_eq!((y.element, y.animal), (Element::Fire, Animal::Rabbit));
    }

    #[test]
    fn last_year_of_cycle() {
        let y = western_year(1026);
        assert_eq!((y.cycle_no, y.year_no), (0, 60));
        assert_eq!(rabjung_year(0, 60).unwrap(), y);
    }

    #[test]
    fn attributes_at_extremes() {
        let max = year_attributes(i64::MAX);
        assert_eq!(
            (max.animal, max.element, max.gender),
            (Animal::Monkey, Element::Iron, Gender::Male)
        );
        let min = year_attributes(i64::MIN);
        assert_eq!(
            (min.animal, min.element, min.gender),
            (Animal::Snake, Element::Wood, Gender::Female)
        );
    }

    #[test]
    fn reduced_element_matches_direct_formula() {
        for tib_year in -300..300 {
            let direct = (tib_year - 1_i64).div_euclid(2).rem_euclid(5) as usize;
            assert_eq!(year_attributes(tib_year).element, ALL_ELEMENTS[direct], "{tib_year}");
        }
    }

    #[test]
    fn rabjung_cycle_out_of_range() {
        assert_eq!(
            rabjung_year(i64::MAX / 2, 1),
            Err(CalendarError::CycleOutOfRange(i64::MAX / 2))
        );
        assert_eq!(
            rabjung_year(i64::MIN / 2, 1),
            Err(CalendarError::CycleOutOfRange(i64::MIN / 2))
        );
        assert!(rabjung_year(i64::MAX / 60 - 20, 60).is_ok());
    }

    #[test]
    fn western_year_extremes() {
        let max = western_year(MAX_WESTERN_YEAR);
        assert_eq!(max.tib_year, i64::MAX);
        assert!((1..=60).contains(&max.year_no));
        let min = western_year(i64::MIN);
        assert_eq!(min.western_year, i64::MIN);
        assert!((1..=60).contains(&min.year_no));
        assert_eq!(tibetan_year(i64::MIN + 127), min);
    }

    #[test]
    fn cycle_number_sweep() {
        for w in -5000..5000_i64 {
            let y = western_year(w);
            let expected = -((1026 - w).div_euclid(60));
            assert_eq!(y.cycle_no, expected, "w = {w}");
        }
    }

    #[test]
    fn attributes_accessor() {
        let y = tibetan_year(2151);
        assert_eq!(y.attributes(), year_attributes(2151));
        assert_eq!(y.attributes().animal, Animal::Dragon);
        assert_eq!(y.attributes().element, Element::Wood);
    }
}
