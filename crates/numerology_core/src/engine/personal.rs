//! Personal year and personal month.
//!
//! The target year enters the sum digit by digit (2026 adds 2+0+2+6), it is
//! never reduced on its own first. Birth day and month are added raw.

use crate::engine::reduce::{digit_sum, reduce};
use crate::model::birth_date::BirthDate;
use crate::model::number::NumerologyNumber;
use chrono::{Datelike, NaiveDate};

/// `reduce(day + month + digits(target_year))`.
///
/// Callers pass years `>= 1`; `EngineConfig::validate` enforces this for
/// the forecast year and birth dates start at year 1.
pub fn personal_year(day: u32, month: u32, target_year: i32) -> NumerologyNumber {
    reduce(day + month + digit_sum(target_year.unsigned_abs()))
}

/// `reduce(personal_year + target_month)`.
pub fn personal_month(personal_year: NumerologyNumber, target_month: u32) -> NumerologyNumber {
    reduce(personal_year.get() + target_month)
}

/// Whether today's (month, day) has reached the birth (month, day).
pub fn has_personal_year_started(birth: &BirthDate, today: NaiveDate) -> bool {
    birth.birthday_reached(today)
}

/// Calendar year whose birthday opened the personal-year window holding
/// `today`.
pub fn personal_year_anchor(birth: &BirthDate, today: NaiveDate) -> i32 {
    if has_personal_year_started(birth, today) {
        today.year()
    } else {
        today.year() - 1
    }
}

/// Personal year of the window containing `today`.
pub fn current_personal_year(birth: &BirthDate, today: NaiveDate) -> NumerologyNumber {
    personal_year(
        birth.day(),
        birth.month(),
        personal_year_anchor(birth, today),
    )
}

#[cfg(test)]
mod tests {
    use super::{
        current_personal_year, has_personal_year_started, personal_month, personal_year,
        personal_year_anchor,
    };
    use crate::model::birth_date::BirthDate;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn adds_target_year_digits_individually() {
        // 15 + 6 + 2 + 0 + 2 + 6 = 31 -> 4
        assert_eq!(personal_year(15, 6, 2026).value(), 4);
    }

    #[test]
    fn personal_year_keeps_masters() {
        // 2 + 9 + (2 + 0 + 2 + 7) = 22
        assert_eq!(personal_year(2, 9, 2027).value(), 22);
    }

    #[test]
    fn personal_month_adds_calendar_month() {
        let year = personal_year(15, 6, 2026);
        assert_eq!(personal_month(year, 10).value(), 5);
        assert_eq!(personal_month(year, 7).value(), 11);
    }

    #[test]
    fn window_anchors_on_previous_year_before_birthday() {
        let birth = BirthDate::from_ymd(1990, 6, 15, date(2026, 10, 17)).unwrap();

        assert!(!has_personal_year_started(&birth, date(2026, 6, 14)));
        assert_eq!(personal_year_anchor(&birth, date(2026, 6, 14)), 2025);

        assert!(has_personal_year_started(&birth, date(2026, 6, 15)));
        assert_eq!(personal_year_anchor(&birth, date(2026, 6, 15)), 2026);

        // 2025: 15 + 6 + 9 = 30 -> 3
        assert_eq!(current_personal_year(&birth, date(2026, 1, 1)).value(), 3);
        assert_eq!(current_personal_year(&birth, date(2026, 7, 1)).value(), 4);
    }
}
