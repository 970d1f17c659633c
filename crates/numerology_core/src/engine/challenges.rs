//! Challenge numbers.
//!
//! Each date component is reduced first; challenges are reduced absolute
//! differences of those sums. `dm` is taken from the reduced `d1` and `d2`,
//! never from the raw differences.

use crate::engine::reduce::{reduce, reduce_difference};
use crate::model::birth_date::BirthDate;
use crate::model::chart::Challenges;

pub fn challenges(birth: &BirthDate) -> Challenges {
    let day_sum = reduce(birth.day());
    let month_sum = reduce(birth.month());
    let year_sum = reduce(birth.year_digits());

    let d1 = reduce_difference(day_sum, month_sum);
    let d2 = reduce_difference(month_sum, year_sum);
    let d3 = reduce_difference(day_sum, year_sum);
    let dm = reduce_difference(d1, d2);

    Challenges { d1, d2, d3, dm }
}

#[cfg(test)]
mod tests {
    use super::challenges;
    use crate::model::birth_date::BirthDate;
    use chrono::NaiveDate;

    fn birth(input: &str) -> BirthDate {
        BirthDate::parse(input, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()).unwrap()
    }

    #[test]
    fn computes_pairwise_differences() {
        // day 8, month 3, year 1985 -> 23 -> 5
        let result = challenges(&birth("08/03/1985"));
        assert_eq!(result.d1.value(), 5); // |8 - 3|
        assert_eq!(result.d2.value(), 2); // |3 - 5|
        assert_eq!(result.d3.value(), 3); // |8 - 5|
        assert_eq!(result.dm.value(), 3); // |5 - 2|
    }

    #[test]
    fn equal_sums_reduce_to_nine() {
        // day 6, month 6, year 1990 -> 1
        let result = challenges(&birth("15/06/1990"));
        assert_eq!(result.d1.value(), 9);
        assert_eq!(result.d2.value(), 5);
        assert_eq!(result.dm.value(), 4);
    }

    #[test]
    fn master_sums_enter_differences_unreduced() {
        // day 29 -> 11, month 2, year 2000 -> 2
        let result = challenges(&birth("29/02/2000"));
        assert_eq!(result.d1.value(), 9); // |11 - 2| = 9
        assert_eq!(result.d2.value(), 9); // |2 - 2| = 0 -> 9
        assert_eq!(result.dm.value(), 9); // |9 - 9| = 0 -> 9
    }
}
