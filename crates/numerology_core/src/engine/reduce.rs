//! Digit-sum reduction with master-number exceptions.
//!
//! # Invariants
//! - `reduce` output is always in {1..9, 11, 22, 33}.
//! - 11, 22 and 33 are returned as soon as they appear, including as
//!   intermediate sums.
//! - `reduce(0)` is 9.

use crate::model::number::NumerologyNumber;

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduces `n` to a single digit or a master number.
///
/// Differences must be absolute-valued by the caller; see
/// [`reduce_difference`].
pub fn reduce(n: u32) -> NumerologyNumber {
    // Empty letter subsets and equal challenge operands land here.
    if n == 0 {
        return NumerologyNumber::ZERO_FALLBACK;
    }

    let mut current = n;
    loop {
        if let Some(number) = NumerologyNumber::new(current) {
            return number;
        }
        current = digit_sum(current);
    }
}

/// `reduce(|a - b|)`.
pub fn reduce_difference(a: NumerologyNumber, b: NumerologyNumber) -> NumerologyNumber {
    reduce(a.get().abs_diff(b.get()))
}

/// `reduce(a + b)`.
pub fn reduce_sum(a: NumerologyNumber, b: NumerologyNumber) -> NumerologyNumber {
    reduce(a.get() + b.get())
}

#[cfg(test)]
mod tests {
    use super::{digit_sum, reduce, reduce_difference};
    use crate::model::number::NumerologyNumber;

    fn n(value: u32) -> NumerologyNumber {
        NumerologyNumber::new(value).unwrap()
    }

    #[test]
    fn digit_sum_adds_every_digit() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(2026), 10);
    }

    #[test]
    fn reduce_stops_at_master_numbers() {
        assert_eq!(reduce(11), n(11));
        assert_eq!(reduce(22), n(22));
        assert_eq!(reduce(33), n(33));
        // 29 -> 11, not 2
        assert_eq!(reduce(29), n(11));
        // 1993 -> 22
        assert_eq!(reduce(1993), n(22));
    }

    #[test]
    fn reduce_walks_through_ten() {
        assert_eq!(reduce(1990), n(1));
        assert_eq!(reduce(19), n(1));
        assert_eq!(reduce(10), n(1));
        assert_eq!(reduce(31), n(4));
    }

    #[test]
    fn reduce_zero_is_nine() {
        assert_eq!(reduce(0), n(9));
    }

    #[test]
    fn difference_is_absolute() {
        assert_eq!(reduce_difference(n(2), n(9)), n(7));
        assert_eq!(reduce_difference(n(9), n(2)), n(7));
        assert_eq!(reduce_difference(n(4), n(4)), n(9));
    }
}
