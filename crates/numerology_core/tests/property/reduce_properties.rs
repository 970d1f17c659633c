use chrono::NaiveDate;
use numerology_core::engine::digit_sum;
use numerology_core::{reduce, NumerologyEngine, NumerologyNumber};
use proptest::prelude::*;

fn is_legal(value: u8) -> bool {
    matches!(value, 1..=9 | 11 | 22 | 33)
}

proptest! {
    #[test]
    fn reduce_output_is_always_legal(n in 0u32..10_000_000) {
        prop_assert!(is_legal(reduce(n).value()));
    }

    #[test]
    fn reduce_is_idempotent(n in 0u32..10_000_000) {
        let once = reduce(n);
        prop_assert_eq!(reduce(once.get()), once);
    }

    #[test]
    fn reduce_preserves_digit_sum_root_for_non_masters(n in 1u32..10_000_000) {
        let reduced = reduce(n);
        if !reduced.is_master() {
            // Casting out nines: the root of n modulo 9 survives reduction.
            prop_assert_eq!(reduced.get() % 9, n % 9);
        }
    }

    #[test]
    fn digit_sum_never_exceeds_input(n in 0u32..10_000_000) {
        prop_assert!(digit_sum(n) <= n);
    }

    #[test]
    fn every_chart_number_is_legal(
        day in 1u32..=28,
        month in 1u32..=12,
        year in 1900i32..=2025,
        name in "[A-Za-zÀ-ɏḀ-ỿ ]{1,40}",
    ) {
        let as_of = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let birth = format!("{day:02}/{month:02}/{year:04}");
        let Ok(chart) = NumerologyEngine::default().calculate(&name, &birth, as_of) else {
            // Blank or letterless generated names are rejected up front.
            return Ok(());
        };

        let numbers: Vec<NumerologyNumber> = vec![
            chart.destiny,
            chart.motivation,
            chart.inner_self,
            chart.expression,
            chart.merit,
            chart.challenges.d1,
            chart.challenges.d2,
            chart.challenges.d3,
            chart.challenges.dm,
            chart.cycles.c1,
            chart.cycles.c2,
            chart.cycles.c3,
            chart.realizations.r1,
            chart.realizations.r2,
            chart.realizations.r3,
            chart.realizations.r4,
            chart.personal_year,
            chart.personal_month,
            chart.target_personal_year,
        ];
        for number in numbers {
            prop_assert!(is_legal(number.value()));
        }
    }
}
