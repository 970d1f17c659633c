use chrono::NaiveDate;
use numerology_core::{
    ChartError, ConfigError, CyclePosition, DateError, EngineConfig, NameError,
    NumerologyEngine, RealizationTable,
};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

#[test]
fn mid_year_birth_cycles_follow_month_day_year() {
    let chart = NumerologyEngine::default()
        .calculate("Maria Silva", "15/06/1990", as_of())
        .unwrap();

    assert_eq!(chart.cycles.c1.value(), 6);
    assert_eq!(chart.cycles.c2.value(), 6);
    assert_eq!(chart.cycles.c3.value(), 1);
}

#[test]
fn leap_day_birth_parses_in_both_formats() {
    let engine = NumerologyEngine::default();
    let day_first = engine.calculate("Maria Silva", "29/02/2000", as_of()).unwrap();
    let iso = engine.calculate("Maria Silva", "2000-02-29", as_of()).unwrap();

    assert_eq!(day_first, iso);
    assert_eq!(day_first.birth_date.day(), 29);
    assert_eq!(day_first.birth_date.month(), 2);
    assert_eq!(day_first.birth_date.year(), 2000);
    assert_eq!(day_first.cycles.c1.value(), 2);
}

#[test]
fn target_personal_year_uses_configured_year() {
    let engine = NumerologyEngine::default();
    let chart = engine.calculate("Maria Silva", "15/06/1990", as_of()).unwrap();
    assert_eq!(chart.target_year, 2026);
    assert_eq!(chart.target_personal_year.value(), 4);

    let engine = NumerologyEngine::new(EngineConfig::for_target_year(2027)).unwrap();
    let chart = engine.calculate("Maria Silva", "15/06/1990", as_of()).unwrap();
    // 15 + 6 + 2 + 0 + 2 + 7 = 32 -> 5
    assert_eq!(chart.target_personal_year.value(), 5);
}

#[test]
fn vowel_less_name_falls_back_to_nine() {
    let chart = NumerologyEngine::default()
        .calculate("BRCRFT", "15/06/1990", as_of())
        .unwrap();

    assert_eq!(chart.motivation.value(), 9);
    // 31 -> 4
    assert_eq!(chart.inner_self.value(), 4);
    assert_eq!(chart.expression.value(), 4);
    // 9 + 4 = 13 -> 4
    assert_eq!(chart.merit.value(), 4);
}

#[test]
fn accented_names_match_their_unaccented_form() {
    let engine = NumerologyEngine::default();
    let accented = engine.calculate("José Antônio", "08/03/1985", as_of()).unwrap();
    let plain = engine.calculate("JOSE ANTONIO", "08/03/1985", as_of()).unwrap();

    assert_eq!(accented.expression, plain.expression);
    assert_eq!(accented.motivation, plain.motivation);
    assert_eq!(accented.inner_self, plain.inner_self);
}

#[test]
fn identical_inputs_produce_identical_charts() {
    let engine = NumerologyEngine::default();
    let first = engine.calculate("Ana Souza", "1990-06-15", as_of()).unwrap();
    let second = engine.calculate("Ana Souza", "1990-06-15", as_of()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn current_cycle_follows_age_thresholds() {
    let engine = NumerologyEngine::default();
    let young = engine.calculate("Ana", "18/10/1998", as_of()).unwrap();
    assert_eq!(young.age, 27);
    assert_eq!(young.current_cycle, CyclePosition::First);

    let turning = engine.calculate("Ana", "17/10/1998", as_of()).unwrap();
    assert_eq!(turning.age, 28);
    assert_eq!(turning.current_cycle, CyclePosition::Second);

    let senior = engine.calculate("Ana", "17/10/1970", as_of()).unwrap();
    assert_eq!(senior.age, 56);
    assert_eq!(senior.current_cycle, CyclePosition::Third);
    assert_eq!(senior.current_cycle_number(), senior.cycles.c3);
}

#[test]
fn classic_pinnacle_table_changes_only_realizations() {
    let default_chart = NumerologyEngine::default()
        .calculate("Ana Souza", "15/06/1990", as_of())
        .unwrap();
    let config = EngineConfig {
        realization_table: RealizationTable::CLASSIC_PINNACLES,
        ..EngineConfig::default()
    };
    let classic_chart = NumerologyEngine::new(config)
        .unwrap()
        .calculate("Ana Souza", "15/06/1990", as_of())
        .unwrap();

    assert_eq!(default_chart.destiny, classic_chart.destiny);
    assert_eq!(default_chart.challenges, classic_chart.challenges);
    // month 6 + day 6 = 12 -> 3
    assert_eq!(classic_chart.realizations.r1.value(), 3);
}

#[test]
fn invalid_inputs_return_typed_errors() {
    let engine = NumerologyEngine::default();

    assert!(matches!(
        engine.calculate("Ana", "30/02/1990", as_of()).unwrap_err(),
        ChartError::InvalidDate(DateError::Impossible { .. })
    ));
    assert!(matches!(
        engine.calculate("Ana", "01/01/2030", as_of()).unwrap_err(),
        ChartError::InvalidDate(DateError::InFuture { .. })
    ));
    assert!(matches!(
        engine.calculate("Ana", "1990/06/15", as_of()).unwrap_err(),
        ChartError::InvalidDate(DateError::Unrecognized(_))
    ));
    assert_eq!(
        engine.calculate("42", "15/06/1990", as_of()).unwrap_err(),
        ChartError::InvalidName(NameError::NoLetters)
    );
}

#[test]
fn chart_serializes_with_published_field_names() {
    let chart = NumerologyEngine::default()
        .calculate("Ana Souza", "15/06/1990", as_of())
        .unwrap();
    let json = serde_json::to_value(&chart).unwrap();

    assert_eq!(json["cd"], 4);
    assert_eq!(json["mo"], 3);
    assert_eq!(json["eu"], 5);
    assert_eq!(json["ex"], 8);
    assert_eq!(json["merito"], 7);
    assert_eq!(json["ciclos"]["c1"], 6);
    assert_eq!(json["desafios"]["dm"], 4);
    assert!(json["realizacoes"]["r4"].is_number());
    assert_eq!(json["birth_date"], "1990-06-15");
    assert_eq!(json["current_cycle"], "second");

    let decoded: numerology_core::NumerologyChart = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, chart);
}

#[test]
fn accented_names_outside_latin_1_match_their_plain_spelling() {
    let engine = NumerologyEngine::default();
    for (accented, plain) in [
        ("Nguyễn Văn Đặng", "Nguyen Van Dang"),
        ("Ḿaria Ǎna", "Maria Ana"),
    ] {
        let left = engine.calculate(accented, "15/06/1990", as_of()).unwrap();
        let right = engine.calculate(plain, "15/06/1990", as_of()).unwrap();
        assert_eq!(left.expression, right.expression, "{accented}");
        assert_eq!(left.motivation, right.motivation, "{accented}");
        assert_eq!(left.inner_self, right.inner_self, "{accented}");
    }
}

#[test]
fn engine_rejects_configs_it_cannot_evaluate() {
    let mut overflowing = EngineConfig::default();
    overflowing.realization_span = u32::MAX;
    assert!(matches!(
        NumerologyEngine::new(overflowing),
        Err(ConfigError::RealizationAgeOverflow { .. })
    ));

    assert_eq!(
        NumerologyEngine::new(EngineConfig::for_target_year(-2026)),
        Err(ConfigError::InvalidTargetYear(-2026))
    );
}
