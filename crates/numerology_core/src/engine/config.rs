//! Engine configuration.
//!
//! # Responsibility
//! - Hold the methodology parameters that are not fixed by the letter table:
//!   forecast year, cycle boundary ages, realization formulas and spans.
//! - Load and validate those parameters from JSON.
//!
//! # Invariants
//! - A validated config has `0 < first_end < second_end` cycle boundaries.
//! - A validated realization table never references a realization that has
//!   not been computed yet.
//! - A validated config has `target_year >= 1` and realization ages that fit
//!   in `u32`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Forecast year used when callers do not override it.
pub const DEFAULT_TARGET_YEAR: i32 = 2026;
/// First cycle ends at this age (exclusive).
pub const FIRST_CYCLE_END_AGE: u32 = 28;
/// Second cycle ends at this age (exclusive).
pub const SECOND_CYCLE_END_AGE: u32 = 56;
/// Second-cycle end used by the annual-cycle view. Diverges from
/// [`SECOND_CYCLE_END_AGE`]; not used unless configured explicitly.
pub const ANNUAL_VIEW_SECOND_CYCLE_END_AGE: u32 = 55;
/// First realization ends at `base - root(destiny)`.
pub const DEFAULT_FIRST_REALIZATION_BASE: u32 = 36;
pub const DEFAULT_REALIZATION_SPAN: u32 = 9;

/// Configuration validation or decoding failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// JSON input could not be decoded.
    Parse(String),
    InvalidCycleBoundaries { first_end: u32, second_end: u32 },
    /// Realization `slot` (1-based) reads a realization computed after it.
    ForwardRealizationReference {
        slot: u8,
        operand: RealizationOperand,
    },
    InvalidRealizationSpan(u32),
    /// Base leaves no room for the first realization of a destiny-9 chart.
    InvalidRealizationBase(u32),
    /// `base + 2 * span` does not fit in an age.
    RealizationAgeOverflow { base: u32, span: u32 },
    /// Forecast years before 1 have no digit sum.
    InvalidTargetYear(i32),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid engine config: {message}"),
            Self::InvalidCycleBoundaries {
                first_end,
                second_end,
            } => write!(
                f,
                "cycle boundaries must satisfy 0 < first_end < second_end, got {first_end}/{second_end}"
            ),
            Self::ForwardRealizationReference { slot, operand } => write!(
                f,
                "realization r{slot} references `{}` before it is computed",
                operand.as_str()
            ),
            Self::InvalidRealizationSpan(span) => {
                write!(f, "realization span must be positive, got {span}")
            }
            Self::InvalidRealizationBase(base) => {
                write!(f, "first realization base must exceed 9, got {base}")
            }
            Self::RealizationAgeOverflow { base, span } => write!(
                f,
                "realization ages overflow with base {base} and span {span}"
            ),
            Self::InvalidTargetYear(year) => {
                write!(f, "target year must be at least 1, got {year}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Age thresholds splitting life into three cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleBoundaries {
    pub first_end: u32,
    pub second_end: u32,
}

impl CycleBoundaries {
    /// Authoritative boundaries: C1 below 28, C2 below 56, C3 after.
    pub const CANONICAL: Self = Self {
        first_end: FIRST_CYCLE_END_AGE,
        second_end: SECOND_CYCLE_END_AGE,
    };

    /// Boundaries of the annual-cycle view (C3 from 55).
    pub const ANNUAL_VIEW: Self = Self {
        first_end: FIRST_CYCLE_END_AGE,
        second_end: ANNUAL_VIEW_SECOND_CYCLE_END_AGE,
    };

    fn validate(&self) -> Result<(), ConfigError> {
        if self.first_end == 0 || self.first_end >= self.second_end {
            return Err(ConfigError::InvalidCycleBoundaries {
                first_end: self.first_end,
                second_end: self.second_end,
            });
        }
        Ok(())
    }
}

impl Default for CycleBoundaries {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Chart value a realization formula can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RealizationOperand {
    Destiny,
    Motivation,
    InnerSelf,
    Expression,
    Cycle1,
    Cycle2,
    Cycle3,
    Realization1,
    Realization2,
    Realization3,
}

impl RealizationOperand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Destiny => "destiny",
            Self::Motivation => "motivation",
            Self::InnerSelf => "inner_self",
            Self::Expression => "expression",
            Self::Cycle1 => "cycle1",
            Self::Cycle2 => "cycle2",
            Self::Cycle3 => "cycle3",
            Self::Realization1 => "realization1",
            Self::Realization2 => "realization2",
            Self::Realization3 => "realization3",
        }
    }

    /// 1-based realization slot this operand reads, if any.
    pub(crate) fn realization_slot(self) -> Option<u8> {
        match self {
            Self::Realization1 => Some(1),
            Self::Realization2 => Some(2),
            Self::Realization3 => Some(3),
            _ => None,
        }
    }
}

/// `reduce(left + right)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealizationFormula {
    pub left: RealizationOperand,
    pub right: RealizationOperand,
}

impl RealizationFormula {
    pub const fn new(left: RealizationOperand, right: RealizationOperand) -> Self {
        Self { left, right }
    }
}

/// Formulas for the four realizations, evaluated in order r1..r4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealizationTable {
    pub r1: RealizationFormula,
    pub r2: RealizationFormula,
    pub r3: RealizationFormula,
    pub r4: RealizationFormula,
}

impl RealizationTable {
    /// Default table: r1 = mo+c1, r2 = c1+c2, r3 = c2+c3, r4 = cd+c3.
    pub const METHODOLOGY: Self = Self {
        r1: RealizationFormula::new(RealizationOperand::Motivation, RealizationOperand::Cycle1),
        r2: RealizationFormula::new(RealizationOperand::Cycle1, RealizationOperand::Cycle2),
        r3: RealizationFormula::new(RealizationOperand::Cycle2, RealizationOperand::Cycle3),
        r4: RealizationFormula::new(RealizationOperand::Destiny, RealizationOperand::Cycle3),
    };

    /// Pinnacle layout: month+day, day+year, r1+r2, month+year.
    pub const CLASSIC_PINNACLES: Self = Self {
        r1: RealizationFormula::new(RealizationOperand::Cycle1, RealizationOperand::Cycle2),
        r2: RealizationFormula::new(RealizationOperand::Cycle2, RealizationOperand::Cycle3),
        r3: RealizationFormula::new(
            RealizationOperand::Realization1,
            RealizationOperand::Realization2,
        ),
        r4: RealizationFormula::new(RealizationOperand::Cycle1, RealizationOperand::Cycle3),
    };

    pub fn formulas(&self) -> [RealizationFormula; 4] {
        [self.r1, self.r2, self.r3, self.r4]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (index, formula) in self.formulas().iter().enumerate() {
            let slot = (index + 1) as u8;
            for operand in [formula.left, formula.right] {
                if operand
                    .realization_slot()
                    .is_some_and(|referenced| referenced >= slot)
                {
                    return Err(ConfigError::ForwardRealizationReference { slot, operand });
                }
            }
        }
        Ok(())
    }
}

impl Default for RealizationTable {
    fn default() -> Self {
        Self::METHODOLOGY
    }
}

/// Parameters of one engine instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Year the target personal-year forecast is computed for.
    pub target_year: i32,
    pub cycle_boundaries: CycleBoundaries,
    pub realization_table: RealizationTable,
    pub first_realization_base: u32,
    pub realization_span: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_year: DEFAULT_TARGET_YEAR,
            cycle_boundaries: CycleBoundaries::CANONICAL,
            realization_table: RealizationTable::METHODOLOGY,
            first_realization_base: DEFAULT_FIRST_REALIZATION_BASE,
            realization_span: DEFAULT_REALIZATION_SPAN,
        }
    }
}

impl EngineConfig {
    /// Default parameters with a different forecast year.
    pub fn for_target_year(target_year: i32) -> Self {
        Self {
            target_year,
            ..Self::default()
        }
    }

    /// Decodes a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    /// - [`ConfigError::Parse`] on malformed JSON.
    /// - Any validation error from [`EngineConfig::validate`].
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(input).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_year < 1 {
            return Err(ConfigError::InvalidTargetYear(self.target_year));
        }
        self.cycle_boundaries.validate()?;
        self.realization_table.validate()?;
        if self.realization_span == 0 {
            return Err(ConfigError::InvalidRealizationSpan(self.realization_span));
        }
        if self.first_realization_base <= 9 {
            return Err(ConfigError::InvalidRealizationBase(
                self.first_realization_base,
            ));
        }
        self.realization_span
            .checked_mul(2)
            .and_then(|spans| spans.checked_add(self.first_realization_base))
            .ok_or(ConfigError::RealizationAgeOverflow {
                base: self.first_realization_base,
                span: self.realization_span,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ConfigError, CycleBoundaries, EngineConfig, RealizationFormula, RealizationOperand,
        RealizationTable,
    };

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        config.validate().unwrap();
        assert_eq!(config.target_year, 2026);
        assert_eq!(config.cycle_boundaries, CycleBoundaries::CANONICAL);
    }

    #[test]
    fn canonical_boundaries_are_pinned() {
        assert_eq!(CycleBoundaries::CANONICAL.first_end, 28);
        assert_eq!(CycleBoundaries::CANONICAL.second_end, 56);
        assert_eq!(CycleBoundaries::ANNUAL_VIEW.second_end, 55);
    }

    #[test]
    fn from_json_fills_missing_fields_with_defaults() {
        let config = EngineConfig::from_json_str(r#"{"target_year": 2030}"#).unwrap();
        assert_eq!(config.target_year, 2030);
        assert_eq!(config.realization_table, RealizationTable::METHODOLOGY);
    }

    #[test]
    fn from_json_reads_named_operands() {
        let config = EngineConfig::from_json_str(
            r#"{"realization_table": {
                "r1": {"left": "cycle1", "right": "cycle2"},
                "r2": {"left": "cycle2", "right": "cycle3"},
                "r3": {"left": "realization1", "right": "realization2"},
                "r4": {"left": "cycle1", "right": "cycle3"}
            }}"#,
        )
        .unwrap();
        assert_eq!(config.realization_table, RealizationTable::CLASSIC_PINNACLES);
    }

    #[test]
    fn rejects_realization_ages_that_overflow() {
        let err = EngineConfig::from_json_str(r#"{"realization_span": 4294967295}"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::RealizationAgeOverflow {
                base: 36,
                span: u32::MAX,
            }
        );

        let err = EngineConfig::from_json_str(r#"{"first_realization_base": 4294967295}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::RealizationAgeOverflow { .. }));
    }

    #[test]
    fn rejects_target_years_before_one() {
        for year in [-2026, 0] {
            let err = EngineConfig::for_target_year(year).validate().unwrap_err();
            assert_eq!(err, ConfigError::InvalidTargetYear(year));
        }
        let err = EngineConfig::from_json_str(r#"{"target_year": -2026}"#).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTargetYear(-2026));
        EngineConfig::for_target_year(1).validate().unwrap();
    }

    #[test]
    fn rejects_forward_realization_reference() {
        let mut config = EngineConfig::default();
        config.realization_table.r2 = RealizationFormula::new(
            RealizationOperand::Realization2,
            RealizationOperand::Cycle1,
        );
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::ForwardRealizationReference {
                slot: 2,
                operand: RealizationOperand::Realization2,
            }
        );
    }

    #[test]
    fn rejects_inverted_boundaries_and_bad_json() {
        let err = EngineConfig::from_json_str(
            r#"{"cycle_boundaries": {"first_end": 56, "second_end": 28}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCycleBoundaries { .. }));

        let err = EngineConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
