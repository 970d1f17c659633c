//! Chart assembly.
//!
//! # Responsibility
//! - Validate the raw name/date pair at the boundary.
//! - Run every calculator once and assemble one immutable chart.
//!
//! # Invariants
//! - Validation happens before any reduction; no partial chart is returned.
//! - Same name, birth date, config and reference day always yield an equal
//!   chart.

use crate::engine::challenges::challenges;
use crate::engine::config::{ConfigError, EngineConfig};
use crate::engine::cycles::{cycle_for_age, life_cycles};
use crate::engine::letters::letter_sums;
use crate::engine::personal::{
    current_personal_year, has_personal_year_started, personal_month, personal_year,
};
use crate::engine::realizations::{realization_ages, realizations, RealizationInputs};
use crate::engine::reduce::{digit_sum, reduce, reduce_sum};
use crate::model::birth_date::{BirthDate, DateError};
use crate::model::chart::NumerologyChart;
use crate::model::number::NumerologyNumber;
use crate::model::person_name::{NameError, PersonName};
use chrono::{Datelike, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Chart computation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    InvalidDate(DateError),
    InvalidName(NameError),
    Config(ConfigError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(err) => write!(f, "{err}"),
            Self::InvalidName(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDate(err) => Some(err),
            Self::InvalidName(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<DateError> for ChartError {
    fn from(value: DateError) -> Self {
        Self::InvalidDate(value)
    }
}

impl From<NameError> for ChartError {
    fn from(value: NameError) -> Self {
        Self::InvalidName(value)
    }
}

impl From<ConfigError> for ChartError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Destiny number: every digit of day, month and year summed, then reduced.
pub fn destiny_number(birth: &BirthDate) -> NumerologyNumber {
    reduce(digit_sum(birth.day()) + digit_sum(birth.month()) + digit_sum(birth.year_digits()))
}

/// Stateless chart calculator bound to one validated config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumerologyEngine {
    config: EngineConfig,
}

impl NumerologyEngine {
    /// Creates an engine after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validates raw inputs and computes the chart.
    ///
    /// `birth_date` accepts `DD/MM/YYYY` or `YYYY-MM-DD`. `as_of` is the
    /// reference day for age, current cycle and personal-year window.
    ///
    /// # Errors
    /// - [`ChartError::InvalidDate`] for unparseable, impossible or future
    ///   dates.
    /// - [`ChartError::InvalidName`] for blank or letterless names.
    pub fn calculate(
        &self,
        full_name: &str,
        birth_date: &str,
        as_of: NaiveDate,
    ) -> Result<NumerologyChart, ChartError> {
        let birth = BirthDate::parse(birth_date, as_of)?;
        let name = PersonName::parse(full_name)?;
        self.assemble(&name, &birth, as_of)
    }

    /// Computes the chart from already validated inputs.
    pub fn assemble(
        &self,
        name: &PersonName,
        birth: &BirthDate,
        as_of: NaiveDate,
    ) -> Result<NumerologyChart, ChartError> {
        let sums = letter_sums(name);
        let expression = reduce(sums.all);
        let motivation = reduce(sums.vowels);
        let inner_self = reduce(sums.consonants);
        let destiny = destiny_number(birth);
        let merit = reduce_sum(motivation, destiny);

        let cycles = life_cycles(birth);
        let age = birth.age_on(as_of);
        let current_cycle = cycle_for_age(age, &self.config.cycle_boundaries);

        let realizations = realizations(
            &self.config.realization_table,
            &RealizationInputs {
                destiny,
                motivation,
                inner_self,
                expression,
                cycles,
            },
        )?;
        let realization_ages = realization_ages(
            destiny,
            self.config.first_realization_base,
            self.config.realization_span,
        );

        let personal_year_now = current_personal_year(birth, as_of);

        Ok(NumerologyChart {
            full_name: name.as_str().to_string(),
            birth_date: *birth,
            as_of,
            age,
            destiny,
            motivation,
            inner_self,
            expression,
            merit,
            challenges: challenges(birth),
            cycles,
            current_cycle,
            realizations,
            realization_ages,
            personal_year: personal_year_now,
            personal_year_started: has_personal_year_started(birth, as_of),
            personal_month: personal_month(personal_year_now, as_of.month()),
            target_year: self.config.target_year,
            target_personal_year: personal_year(
                birth.day(),
                birth.month(),
                self.config.target_year,
            ),
        })
    }
}
