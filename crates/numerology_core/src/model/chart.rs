//! Numerology chart value object.
//!
//! # Responsibility
//! - Hold every derived number of one chart computation.
//! - Give consumers field access so nothing downstream recomputes
//!   sub-numbers from the raw birth date.
//!
//! # Invariants
//! - A chart is immutable once assembled; recomputation builds a new value.
//! - Every numerology field is a [`NumerologyNumber`].
//!
//! # Wire shape
//! Serialized field names follow the published chart schema (`cd`, `mo`,
//! `eu`, `ex`, `merito`, `desafios`, `ciclos`, `realizacoes`, ...).

use crate::model::birth_date::BirthDate;
use crate::model::number::NumerologyNumber;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Challenge numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenges {
    /// First challenge: reduced day against reduced month.
    pub d1: NumerologyNumber,
    /// Second challenge: reduced month against reduced year.
    pub d2: NumerologyNumber,
    /// Reduced day against reduced year.
    pub d3: NumerologyNumber,
    /// Biggest challenge, from the already reduced `d1` and `d2`.
    pub dm: NumerologyNumber,
}

/// Three life phases keyed by month, day and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeCycles {
    /// Formative cycle (birth month).
    pub c1: NumerologyNumber,
    /// Productive cycle (birth day).
    pub c2: NumerologyNumber,
    /// Harvest cycle (birth year).
    pub c3: NumerologyNumber,
}

impl LifeCycles {
    pub fn get(&self, position: CyclePosition) -> NumerologyNumber {
        match position {
            CyclePosition::First => self.c1,
            CyclePosition::Second => self.c2,
            CyclePosition::Third => self.c3,
        }
    }
}

/// Which life cycle an age falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePosition {
    First,
    Second,
    Third,
}

/// Four sequential realization numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realizations {
    pub r1: NumerologyNumber,
    pub r2: NumerologyNumber,
    pub r3: NumerologyNumber,
    pub r4: NumerologyNumber,
}

impl Realizations {
    pub fn get(&self, position: RealizationPosition) -> NumerologyNumber {
        match position {
            RealizationPosition::First => self.r1,
            RealizationPosition::Second => self.r2,
            RealizationPosition::Third => self.r3,
            RealizationPosition::Fourth => self.r4,
        }
    }
}

/// Which realization period an age falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RealizationPosition {
    First,
    Second,
    Third,
    Fourth,
}

/// Ages (exclusive) at which the first three realizations end.
///
/// The fourth realization is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealizationAges {
    pub first_end: u32,
    pub second_end: u32,
    pub third_end: u32,
}

impl RealizationAges {
    pub fn position_for_age(&self, age: u32) -> RealizationPosition {
        if age < self.first_end {
            RealizationPosition::First
        } else if age < self.second_end {
            RealizationPosition::Second
        } else if age < self.third_end {
            RealizationPosition::Third
        } else {
            RealizationPosition::Fourth
        }
    }
}

/// Named slot of a chart, used by interpretation and comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartPosition {
    Destiny,
    Motivation,
    InnerSelf,
    Expression,
    Merit,
    Challenge1,
    Challenge2,
    Challenge3,
    BiggestChallenge,
    Cycle1,
    Cycle2,
    Cycle3,
    Realization1,
    Realization2,
    Realization3,
    Realization4,
    PersonalYear,
    PersonalMonth,
}

impl ChartPosition {
    /// Every slot in display order.
    pub const ALL: [ChartPosition; 18] = [
        Self::Destiny,
        Self::Motivation,
        Self::InnerSelf,
        Self::Expression,
        Self::Merit,
        Self::Challenge1,
        Self::Challenge2,
        Self::Challenge3,
        Self::BiggestChallenge,
        Self::Cycle1,
        Self::Cycle2,
        Self::Cycle3,
        Self::Realization1,
        Self::Realization2,
        Self::Realization3,
        Self::Realization4,
        Self::PersonalYear,
        Self::PersonalMonth,
    ];
}

/// Complete numerology chart for one person on one reference day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyChart {
    /// Whitespace-normalized name the letter numbers derive from.
    pub full_name: String,
    pub birth_date: BirthDate,
    /// Reference day for age and personal-year anchoring.
    pub as_of: NaiveDate,
    /// Completed years on `as_of`.
    pub age: u32,

    #[serde(rename = "cd")]
    pub destiny: NumerologyNumber,
    #[serde(rename = "mo")]
    pub motivation: NumerologyNumber,
    #[serde(rename = "eu")]
    pub inner_self: NumerologyNumber,
    #[serde(rename = "ex")]
    pub expression: NumerologyNumber,
    #[serde(rename = "merito")]
    pub merit: NumerologyNumber,

    #[serde(rename = "desafios")]
    pub challenges: Challenges,
    #[serde(rename = "ciclos")]
    pub cycles: LifeCycles,
    pub current_cycle: CyclePosition,
    #[serde(rename = "realizacoes")]
    pub realizations: Realizations,
    pub realization_ages: RealizationAges,

    /// Personal year of the window containing `as_of`.
    pub personal_year: NumerologyNumber,
    /// Whether the birthday has already occurred in `as_of`'s year.
    pub personal_year_started: bool,
    /// `personal_year` combined with `as_of`'s month.
    pub personal_month: NumerologyNumber,
    /// Configured forecast year.
    pub target_year: i32,
    pub target_personal_year: NumerologyNumber,
}

impl NumerologyChart {
    /// Number stored in one slot.
    pub fn number_at(&self, position: ChartPosition) -> NumerologyNumber {
        match position {
            ChartPosition::Destiny => self.destiny,
            ChartPosition::Motivation => self.motivation,
            ChartPosition::InnerSelf => self.inner_self,
            ChartPosition::Expression => self.expression,
            ChartPosition::Merit => self.merit,
            ChartPosition::Challenge1 => self.challenges.d1,
            ChartPosition::Challenge2 => self.challenges.d2,
            ChartPosition::Challenge3 => self.challenges.d3,
            ChartPosition::BiggestChallenge => self.challenges.dm,
            ChartPosition::Cycle1 => self.cycles.c1,
            ChartPosition::Cycle2 => self.cycles.c2,
            ChartPosition::Cycle3 => self.cycles.c3,
            ChartPosition::Realization1 => self.realizations.r1,
            ChartPosition::Realization2 => self.realizations.r2,
            ChartPosition::Realization3 => self.realizations.r3,
            ChartPosition::Realization4 => self.realizations.r4,
            ChartPosition::PersonalYear => self.personal_year,
            ChartPosition::PersonalMonth => self.personal_month,
        }
    }

    /// Number of the cycle `age` falls into.
    pub fn current_cycle_number(&self) -> NumerologyNumber {
        self.cycles.get(self.current_cycle)
    }

    pub fn current_realization(&self) -> RealizationPosition {
        self.realization_ages.position_for_age(self.age)
    }
}
