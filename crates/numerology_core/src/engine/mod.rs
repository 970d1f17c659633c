//! Numerology calculation engine.
//!
//! # Responsibility
//! - Pure derivation of every chart number from a name and a birth date.
//! - Hold the methodology parameters in one validated [`EngineConfig`].
//!
//! # Invariants
//! - No I/O, no shared mutable state; every function is deterministic.
//! - Each sub-number has exactly one implementation here; consumers read
//!   chart fields instead of recomputing.

pub mod challenges;
pub mod chart;
pub mod compare;
pub mod config;
pub mod cycles;
pub mod letters;
pub mod personal;
pub mod realizations;
pub mod reduce;

pub use chart::{destiny_number, ChartError, NumerologyEngine};
pub use compare::{compare_charts, ChartComparison, PositionComparison};
pub use config::{
    ConfigError, CycleBoundaries, EngineConfig, RealizationFormula, RealizationOperand,
    RealizationTable,
};
pub use reduce::{digit_sum, reduce};
