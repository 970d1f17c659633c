//! Domain model for numerology charts.
//!
//! # Responsibility
//! - Define validated inputs (`BirthDate`, `PersonName`) built at the boundary.
//! - Define the `NumerologyChart` value object handed to every consumer.
//!
//! # Invariants
//! - Invalid dates and names never reach the engine; they fail construction.
//! - Every reduced value is carried as a `NumerologyNumber`.

pub mod birth_date;
pub mod chart;
pub mod number;
pub mod person_name;
