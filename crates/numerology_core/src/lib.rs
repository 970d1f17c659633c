//! Core domain logic for Pythagorean numerology charts.
//! This crate is the single source of truth for chart numbers; UI, e-book
//! and history consumers read a computed `NumerologyChart` instead of
//! recomputing sub-numbers.

pub mod db;
pub mod engine;
pub mod interpretation;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use engine::{
    compare_charts, reduce, ChartComparison, ChartError, ConfigError, CycleBoundaries,
    EngineConfig, NumerologyEngine, RealizationTable,
};
pub use interpretation::{interpret, meaning, NumberMeaning, PositionReading};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::birth_date::{BirthDate, DateError};
pub use model::chart::{
    ChartPosition, Challenges, CyclePosition, LifeCycles, NumerologyChart, RealizationAges,
    RealizationPosition, Realizations,
};
pub use model::number::NumerologyNumber;
pub use model::person_name::{NameError, PersonName};
pub use repo::chart_repo::{
    ChartEntry, ChartId, ChartListQuery, ChartRecord, ChartRepository, RepoError, RepoResult,
    SqliteChartRepository,
};
pub use service::chart_service::{
    ChartListResult, ChartRequest, ChartService, ChartServiceError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
