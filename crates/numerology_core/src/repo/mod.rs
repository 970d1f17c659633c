//! Repository layer for saved charts.
//!
//! # Responsibility
//! - Define the storage capability (`get/put/delete/list`) services depend on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod chart_repo;
