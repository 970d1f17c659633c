//! Chart use-case service.
//!
//! # Responsibility
//! - Compute a chart once per request and hand it out as an immutable value.
//! - Persist, list, delete and compare saved charts through a repository.
//!
//! # Invariants
//! - Storage is only touched after the chart computed successfully.
//! - Log events carry metadata only; names and birth dates are never logged.

use crate::engine::chart::{ChartError, NumerologyEngine};
use crate::engine::compare::{compare_charts, ChartComparison};
use crate::model::chart::NumerologyChart;
use crate::repo::chart_repo::{
    normalize_chart_limit, ChartEntry, ChartId, ChartListQuery, ChartRecord, ChartRepository,
    RepoError,
};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Service error for chart use-cases.
#[derive(Debug)]
pub enum ChartServiceError {
    /// Input validation or config failure; nothing was stored.
    Chart(ChartError),
    ChartNotFound(ChartId),
    Repo(RepoError),
    /// Write succeeded but read-back did not return the row.
    InconsistentState(&'static str),
}

impl Display for ChartServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(err) => write!(f, "{err}"),
            Self::ChartNotFound(id) => write!(f, "chart not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent chart state: {details}"),
        }
    }
}

impl Error for ChartServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ChartError> for ChartServiceError {
    fn from(value: ChartError) -> Self {
        Self::Chart(value)
    }
}

impl From<RepoError> for ChartServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::ChartNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Raw request as received from a form or command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub full_name: String,
    /// `DD/MM/YYYY` or `YYYY-MM-DD`.
    pub birth_date: String,
    /// Reference day; callers pass today's date in production.
    pub as_of: NaiveDate,
    pub label: Option<String>,
}

/// History page plus the limit actually applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartListResult {
    pub items: Vec<ChartRecord>,
    pub applied_limit: u32,
}

/// Chart service facade over an engine and a repository implementation.
pub struct ChartService<R: ChartRepository> {
    engine: NumerologyEngine,
    repo: R,
}

impl<R: ChartRepository> ChartService<R> {
    pub fn new(engine: NumerologyEngine, repo: R) -> Self {
        Self { engine, repo }
    }

    pub fn engine(&self) -> &NumerologyEngine {
        &self.engine
    }

    /// Computes a chart without storing it.
    pub fn calculate(&self, request: &ChartRequest) -> Result<NumerologyChart, ChartServiceError> {
        let started_at = Instant::now();
        match self.engine.calculate(
            request.full_name.as_str(),
            request.birth_date.as_str(),
            request.as_of,
        ) {
            Ok(chart) => {
                info!(
                    "event=chart_calculate module=service status=ok duration_us={} target_year={}",
                    started_at.elapsed().as_micros(),
                    chart.target_year
                );
                Ok(chart)
            }
            Err(err) => {
                warn!(
                    "event=chart_calculate module=service status=error error_code={}",
                    chart_error_code(&err)
                );
                Err(err.into())
            }
        }
    }

    /// Computes a chart and stores it under a new id.
    pub fn calculate_and_store(
        &self,
        request: &ChartRequest,
    ) -> Result<ChartRecord, ChartServiceError> {
        let chart = self.calculate(request)?;
        let mut entry = ChartEntry::new(chart);
        entry.label = request.label.clone();

        let id = self.repo.put_chart(&entry)?;
        info!("event=chart_store module=service status=ok chart_id={id}");
        self.repo
            .get_chart(id)?
            .ok_or(ChartServiceError::InconsistentState(
                "stored chart not found in read-back",
            ))
    }

    /// Re-labels a stored chart without recomputing it.
    pub fn relabel_chart(
        &self,
        id: ChartId,
        label: Option<String>,
    ) -> Result<ChartRecord, ChartServiceError> {
        let record = self.require_chart(id)?;
        let entry = ChartEntry {
            id,
            label,
            chart: record.chart,
        };
        self.repo.put_chart(&entry)?;
        self.require_chart(id)
    }

    pub fn get_chart(&self, id: ChartId) -> Result<Option<ChartRecord>, ChartServiceError> {
        Ok(self.repo.get_chart(id)?)
    }

    /// Lists history, newest first.
    pub fn list_charts(
        &self,
        query: &ChartListQuery,
    ) -> Result<ChartListResult, ChartServiceError> {
        let applied_limit = normalize_chart_limit(query.limit);
        let normalized = ChartListQuery {
            limit: Some(applied_limit),
            ..query.clone()
        };
        let items = self.repo.list_charts(&normalized)?;
        Ok(ChartListResult {
            items,
            applied_limit,
        })
    }

    pub fn delete_chart(&self, id: ChartId) -> Result<(), ChartServiceError> {
        self.repo.delete_chart(id)?;
        info!("event=chart_delete module=service status=ok chart_id={id}");
        Ok(())
    }

    /// Compares two stored charts slot by slot.
    pub fn compare(
        &self,
        left: ChartId,
        right: ChartId,
    ) -> Result<ChartComparison, ChartServiceError> {
        let left_record = self.require_chart(left)?;
        let right_record = self.require_chart(right)?;
        Ok(compare_charts(&left_record.chart, &right_record.chart))
    }

    fn require_chart(&self, id: ChartId) -> Result<ChartRecord, ChartServiceError> {
        self.repo
            .get_chart(id)?
            .ok_or(ChartServiceError::ChartNotFound(id))
    }
}

fn chart_error_code(err: &ChartError) -> &'static str {
    match err {
        ChartError::InvalidDate(_) => "invalid_date",
        ChartError::InvalidName(_) => "invalid_name",
        ChartError::Config(_) => "invalid_config",
    }
}
