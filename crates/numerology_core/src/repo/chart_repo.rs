//! Chart history repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist computed charts so history and comparison views read stored
//!   values instead of recomputing them.
//! - Keep SQL details behind the [`ChartRepository`] trait.
//!
//! # Invariants
//! - `put_chart` is an upsert keyed by `ChartId`; `created_at` survives
//!   updates.
//! - Read paths reject undecodable persisted charts instead of masking them.
//! - `search_name` is always `search_key(full_name)`; name filters compare
//!   folded text on both sides.

use crate::db::DbError;
use crate::model::chart::NumerologyChart;
use crate::model::person_name::search_key;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const CHARTS_DEFAULT_LIMIT: u32 = 20;
const CHARTS_LIMIT_MAX: u32 = 100;

const CHART_SELECT_SQL: &str = "SELECT
    id,
    label,
    chart_json,
    created_at,
    updated_at
FROM charts";

/// Stable identifier of a saved chart.
pub type ChartId = Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for chart persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(ChartId),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "chart not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted chart data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection is not migrated: missing table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "connection is not migrated: missing column `{table}.{column}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Chart plus the caller-facing metadata written by `put_chart`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    pub id: ChartId,
    /// Free-text tag such as "cliente" or "parceiro".
    pub label: Option<String>,
    pub chart: NumerologyChart,
}

impl ChartEntry {
    /// Wraps `chart` under a freshly generated id.
    pub fn new(chart: NumerologyChart) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: None,
            chart,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Stored chart as read back from the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub id: ChartId,
    pub label: Option<String>,
    pub chart: NumerologyChart,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds.
    pub updated_at: i64,
}

/// Query options for chart history listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartListQuery {
    /// Substring match on the stored full name, ignoring case and accents.
    pub name_contains: Option<String>,
    /// Defaults to 20, clamped to 100.
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Storage capability for chart history.
pub trait ChartRepository {
    /// Inserts or replaces one chart; returns its id.
    fn put_chart(&self, entry: &ChartEntry) -> RepoResult<ChartId>;
    fn get_chart(&self, id: ChartId) -> RepoResult<Option<ChartRecord>>;
    /// Removes one chart; `NotFound` when the id is unknown.
    fn delete_chart(&self, id: ChartId) -> RepoResult<()>;
    /// Newest first, ties broken by id.
    fn list_charts(&self, query: &ChartListQuery) -> RepoResult<Vec<ChartRecord>>;
}

/// SQLite-backed chart repository.
pub struct SqliteChartRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteChartRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    ///
    /// # Errors
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the
    ///   connection was not migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_chart_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ChartRepository for SqliteChartRepository<'_> {
    fn put_chart(&self, entry: &ChartEntry) -> RepoResult<ChartId> {
        let chart_json = serde_json::to_string(&entry.chart)
            .map_err(|err| RepoError::InvalidData(format!("chart serialization failed: {err}")))?;

        self.conn.execute(
            "INSERT INTO charts (
                id,
                label,
                full_name,
                search_name,
                birth_date,
                as_of,
                target_year,
                chart_json
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(id) DO UPDATE SET
                label = excluded.label,
                full_name = excluded.full_name,
                search_name = excluded.search_name,
                birth_date = excluded.birth_date,
                as_of = excluded.as_of,
                target_year = excluded.target_year,
                chart_json = excluded.chart_json,
                updated_at = (CAST(strftime('%s', 'now') AS INTEGER) * 1000);",
            params![
                entry.id.to_string(),
                entry.label.as_deref(),
                entry.chart.full_name.as_str(),
                search_key(&entry.chart.full_name),
                entry.chart.birth_date.date().to_string(),
                entry.chart.as_of.to_string(),
                entry.chart.target_year,
                chart_json,
            ],
        )?;

        Ok(entry.id)
    }

    fn get_chart(&self, id: ChartId) -> RepoResult<Option<ChartRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CHART_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_chart_row(row)?));
        }
        Ok(None)
    }

    fn delete_chart(&self, id: ChartId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM charts WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn list_charts(&self, query: &ChartListQuery) -> RepoResult<Vec<ChartRecord>> {
        let mut sql = format!("{CHART_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(needle) = query
            .name_contains
            .as_deref()
            .map(search_key)
            .filter(|value| !value.is_empty())
        {
            sql.push_str(" AND instr(search_name, ?) > 0");
            bind_values.push(Value::Text(needle));
        }

        sql.push_str(" ORDER BY created_at DESC, id ASC LIMIT ?");
        bind_values.push(Value::Integer(i64::from(normalize_chart_limit(
            query.limit,
        ))));
        if query.offset > 0 {
            sql.push_str(" OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_chart_row(row)?);
        }
        Ok(records)
    }
}

/// Normalizes a list limit according to the history contract.
pub fn normalize_chart_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) | None => CHARTS_DEFAULT_LIMIT,
        Some(value) if value > CHARTS_LIMIT_MAX => CHARTS_LIMIT_MAX,
        Some(value) => value,
    }
}

fn parse_chart_row(row: &Row<'_>) -> RepoResult<ChartRecord> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid `{id_text}` in charts.id")))?;

    let chart_json: String = row.get("chart_json")?;
    let chart: NumerologyChart = serde_json::from_str(&chart_json).map_err(|err| {
        RepoError::InvalidData(format!("undecodable charts.chart_json for {id}: {err}"))
    })?;

    Ok(ChartRecord {
        id,
        label: row.get("label")?,
        chart,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn ensure_chart_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "charts")? {
        return Err(RepoError::MissingRequiredTable("charts"));
    }
    for column in [
        "id",
        "label",
        "search_name",
        "chart_json",
        "created_at",
        "updated_at",
    ] {
        if !table_has_column(conn, "charts", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "charts",
                column,
            });
        }
    }
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
