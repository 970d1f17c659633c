//! Chart store migration registry and executor.
//!
//! # Invariants
//! - `version` values are strictly increasing.
//! - All pending migrations run in one transaction; `PRAGMA user_version`
//!   mirrors the last applied one.

use crate::db::{DbError, DbResult};
use crate::model::person_name::search_key;
use log::debug;
use rusqlite::{params, Connection};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
    /// Row rewrite that SQL alone cannot express; runs after `sql`.
    backfill: Option<fn(&Connection) -> DbResult<()>>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: include_str!("0001_charts.sql"),
        backfill: None,
    },
    Migration {
        version: 2,
        sql: include_str!("0002_chart_labels.sql"),
        backfill: None,
    },
    Migration {
        version: 3,
        sql: include_str!("0003_chart_search_name.sql"),
        backfill: Some(backfill_chart_search_names),
    },
];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        tx.execute_batch(migration.sql)?;
        if let Some(backfill) = migration.backfill {
            backfill(&tx)?;
        }
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
        debug!(
            "event=db_migrate module=db status=ok version={}",
            migration.version
        );
    }
    tx.commit()?;

    Ok(())
}

/// Folded names are computed in Rust; SQLite `lower()` is ASCII-only.
fn backfill_chart_search_names(conn: &Connection) -> DbResult<()> {
    let mut select = conn.prepare("SELECT id, full_name FROM charts;")?;
    let rows = select
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut update = conn.prepare("UPDATE charts SET search_name = ?1 WHERE id = ?2;")?;
    for (id, full_name) in rows {
        update.execute(params![search_key(&full_name), id])?;
    }
    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
