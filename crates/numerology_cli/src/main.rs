//! CLI entry point over `numerology_core`.
//!
//! # Responsibility
//! - Provide a small executable to compute and inspect charts locally.
//! - Print charts as JSON so output can be diffed or piped.
//!
//! # Invariants
//! - Without `--as-of` the reference day is today's local date.
//! - Charts are stored only with `--db --save`.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::info;
use numerology_core::db::open_db;
use numerology_core::engine::config::DEFAULT_TARGET_YEAR;
use numerology_core::{
    init_logging, interpret, ChartListQuery, ChartRequest, ChartService, CycleBoundaries,
    EngineConfig, NumerologyEngine, RealizationTable, SqliteChartRepository,
};
use serde_json::json;
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "numerology", about = "Pythagorean numerology chart CLI")]
struct Cli {
    /// Directory for rolling log files (absolute or relative to cwd)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check core crate wiring
    Ping,
    /// Compute a chart and print it as JSON
    Chart {
        /// Full name as written on the birth certificate
        #[arg(long)]
        name: String,
        /// DD/MM/YYYY or YYYY-MM-DD
        #[arg(long)]
        birth_date: String,
        /// Year used for the target personal year
        #[arg(long, default_value_t = DEFAULT_TARGET_YEAR)]
        target_year: i32,
        /// Reference day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
        /// Use the 28/55 cycle boundaries of the annual view
        #[arg(long)]
        annual_view: bool,
        /// Use the classic pinnacle formulas for realizations
        #[arg(long)]
        classic_pinnacles: bool,
        /// Engine config JSON file; overrides the flags above
        #[arg(long)]
        config: Option<PathBuf>,
        /// Include per-position meanings
        #[arg(long)]
        interpret: bool,
        /// SQLite history file; only used together with `--save`
        #[arg(long, requires = "save")]
        db: Option<PathBuf>,
        /// Store the chart in `--db`
        #[arg(long, requires = "db")]
        save: bool,
        /// Label stored with the chart
        #[arg(long, requires = "save")]
        label: Option<String>,
    },
    /// List stored charts, newest first
    History {
        /// SQLite history file
        #[arg(long)]
        db: PathBuf,
        /// Case-insensitive name filter
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_ref() {
        if let Err(err) = start_logging(log_dir) {
            eprintln!("Failed to start logging: {err}");
            std::process::exit(1);
        }
    }

    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Ping => {
            println!("numerology_core ping={}", numerology_core::ping());
            println!("numerology_core version={}", numerology_core::core_version());
        }

        Commands::Chart {
            name,
            birth_date,
            target_year,
            as_of,
            annual_view,
            classic_pinnacles,
            config,
            interpret: with_readings,
            db,
            save: _,
            label,
        } => {
            let config = match config {
                Some(path) => EngineConfig::from_json_str(&std::fs::read_to_string(path)?)?,
                None => {
                    let mut config = EngineConfig::for_target_year(target_year);
                    if annual_view {
                        config.cycle_boundaries = CycleBoundaries::ANNUAL_VIEW;
                    }
                    if classic_pinnacles {
                        config.realization_table = RealizationTable::CLASSIC_PINNACLES;
                    }
                    config
                }
            };
            let engine = NumerologyEngine::new(config)?;
            let request = ChartRequest {
                full_name: name,
                birth_date,
                as_of: as_of.unwrap_or_else(|| Local::now().date_naive()),
                label,
            };

            let output = match db {
                Some(path) => {
                    let conn = open_db(&path)?;
                    let service =
                        ChartService::new(engine, SqliteChartRepository::try_new(&conn)?);
                    let record = service.calculate_and_store(&request)?;
                    info!("event=cli_chart module=cli status=ok stored=true");
                    if with_readings {
                        json!({ "record": record, "readings": interpret(&record.chart) })
                    } else {
                        serde_json::to_value(&record)?
                    }
                }
                None => {
                    let chart = engine.calculate(
                        &request.full_name,
                        &request.birth_date,
                        request.as_of,
                    )?;
                    info!("event=cli_chart module=cli status=ok stored=false");
                    if with_readings {
                        json!({ "chart": chart, "readings": interpret(&chart) })
                    } else {
                        serde_json::to_value(&chart)?
                    }
                }
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::History {
            db,
            name,
            limit,
            offset,
        } => {
            let conn = open_db(&db)?;
            let service = ChartService::new(
                NumerologyEngine::default(),
                SqliteChartRepository::try_new(&conn)?,
            );
            let page = service.list_charts(&ChartListQuery {
                name_contains: name,
                limit,
                offset,
            })?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "applied_limit": page.applied_limit,
                    "items": page.items,
                }))?
            );
        }
    }
    Ok(())
}

fn start_logging(log_dir: &Path) -> Result<(), Box<dyn Error>> {
    let absolute = std::path::absolute(log_dir)?;
    let dir = absolute
        .to_str()
        .ok_or("log directory path is not valid UTF-8")?;
    init_logging(numerology_core::default_log_level(), dir)?;
    Ok(())
}
