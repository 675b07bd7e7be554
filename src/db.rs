//! SQLite data access.
//!
//! This module opens the climate database read-only, introspects its schema,
//! and exposes the handful of queries the HTTP routes are built on. A single
//! connection is shared by every request; calls are serialized on its lock.

use parking_lot::Mutex;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ClimateError, Result};
use crate::logging::{log_data_load_stats, log_timed_operation};
use crate::state::AppState;

/// Name of the station table
pub const STATION_TABLE: &str = "station";

/// Name of the measurement table
pub const MEASUREMENT_TABLE: &str = "measurement";

/// Columns each table must provide for the queries below
const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    (
        STATION_TABLE,
        &["station", "name", "latitude", "longitude", "elevation"],
    ),
    (MEASUREMENT_TABLE, &["station", "date", "prcp", "tobs"]),
];

/// Columns of one table, as reported by SQLite
#[derive(Debug, Clone, Serialize)]
pub struct TableSchema {
    /// Table name
    pub name: String,
    /// Column names in declaration order
    pub columns: Vec<String>,
}

/// Schema discovered in the database file
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    /// User tables, sorted by name
    pub tables: Vec<TableSchema>,
}

impl Schema {
    /// Look up a table by name
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Names of all tables
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// Check that every required table and column is present
    fn require(&self, required: &[(&str, &[&str])]) -> Result<()> {
        for (table_name, columns) in required {
            let table = self.table(table_name).ok_or_else(|| ClimateError::Schema {
                message: format!("Table not found: {}", table_name),
            })?;

            let missing: Vec<&str> = columns
                .iter()
                .copied()
                .filter(|c| !table.columns.iter().any(|have| have == c))
                .collect();

            if !missing.is_empty() {
                return Err(ClimateError::Schema {
                    message: format!(
                        "Table {} is missing column(s): {}",
                        table_name,
                        missing.join(", ")
                    ),
                });
            }
        }
        Ok(())
    }
}

/// A (date, temperature observation) pair
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationRow {
    pub date: String,
    pub tobs: Option<f64>,
}

/// A (name, station code) pair
#[derive(Debug, Clone, PartialEq)]
pub struct StationRow {
    pub name: String,
    pub station: String,
}

/// A temperature observation annotated with its station's name
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureObservationRow {
    pub name: String,
    pub date: String,
    pub tobs: Option<f64>,
}

/// Temperature aggregates for a single date
///
/// Aggregates are `None` when every matching row lacks an observation.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTemperatureStats {
    pub date: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

/// Temperature aggregates over an inclusive date range
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureRangeStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

/// Read-only handle on the climate database
#[derive(Debug)]
pub struct ClimateDb {
    path: PathBuf,
    schema: Schema,
    conn: Mutex<Connection>,
}

impl ClimateDb {
    /// Open an existing database file read-only and introspect its schema
    pub fn open(path: &Path) -> Result<Self> {
        // SQLite would otherwise report a less helpful "unable to open" error
        if !path.exists() {
            return Err(ClimateError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        info!("Opened database: {}", path.display());

        let schema = introspect_schema(&conn)?;
        debug!("Database has {} tables", schema.tables.len());
        schema.require(REQUIRED_COLUMNS)?;

        Ok(Self {
            path: path.to_path_buf(),
            schema,
            conn: Mutex::new(conn),
        })
    }

    /// Path the database was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Schema discovered at open time
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Dates and temperature observations of every measurement after `cutoff`
    pub fn list_precipitation_since(&self, cutoff: &str) -> Result<Vec<PrecipitationRow>> {
        self.query_rows(
            "SELECT date, tobs FROM measurement WHERE date > ?1 ORDER BY rowid",
            params![cutoff],
            |row| {
                Ok(PrecipitationRow {
                    date: row.get(0)?,
                    tobs: row.get(1)?,
                })
            },
        )
    }

    /// Name and code of every station (no activity filter)
    pub fn list_stations(&self) -> Result<Vec<StationRow>> {
        self.query_rows(
            "SELECT name, station FROM station ORDER BY rowid",
            params![],
            |row| {
                Ok(StationRow {
                    name: row.get(0)?,
                    station: row.get(1)?,
                })
            },
        )
    }

    /// Temperature observations after `cutoff`, joined with their station's name
    pub fn list_temperature_observations_since(
        &self,
        cutoff: &str,
    ) -> Result<Vec<TemperatureObservationRow>> {
        self.query_rows(
            "SELECT s.name, m.date, m.tobs \
             FROM measurement m JOIN station s ON m.station = s.station \
             WHERE m.date > ?1 \
             ORDER BY m.rowid",
            params![cutoff],
            |row| {
                Ok(TemperatureObservationRow {
                    name: row.get(0)?,
                    date: row.get(1)?,
                    tobs: row.get(2)?,
                })
            },
        )
    }

    /// Min, max and average temperature on exactly `date`
    ///
    /// Returns `None` when no measurement exists for that date.
    pub fn temperature_stats_for_date(&self, date: &str) -> Result<Option<DailyTemperatureStats>> {
        let conn = self.conn.lock();
        let stats = conn
            .query_row(
                "SELECT date, MIN(tobs), MAX(tobs), AVG(tobs) \
                 FROM measurement \
                 WHERE date = ?1 \
                 GROUP BY date",
                params![date],
                |row| {
                    Ok(DailyTemperatureStats {
                        date: row.get(0)?,
                        min: row.get(1)?,
                        max: row.get(2)?,
                        avg: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(stats)
    }

    /// Min, max and average temperature for dates in `[start, end]`
    ///
    /// Returns `None` when no measurement falls in the range, including when
    /// `start > end`.
    pub fn temperature_stats_for_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Option<TemperatureRangeStats>> {
        let conn = self.conn.lock();
        let (count, stats): (i64, TemperatureRangeStats) = conn.query_row(
            "SELECT COUNT(*), MIN(tobs), MAX(tobs), AVG(tobs) \
             FROM measurement \
             WHERE date BETWEEN ?1 AND ?2",
            params![start, end],
            |row| {
                Ok((
                    row.get(0)?,
                    TemperatureRangeStats {
                        min: row.get(1)?,
                        max: row.get(2)?,
                        avg: row.get(3)?,
                    },
                ))
            },
        )?;

        // Aggregates without GROUP BY always yield one row
        Ok((count > 0).then_some(stats))
    }

    /// Number of rows in the station table
    pub fn count_stations(&self) -> Result<usize> {
        self.count_rows(STATION_TABLE)
    }

    /// Number of rows in the measurement table
    pub fn count_measurements(&self) -> Result<usize> {
        self.count_rows(MEASUREMENT_TABLE)
    }

    /// Take the connection lock, as a slow query would
    #[cfg(test)]
    pub(crate) fn hold_connection(&self) -> parking_lot::MutexGuard<'_, Connection> {
        self.conn.lock()
    }

    fn count_rows(&self, table: &str) -> Result<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })?;
        Ok(count as usize)
    }

    fn query_rows<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>>
    where
        P: rusqlite::Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, map)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

/// Read table and column names from the database
fn introspect_schema(conn: &Connection) -> Result<Schema> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
         ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut columns_stmt = conn.prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")?;
    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        let columns = columns_stmt
            .query_map(params![name], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        tables.push(TableSchema { name, columns });
    }

    Ok(Schema { tables })
}

/// Open the database and create the application state
pub fn load_database(path: &Path, config: Config) -> Result<AppState> {
    let db = log_timed_operation("open_database", || ClimateDb::open(path))?;

    let station_count = db.count_stations()?;
    let measurement_count = db.count_measurements()?;
    log_data_load_stats(
        &path.display().to_string(),
        &db.schema().table_names(),
        station_count,
        measurement_count,
    );

    Ok(AppState::new(config, db))
}
