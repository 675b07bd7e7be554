//! Application state management for climate-api.
//!
//! This module defines the shared state that is passed to all handlers:
//! the configuration and the read-only database handle.

use serde::Serialize;
use std::sync::Arc;

use crate::config::Config;
use crate::db::ClimateDb;
use crate::error::{ClimateError, Result};

/// Row counts of the dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetStats {
    /// Rows in the station table
    pub station_count: usize,
    /// Rows in the measurement table
    pub measurement_count: usize,
}

/// The main application state shared across all handlers
#[derive(Debug)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Database handle
    pub db: Arc<ClimateDb>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, db: ClimateDb) -> Self {
        Self {
            config,
            db: Arc::new(db),
        }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, db: ClimateDb) -> Arc<Self> {
        Arc::new(Self::new(config, db))
    }

    /// Lower date bound used by the "last year" routes
    pub fn cutoff_date(&self) -> &str {
        &self.config.data.cutoff_date
    }

    /// Run a database call on the blocking pool
    ///
    /// The connection lock is taken inside `f`, so requests still queue on the
    /// single connection without parking runtime worker threads.
    pub async fn query<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ClimateDb) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || f(&db))
            .await
            .map_err(|e| ClimateError::Server {
                message: format!("Database task failed: {}", e),
            })?
    }

    /// Count the rows currently in the dataset
    pub async fn dataset_stats(&self) -> Result<DatasetStats> {
        self.query(|db| {
            Ok(DatasetStats {
                station_count: db.count_stations()?,
                measurement_count: db.count_measurements()?,
            })
        })
        .await
    }
}
