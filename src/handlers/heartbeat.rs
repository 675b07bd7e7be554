//! Heartbeat endpoint handler.
//!
//! Returns server status information, including uptime and the size of the
//! served dataset.

use axum::{extract::State, response::IntoResponse, response::Response, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

use crate::db::TableSchema;
use crate::logging::generate_request_id;
use crate::state::AppState;

use super::handle_query_error;

/// Server ID, unique per process
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Heartbeat response structure
#[derive(Debug, Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Dataset information
    pub dataset: DatasetInfo,
    /// Server status
    pub status: String,
}

/// Dataset information structure
#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    /// Database file path
    pub database_path: String,
    /// Rows in the station table
    pub station_count: usize,
    /// Rows in the measurement table
    pub measurement_count: usize,
    /// Tables and columns found in the database
    pub tables: Vec<TableSchema>,
}

/// Mark the process start; called once at startup
pub fn init_start_time() {
    once_cell::sync::Lazy::force(&START_TIME);
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();

    let stats = match state.dataset_stats().await {
        Ok(stats) => stats,
        Err(error) => return handle_query_error(error, "/heartbeat", &request_id, None),
    };

    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    let response = HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        dataset: DatasetInfo {
            database_path: state.db.path().display().to_string(),
            station_count: stats.station_count,
            measurement_count: stats.measurement_count,
            tables: state.db.schema().tables.clone(),
        },
        status: "healthy".to_string(),
    };

    Json(response).into_response()
}
