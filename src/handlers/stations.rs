//! Stations endpoint handler.
//!
//! Lists every station in the dataset. No activity filter is applied.

use axum::extract::State;
use axum::response::Response;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::db::StationRow;
use crate::logging::generate_request_id;
use crate::state::AppState;

use super::json_records;

/// One element of the `/api/v1.0/stations` response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Station")]
    pub station: String,
}

impl From<StationRow> for StationRecord {
    fn from(row: StationRow) -> Self {
        Self {
            name: row.name,
            station: row.station,
        }
    }
}

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/stations",
        request_id = %request_id,
        "Processing stations request"
    );

    let result = state
        .query(|db| db.list_stations())
        .await
        .map(|rows| rows.into_iter().map(StationRecord::from).collect());

    json_records::<StationRecord>("/api/v1.0/stations", &request_id, start_time, None, result)
}
