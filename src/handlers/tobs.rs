//! Temperature observations endpoint handler.

use axum::extract::State;
use axum::response::Response;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::db::TemperatureObservationRow;
use crate::logging::generate_request_id;
use crate::state::AppState;

use super::json_records;

/// One element of the `/api/v1.0/tobs` response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TobsRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Tobs")]
    pub tobs: Option<f64>,
}

impl From<TemperatureObservationRow> for TobsRecord {
    fn from(row: TemperatureObservationRow) -> Self {
        Self {
            name: row.name,
            date: row.date,
            tobs: row.tobs,
        }
    }
}

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/tobs",
        request_id = %request_id,
        cutoff_date = state.cutoff_date(),
        "Processing temperature observations request"
    );

    let cutoff = state.cutoff_date().to_string();
    let result = state
        .query(move |db| db.list_temperature_observations_since(&cutoff))
        .await
        .map(|rows| rows.into_iter().map(TobsRecord::from).collect());

    json_records::<TobsRecord>("/api/v1.0/tobs", &request_id, start_time, None, result)
}
