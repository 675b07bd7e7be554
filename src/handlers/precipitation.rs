//! Precipitation endpoint handler.
//!
//! Returns the date and temperature observation of every measurement recorded
//! after the cutoff date, one record per measurement row.

use axum::extract::State;
use axum::response::Response;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::db::PrecipitationRow;
use crate::logging::generate_request_id;
use crate::state::AppState;

use super::json_records;

/// One element of the `/api/v1.0/precipitation` response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "TOBS")]
    pub tobs: Option<f64>,
}

impl From<PrecipitationRow> for PrecipitationRecord {
    fn from(row: PrecipitationRow) -> Self {
        Self {
            date: row.date,
            tobs: row.tobs,
        }
    }
}

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/precipitation",
        request_id = %request_id,
        cutoff_date = state.cutoff_date(),
        "Processing precipitation request"
    );

    let cutoff = state.cutoff_date().to_string();
    let result = state
        .query(move |db| db.list_precipitation_since(&cutoff))
        .await
        .map(|rows| rows.into_iter().map(PrecipitationRecord::from).collect());

    json_records::<PrecipitationRecord>(
        "/api/v1.0/precipitation",
        &request_id,
        start_time,
        None,
        result,
    )
}
