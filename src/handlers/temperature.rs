//! Temperature summary endpoint handlers.
//!
//! `/api/v1.0/start/:date` summarizes a single day and
//! `/api/v1.0/start_end/:start/:end` an inclusive period. Dates are taken from
//! the path as-is and compared as strings; nothing is validated. Both answer
//! with a JSON array holding at most one record, empty when no measurement
//! matches.

use axum::extract::{Path, State};
use axum::response::Response;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::db::DailyTemperatureStats;
use crate::logging::generate_request_id;
use crate::state::AppState;

use super::json_records;

/// Response record for `/api/v1.0/start/:date`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateTemperatureRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Min Temp")]
    pub min_temp: Option<f64>,
    #[serde(rename = "Max Temp")]
    pub max_temp: Option<f64>,
    #[serde(rename = "Avg Temp")]
    pub avg_temp: Option<f64>,
}

impl From<DailyTemperatureStats> for DateTemperatureRecord {
    fn from(stats: DailyTemperatureStats) -> Self {
        Self {
            date: stats.date,
            min_temp: stats.min,
            max_temp: stats.max,
            avg_temp: stats.avg,
        }
    }
}

/// Response record for `/api/v1.0/start_end/:start/:end`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTemperatureRecord {
    #[serde(rename = "Start Date")]
    pub start_date: String,
    #[serde(rename = "End Date")]
    pub end_date: String,
    #[serde(rename = "Min Temp")]
    pub min_temp: Option<f64>,
    #[serde(rename = "Max Temp")]
    pub max_temp: Option<f64>,
    #[serde(rename = "Avg Temp")]
    pub avg_temp: Option<f64>,
}

/// Handle GET /api/v1.0/start/:date requests
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/start",
        request_id = %request_id,
        date = %date,
        "Processing date temperature request"
    );

    let result = state
        .query({
            let date = date.clone();
            move |db| db.temperature_stats_for_date(&date)
        })
        .await
        .map(|stats| stats.into_iter().map(DateTemperatureRecord::from).collect());

    json_records::<DateTemperatureRecord>(
        "/api/v1.0/start",
        &request_id,
        start_time,
        Some(&format!("date={}", date)),
        result,
    )
}

/// Handle GET /api/v1.0/start_end/:start/:end requests
pub async fn start_end_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/start_end",
        request_id = %request_id,
        start = %start,
        end = %end,
        "Processing period temperature request"
    );

    let result = state
        .query({
            let (start, end) = (start.clone(), end.clone());
            move |db| db.temperature_stats_for_range(&start, &end)
        })
        .await
        .map(|stats| {
            stats
                .into_iter()
                .map(|stats| PeriodTemperatureRecord {
                    start_date: start.clone(),
                    end_date: end.clone(),
                    min_temp: stats.min,
                    max_temp: stats.max,
                    avg_temp: stats.avg,
                })
                .collect()
        });

    json_records::<PeriodTemperatureRecord>(
        "/api/v1.0/start_end",
        &request_id,
        start_time,
        Some(&format!("start={}, end={}", start, end)),
        result,
    )
}
