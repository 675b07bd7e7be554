//! HTTP request handlers for the climate-api.
//!
//! This module contains all the endpoint handlers for the web server and the
//! router that wires them to their paths.

pub mod heartbeat;
pub mod home;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use heartbeat::heartbeat_handler;
pub use home::home_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use temperature::{start_end_handler, start_handler};
pub use tobs::tobs_handler;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::error::{ClimateError, Result};
use crate::logging::{create_http_trace_layer, log_request_error};
use crate::state::AppState;

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/start/:date", get(start_handler))
        .route("/api/v1.0/start_end/:start/:end", get(start_end_handler))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serialize query results as a JSON array, or turn a failure into a 500
fn json_records<T: Serialize>(
    endpoint: &str,
    request_id: &str,
    start_time: Instant,
    params: Option<&str>,
    result: Result<Vec<T>>,
) -> Response {
    match result {
        Ok(records) => {
            info!(
                endpoint = endpoint,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                record_count = records.len(),
                "Request successful"
            );
            Json(records).into_response()
        }
        Err(error) => handle_query_error(error, endpoint, request_id, params),
    }
}

/// Log a failed query and answer with a generic server error
fn handle_query_error(
    error: ClimateError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
