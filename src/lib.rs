//! # climate-api
//!
//! A small read-only HTTP API over a SQLite climate observation dataset.
//!
//! The dataset holds two tables: `station` (code, name, coordinates,
//! elevation) and `measurement` (station, date, precipitation, temperature
//! observation). Each route runs one fixed query and returns the rows as a
//! JSON array.
//!
//! ## Architecture
//!
//! - **Data Layer** ([`db`]): one read-only SQLite connection shared by all requests
//! - **API Layer** ([`handlers`]): one handler per route, records serialized with serde
//! - **Ambient** ([`config`], [`error`], [`logging`]): layered configuration,
//!   a single error enum, and `tracing` based logging

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod state;

pub use config::Config;
pub use db::{load_database, ClimateDb};
pub use error::{ClimateError, Result};
pub use handlers::create_router;
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_data_load_stats, log_error,
    log_request_error, log_timed_operation,
};
pub use state::{AppState, DatasetStats};
