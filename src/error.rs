//! Error types for the climate-api application.
//!
//! Every failure the service can hit is a variant here. Route handlers do not
//! distinguish between them: any error reaching a handler becomes a generic
//! `500` response.

use thiserror::Error;

/// The main error type for climate-api operations.
#[derive(Error, Debug)]
pub enum ClimateError {
    /// SQLite errors (open, prepare, query, row decoding)
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The database does not contain the expected tables or columns
    #[error("Schema error: {message}")]
    Schema { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

/// Convenience type alias for Results with ClimateError
pub type Result<T> = std::result::Result<T, ClimateError>;
