//! Error types for the kona application.
//!
//! Every fallible operation in the crate returns [`KonaError`]. Handlers map
//! each variant onto an HTTP status through [`KonaError::status_code`].

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for kona operations.
#[derive(Error, Debug)]
pub enum KonaError {
    /// SQLite dataset errors
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A date that is not a well-formed `YYYY-MM-DD` calendar date
    #[error("Invalid date: {value} - {message}")]
    InvalidDate { value: String, message: String },

    /// A query that needs at least one observation ran against an empty dataset
    #[error("No data: {message}")]
    NoData { message: String },

    /// The record store could not hand out a session in time
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl KonaError {
    /// HTTP status reported to clients for this error.
    ///
    /// `InvalidDate` is a client error only when it comes from request input;
    /// callers that hit a malformed date inside the dataset should use
    /// [`KonaError::data_fault`] instead.
    pub fn status_code(&self) -> StatusCode {
        match self {
            KonaError::InvalidDate { .. } => StatusCode::BAD_REQUEST,
            KonaError::NoData { .. } => StatusCode::NOT_FOUND,
            KonaError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Wrap a message about inconsistent stored data as a server error.
    pub fn data_fault(message: impl Into<String>) -> Self {
        KonaError::Server {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results with KonaError
pub type Result<T> = std::result::Result<T, KonaError>;
