//! # kona
//!
//! A small, in-memory, read-only climate observation query server.
//!
//! kona loads a station/measurement dataset from SQLite once at startup and
//! answers a fixed set of JSON queries over it: precipitation and station
//! listings, the last year of temperature readings from the most active
//! station, and min/avg/max temperature over a date range.
//!
//! ## Architecture
//!
//! - **Data Layer**: [`data_loader`] reads the dataset, [`store`] shares it
//!   read-only through per-request sessions
//! - **Query Layer**: [`query`] ranks stations, aggregates temperatures and
//!   shapes response records
//! - **API Layer**: [`handlers`] exposes the queries over HTTP

pub mod config;
pub mod data_loader;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod query;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{KonaError, Result};
pub use handlers::create_router;
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_data_load_stats, log_error,
    log_operation_end, log_operation_start, log_request_error, log_timed_operation,
};
pub use state::{AppState, Dataset, Observation, Station};
pub use store::{RecordStore, StoreSession};
