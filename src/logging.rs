//! Logging utilities for the kona server.
//!
//! Structured `tracing` helpers shared by startup code and the HTTP
//! handlers, so every log line carries the same field names
//! (`operation`, `endpoint`, `request_id`, `duration_ms`).

use std::time::Instant;
use tracing::{debug, error, info, warn, Level};

use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use uuid::Uuid;

use crate::error::KonaError;

/// Creates the tracing layer for HTTP request/response logging
pub fn create_http_trace_layer() -> TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::DEBUG)
                .latency_unit(LatencyUnit::Micros),
        )
}

/// Initialize the tracing subscriber; `RUST_LOG` wins over `log_level`
pub fn init_tracing(log_level: &str) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .init();
}

/// Log a start message for a significant operation
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    match details {
        Some(details) => info!(operation = operation, details = details, "Starting operation"),
        None => info!(operation = operation, "Starting operation"),
    }
}

/// Log the completion of a significant operation
pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if success {
        info!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed successfully"
        );
    } else {
        warn!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation failed"
        );
    }
}

/// Run `f`, logging how long it took under `operation`
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    debug!(operation = operation, "Starting operation");

    let result = f();

    debug!(
        operation = operation,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );
    result
}

/// Log detailed information about the dataset loaded at startup
pub fn log_data_load_stats(
    file_path: &str,
    observation_count: usize,
    station_count: usize,
    date_span: Option<(&str, &str)>,
    memory_usage: usize,
) {
    let (first_date, last_date) = date_span.unwrap_or(("none", "none"));
    info!(
        operation = "data_load",
        file_path = file_path,
        observation_count = observation_count,
        station_count = station_count,
        first_date = first_date,
        last_date = last_date,
        memory_kb = memory_usage / 1024,
        "Data loaded successfully"
    );
}

/// Log an error with context
pub fn log_error(error: &KonaError, context: &str) {
    error!(error = %error, context = context, "Error occurred");
}

/// Log an error that occurred during request processing
pub fn log_request_error(
    error: &KonaError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) {
    let status = error.status_code().as_u16();
    if status >= 500 {
        error!(
            error = %error,
            endpoint = endpoint,
            request_id = request_id,
            params = params.unwrap_or("none"),
            status = status,
            "Request processing error"
        );
    } else {
        warn!(
            error = %error,
            endpoint = endpoint,
            request_id = request_id,
            params = params.unwrap_or("none"),
            status = status,
            "Request rejected"
        );
    }
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
