//! Temperature range statistics endpoint handlers.
//!
//! `/api/v1.0/{start}` covers every date from `start` onwards;
//! `/api/v1.0/{start}/{end}` is inclusive on both ends. Both answer with a
//! one-element array, even when no observation falls in the range.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::error::Result;
use crate::logging::{generate_request_id, log_timed_operation};
use crate::query::{self, TemperatureSummary};
use crate::state::AppState;

const START_ENDPOINT: &str = "/api/v1.0/{start}";
const RANGE_ENDPOINT: &str = "/api/v1.0/{start}/{end}";

/// Handle GET /api/v1.0/{start} requests
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    temperature_response(&state, START_ENDPOINT, &start, None).await
}

/// Handle GET /api/v1.0/{start}/{end} requests
pub async fn range_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    temperature_response(&state, RANGE_ENDPOINT, &start, Some(&end)).await
}

async fn temperature_response(
    state: &AppState,
    endpoint: &str,
    start: &str,
    end: Option<&str>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let params = match end {
        Some(end) => format!("start={}, end={}", start, end),
        None => format!("start={}", start),
    };

    debug!(
        endpoint = endpoint,
        request_id = %request_id,
        params = %params,
        "Processing temperature statistics request"
    );

    match temperature_summary(state, start, end).await {
        Ok(records) => {
            info!(
                endpoint = endpoint,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                matched = records.iter().any(|r| r.minimum.is_some()),
                "Temperature statistics request successful"
            );
            Json(records).into_response()
        }
        Err(error) => error_response(error, endpoint, &request_id, Some(&params)),
    }
}

async fn temperature_summary(
    state: &AppState,
    start: &str,
    end: Option<&str>,
) -> Result<Vec<TemperatureSummary>> {
    let strict = state.config.data.strict_dates;
    query::check_date(start, strict)?;
    if let Some(end) = end {
        query::check_date(end, strict)?;
    }

    let session = state.store.session().await?;
    Ok(log_timed_operation("temperature_range", || {
        query::temperature_range(&session, start, end)
    }))
}
