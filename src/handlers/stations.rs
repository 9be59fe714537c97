//! Station listing endpoint handler.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::error_response;
use crate::logging::generate_request_id;
use crate::query;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/stations";

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    let session = match state.store.session().await {
        Ok(session) => session,
        Err(error) => return error_response(error, ENDPOINT, &request_id, None),
    };
    let records = query::stations(&session);

    info!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        duration_us = start_time.elapsed().as_micros() as u64,
        station_count = records.len(),
        "Stations request successful"
    );

    Json(records).into_response()
}
