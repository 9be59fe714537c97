//! Most-active-station temperature endpoint handler.
//!
//! Returns the last 12 months of temperature observations, counted back from
//! the latest observation of the station with the most rows.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::logging::generate_request_id;
use crate::query;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/tobs";

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing tobs request"
    );

    let session = match state.store.session().await {
        Ok(session) => session,
        Err(error) => return error_response(error, ENDPOINT, &request_id, None),
    };

    match query::most_active_tobs(&session) {
        Ok(records) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                record_count = records.len(),
                "Tobs request successful"
            );
            Json(records).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}
