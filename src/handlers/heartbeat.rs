//! Heartbeat endpoint handler.
//!
//! Returns server status information: uptime, the loaded dataset and how many
//! store sessions are free.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

use crate::query::station_activity;
use crate::state::AppState;

/// Server ID, generated once per process
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: once_cell::sync::Lazy<SystemTime> = once_cell::sync::Lazy::new(SystemTime::now);

/// Heartbeat response structure
#[derive(Debug, Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Store sessions that can be acquired right now
    pub available_sessions: usize,
    /// Dataset information
    pub dataset: DatasetInfo,
    /// Server status
    pub status: String,
}

/// Dataset information structure
#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    /// Dataset file path
    pub file_path: Option<String>,
    pub observation_count: usize,
    pub station_count: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    /// Station with the most observations, if there are any
    pub most_active_station: Option<String>,
    /// Approximate memory usage for dataset in bytes
    pub data_memory_bytes: usize,
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Json<HeartbeatResponse> {
    Json(build_heartbeat(&state))
}

fn build_heartbeat(state: &AppState) -> HeartbeatResponse {
    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    let dataset = state.store.dataset();
    let span = dataset.date_span();
    let available_sessions = state.store.available_sessions();

    let dataset_info = DatasetInfo {
        file_path: state
            .config
            .data
            .database_path
            .as_ref()
            .map(|p| p.display().to_string()),
        observation_count: dataset.observations.len(),
        station_count: dataset.stations.len(),
        first_date: span.map(|(first, _)| first.to_string()),
        last_date: span.map(|(_, last)| last.to_string()),
        most_active_station: station_activity(&dataset.observations)
            .first()
            .map(|top| top.station.to_string()),
        data_memory_bytes: dataset.memory_usage(),
    };

    let status = if available_sessions == 0 {
        "busy"
    } else {
        "healthy"
    };

    HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        available_sessions,
        dataset: dataset_info,
        status: status.to_string(),
    }
}
