//! Read-only record store.
//!
//! The dataset lives behind an `Arc` and is never mutated. Requests read it
//! through a [`StoreSession`], acquired per request from a bounded pool of
//! permits and released when the session is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::{debug, warn};

use crate::config::DataConfig;
use crate::error::{KonaError, Result};
use crate::state::{Dataset, Observation, Station};

/// Shared handle to the in-memory dataset
#[derive(Debug, Clone)]
pub struct RecordStore {
    dataset: Arc<Dataset>,
    sessions: Arc<Semaphore>,
    acquire_timeout: Duration,
}

impl RecordStore {
    pub fn new(dataset: Dataset, config: &DataConfig) -> Self {
        Self {
            dataset: Arc::new(dataset),
            sessions: Arc::new(Semaphore::new(config.max_sessions)),
            acquire_timeout: Duration::from_millis(config.acquire_timeout_ms),
        }
    }

    /// Acquire a session, waiting at most the configured timeout
    pub async fn session(&self) -> Result<StoreSession> {
        let acquire = Arc::clone(&self.sessions).acquire_owned();
        let permit = match tokio::time::timeout(self.acquire_timeout, acquire).await {
            Ok(Ok(permit)) => permit,
            Ok(Err(_)) => {
                return Err(KonaError::StoreUnavailable {
                    message: "record store is closed".to_string(),
                })
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.acquire_timeout.as_millis() as u64,
                    "Timed out waiting for a store session"
                );
                return Err(KonaError::StoreUnavailable {
                    message: format!(
                        "no store session available within {} ms",
                        self.acquire_timeout.as_millis()
                    ),
                });
            }
        };

        debug!(
            available = self.sessions.available_permits(),
            "Store session acquired"
        );

        Ok(StoreSession {
            dataset: Arc::clone(&self.dataset),
            _permit: permit,
        })
    }

    /// Stop handing out sessions; sessions already held stay valid
    pub fn close(&self) {
        self.sessions.close();
    }

    /// Number of sessions that can still be acquired without waiting
    pub fn available_sessions(&self) -> usize {
        self.sessions.available_permits()
    }

    /// Direct access to the dataset, for startup and status reporting
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

/// Scoped read access to the dataset; the permit is returned on drop
#[derive(Debug)]
pub struct StoreSession {
    dataset: Arc<Dataset>,
    _permit: OwnedSemaphorePermit,
}

impl StoreSession {
    pub fn scan_observations(&self) -> &[Observation] {
        &self.dataset.observations
    }

    pub fn scan_stations(&self) -> &[Station] {
        &self.dataset.stations
    }
}
