//! Application state management for kona.
//!
//! This module defines the statically declared dataset schema and the shared
//! state that is passed to all handlers.

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::store::RecordStore;

/// One dated measurement row of the `measurement` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// Station identifier, shared with [`Station::station`]
    pub station: String,
    /// ISO-8601 `YYYY-MM-DD` date, kept as text and compared lexicographically
    pub date: String,
    /// Precipitation amount, absent when not recorded
    pub precipitation: Option<f64>,
    /// Temperature observation
    pub tobs: f64,
}

impl Observation {
    pub fn new(
        station: impl Into<String>,
        date: impl Into<String>,
        precipitation: Option<f64>,
        tobs: f64,
    ) -> Self {
        Self {
            station: station.into(),
            date: date.into(),
            precipitation,
            tobs,
        }
    }
}

/// Reference metadata for one monitoring station
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// The complete, immutable dataset held in memory
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Observations in source row order
    pub observations: Vec<Observation>,
    /// Stations in source row order
    pub stations: Vec<Station>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>, stations: Vec<Station>) -> Self {
        Self {
            observations,
            stations,
        }
    }

    /// Earliest and latest observation dates, by string order
    pub fn date_span(&self) -> Option<(&str, &str)> {
        let first = self.observations.iter().map(|o| o.date.as_str()).min()?;
        let last = self.observations.iter().map(|o| o.date.as_str()).max()?;
        Some((first, last))
    }

    /// Rough heap footprint of the loaded rows
    pub fn memory_usage(&self) -> usize {
        let observations: usize = self
            .observations
            .iter()
            .map(|o| std::mem::size_of::<Observation>() + o.station.len() + o.date.len())
            .sum();
        let stations: usize = self
            .stations
            .iter()
            .map(|s| std::mem::size_of::<Station>() + s.station.len() + s.name.len())
            .sum();
        observations + stations
    }
}

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Read-only record store
    pub store: RecordStore,
}

impl AppState {
    /// Create a new AppState around an already loaded dataset
    pub fn new(config: Config, dataset: Dataset) -> Self {
        let store = RecordStore::new(dataset, &config.data);
        Self { config, store }
    }

    /// Validate that the application state is ready to serve requests
    pub fn validate(&self) -> Result<()> {
        self.config.validate()
    }
}
