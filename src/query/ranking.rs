//! Station activity ranking.
//!
//! Activity is the number of observation rows a station has. Ties in count
//! are broken by the lexicographically smallest station identifier so the
//! ranking never depends on row order.

use std::collections::HashMap;

use crate::error::{KonaError, Result};
use crate::state::Observation;

/// Observation count for one station
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationActivity<'a> {
    pub station: &'a str,
    pub count: usize,
}

/// All stations ordered by count descending, then identifier ascending
pub fn station_activity(observations: &[Observation]) -> Vec<StationActivity<'_>> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for obs in observations {
        *counts.entry(obs.station.as_str()).or_default() += 1;
    }

    let mut ranking: Vec<StationActivity<'_>> = counts
        .into_iter()
        .map(|(station, count)| StationActivity { station, count })
        .collect();
    ranking.sort_unstable_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.station.cmp(b.station))
    });
    ranking
}

/// Identifier of the station with the most observations
pub fn most_active_station(observations: &[Observation]) -> Result<&str> {
    station_activity(observations)
        .first()
        .map(|top| top.station)
        .ok_or_else(|| KonaError::NoData {
            message: "cannot rank stations of an empty observation set".to_string(),
        })
}
