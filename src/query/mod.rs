//! Read-only queries over the climate dataset.
//!
//! Each operation reads through a [`StoreSession`] and returns the records
//! the HTTP layer serializes as a JSON array.
//!
//! - [`ranking`]: observation counts per station
//! - [`temperature`]: min/avg/max over a date range
//! - [`shaping`]: labeled response records

pub mod ranking;
pub mod shaping;
pub mod temperature;

use chrono::{Months, NaiveDate};
use tracing::{debug, warn};

use crate::error::{KonaError, Result};
use crate::store::StoreSession;

pub use ranking::{most_active_station, station_activity, StationActivity};
pub use shaping::{PrecipitationRecord, StationRecord, TemperatureSummary, TobsRecord};
pub use temperature::{aggregate_temperature, DateRange, TemperatureStats};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date and precipitation of every observation, in store order
pub fn precipitation(session: &StoreSession) -> Vec<PrecipitationRecord> {
    shaping::shape(session.scan_observations())
}

/// Every station with its metadata, in store order
pub fn stations(session: &StoreSession) -> Vec<StationRecord> {
    shaping::shape(session.scan_stations())
}

/// Temperature observations of the most active station over the 12 months
/// ending at that station's latest observation
pub fn most_active_tobs(session: &StoreSession) -> Result<Vec<TobsRecord>> {
    let observations = session.scan_observations();
    let station = most_active_station(observations)?;

    let latest = observations
        .iter()
        .filter(|obs| obs.station == station)
        .map(|obs| obs.date.as_str())
        .max()
        .ok_or_else(|| KonaError::NoData {
            message: format!("station {} has no observations", station),
        })?;
    let cutoff = twelve_months_before(latest)?;

    debug!(
        station = station,
        latest = latest,
        cutoff = %cutoff,
        "Selecting most active station window"
    );

    let window = DateRange::new(&cutoff, Some(latest));
    Ok(shaping::shape(
        observations
            .iter()
            .filter(|obs| obs.station == station && window.contains(&obs.date)),
    ))
}

/// Min/avg/max temperature over `[start, end]`, as a single-record list
pub fn temperature_range(
    session: &StoreSession,
    start: &str,
    end: Option<&str>,
) -> Vec<TemperatureSummary> {
    let stats = aggregate_temperature(session.scan_observations(), start, end);
    vec![TemperatureSummary::from(stats)]
}

/// Check a date taken from a request path.
///
/// In strict mode anything other than a real `YYYY-MM-DD` date is rejected.
/// Otherwise malformed dates are only logged and still take part in string
/// comparison.
pub fn check_date(value: &str, strict: bool) -> Result<()> {
    match parse_iso_date(value) {
        Ok(_) => Ok(()),
        Err(err) if strict => Err(err),
        Err(err) => {
            warn!(date = value, error = %err, "Comparing malformed date as text");
            Ok(())
        }
    }
}

fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    if value.len() != 10 {
        return Err(KonaError::InvalidDate {
            value: value.to_string(),
            message: "expected YYYY-MM-DD".to_string(),
        });
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| KonaError::InvalidDate {
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// The same day 12 calendar months earlier, clamped to the month end
fn twelve_months_before(latest: &str) -> Result<String> {
    let date = parse_iso_date(latest).map_err(|e| {
        KonaError::data_fault(format!("latest observation date is unusable: {}", e))
    })?;
    let cutoff = date
        .checked_sub_months(Months::new(12))
        .ok_or_else(|| KonaError::data_fault(format!("no date 12 months before {}", latest)))?;
    Ok(cutoff.format(DATE_FORMAT).to_string())
}
