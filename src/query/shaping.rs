//! Response records.
//!
//! Each record serializes to a JSON object whose keys are fixed per query
//! type. Conversion keeps the input order and never filters.

use serde::Serialize;

use crate::query::temperature::TemperatureStats;
use crate::state::{Observation, Station};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Precipitation")]
    pub precipitation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRecord {
    #[serde(rename = "Station")]
    pub station: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Elevation")]
    pub elevation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TobsRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "TOBS")]
    pub tobs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureSummary {
    #[serde(rename = "Minimum TOBS")]
    pub minimum: Option<f64>,
    #[serde(rename = "Average TOBS")]
    pub average: Option<f64>,
    #[serde(rename = "Maximum TOBS")]
    pub maximum: Option<f64>,
}

impl From<&Observation> for PrecipitationRecord {
    fn from(obs: &Observation) -> Self {
        Self {
            date: obs.date.clone(),
            precipitation: obs.precipitation,
        }
    }
}

impl From<&Station> for StationRecord {
    fn from(station: &Station) -> Self {
        Self {
            station: station.station.clone(),
            name: station.name.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            elevation: station.elevation,
        }
    }
}

impl From<&Observation> for TobsRecord {
    fn from(obs: &Observation) -> Self {
        Self {
            date: obs.date.clone(),
            tobs: obs.tobs,
        }
    }
}

impl From<TemperatureStats> for TemperatureSummary {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            minimum: stats.min,
            average: stats.avg,
            maximum: stats.max,
        }
    }
}

/// Convert every item into its record form, in order
pub fn shape<'a, T, R>(items: impl IntoIterator<Item = &'a T>) -> Vec<R>
where
    T: 'a,
    R: From<&'a T>,
{
    items.into_iter().map(R::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_precipitation_keys_and_order() {
        let observations = vec![
            Observation::new("S1", "2017-01-02", Some(0.25), 70.0),
            Observation::new("S2", "2017-01-01", None, 65.0),
        ];
        let records: Vec<PrecipitationRecord> = shape(&observations);
        assert_eq!(
            serde_json::to_string(&records).unwrap(),
            r#"[{"Date":"2017-01-02","Precipitation":0.25},{"Date":"2017-01-01","Precipitation":null}]"#
        );
    }

    #[test]
    fn test_station_keys() {
        let stations = vec![Station {
            station: "USC00519397".to_string(),
            name: "WAIKIKI 717.2, HI US".to_string(),
            latitude: 21.2716,
            longitude: -157.8168,
            elevation: 3.0,
        }];
        let records: Vec<StationRecord> = shape(&stations);
        let json = serde_json::to_value(&records).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "Station": "USC00519397",
                "Name": "WAIKIKI 717.2, HI US",
                "Latitude": 21.2716,
                "Longitude": -157.8168,
                "Elevation": 3.0
            }])
        );
    }

    #[test]
    fn test_tobs_keys() {
        let observations = vec![Observation::new("S1", "2017-08-18", Some(0.0), 79.0)];
        let records: Vec<TobsRecord> = shape(&observations);
        assert_eq!(
            serde_json::to_string(&records).unwrap(),
            r#"[{"Date":"2017-08-18","TOBS":79.0}]"#
        );
    }

    #[test]
    fn test_empty_summary_keeps_keys() {
        let summary = TemperatureSummary::from(TemperatureStats::default());
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"Minimum TOBS":null,"Average TOBS":null,"Maximum TOBS":null}"#
        );
    }
}
