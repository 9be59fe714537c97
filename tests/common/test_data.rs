//! Test data generation utilities.
//!
//! Builds a small Hawaii-style climate database with known contents:
//!
//! - `USC00519281` reports daily from 2016-01-01 to 2017-08-18 (most active)
//! - `USC00519397` reports every other day from 2016-01-01 to 2017-08-23
//! - `USC00513117` reports weekly from 2016-01-03 to 2017-08-20
//!
//! Every fifth row has no precipitation value.

use chrono::{Duration, NaiveDate};
use kona::{Observation, Station};
use rusqlite::{params, Connection};
use std::path::Path;

pub const MOST_ACTIVE: &str = "USC00519281";
pub const MOST_ACTIVE_LAST_DATE: &str = "2017-08-18";
pub const MOST_ACTIVE_CUTOFF: &str = "2016-08-18";
pub const DATASET_LAST_DATE: &str = "2017-08-23";

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid fixture date")
}

fn series(station: &str, first: &str, last: &str, step_days: i64, out: &mut Vec<Observation>) {
    let last = date(last);
    let mut day = date(first);
    let mut i = 0usize;
    while day <= last {
        let precipitation = if (out.len() + i) % 5 == 4 {
            None
        } else {
            Some(((i * 7) % 13) as f64 / 10.0)
        };
        let tobs = 62.0 + ((i * 11 + station.len()) % 19) as f64;
        out.push(Observation::new(
            station,
            day.format("%Y-%m-%d").to_string(),
            precipitation,
            tobs,
        ));
        day += Duration::days(step_days);
        i += 1;
    }
}

/// Observations in insertion order
pub fn fixture_observations() -> Vec<Observation> {
    let mut observations = Vec::new();
    series("USC00519397", "2016-01-01", DATASET_LAST_DATE, 2, &mut observations);
    series(MOST_ACTIVE, "2016-01-01", MOST_ACTIVE_LAST_DATE, 1, &mut observations);
    series("USC00513117", "2016-01-03", "2017-08-20", 7, &mut observations);
    observations
}

pub fn fixture_stations() -> Vec<Station> {
    vec![
        Station {
            station: "USC00519397".to_string(),
            name: "WAIKIKI 717.2, HI US".to_string(),
            latitude: 21.2716,
            longitude: -157.8168,
            elevation: 3.0,
        },
        Station {
            station: "USC00513117".to_string(),
            name: "KANEOHE 838.1, HI US".to_string(),
            latitude: 21.4234,
            longitude: -157.8015,
            elevation: 14.6,
        },
        Station {
            station: MOST_ACTIVE.to_string(),
            name: "WAIHEE 837.5, HI US".to_string(),
            latitude: 21.45167,
            longitude: -157.84889,
            elevation: 32.9,
        },
    ]
}

/// Write `observations` and `stations` into a new SQLite file at `path`
pub fn write_database(
    path: &Path,
    observations: &[Observation],
    stations: &[Station],
) -> rusqlite::Result<()> {
    let mut conn = Connection::open(path)?;
    conn.execute_batch(
        "CREATE TABLE measurement (
             id INTEGER PRIMARY KEY,
             station TEXT,
             date TEXT,
             prcp FLOAT,
             tobs FLOAT
         );
         CREATE TABLE station (
             id INTEGER PRIMARY KEY,
             station TEXT,
             name TEXT,
             latitude FLOAT,
             longitude FLOAT,
             elevation FLOAT
         );",
    )?;

    let tx = conn.transaction()?;
    {
        let mut insert = tx.prepare(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for obs in observations {
            insert.execute(params![obs.station, obs.date, obs.precipitation, obs.tobs])?;
        }

        let mut insert = tx.prepare(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for s in stations {
            insert.execute(params![s.station, s.name, s.latitude, s.longitude, s.elevation])?;
        }
    }
    tx.commit()
}

/// Write the standard fixture database
pub fn create_hawaii_db(path: &Path) -> rusqlite::Result<()> {
    write_database(path, &fixture_observations(), &fixture_stations())
}
