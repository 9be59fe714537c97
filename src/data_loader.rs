//! SQLite dataset loading.
//!
//! Reads the `measurement` and `station` tables of a climate database into
//! memory once at startup. The table layouts are fixed:
//!
//! - `measurement(station, date, prcp, tobs)`
//! - `station(station, name, latitude, longitude, elevation)`
//!
//! Rows keep their `rowid` order so listings mirror the source file.

use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{KonaError, Result};
use crate::logging::log_data_load_stats;
use crate::state::{AppState, Dataset, Observation, Station};

/// Load a SQLite dataset into memory and create the application state
pub fn load_sqlite(path: &Path, config: Config) -> Result<AppState> {
    let start = Instant::now();
    let dataset = load_dataset(path)?;

    log_data_load_stats(
        &path.display().to_string(),
        dataset.observations.len(),
        dataset.stations.len(),
        dataset.date_span(),
        dataset.memory_usage(),
    );
    debug!(
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Dataset load finished"
    );

    Ok(AppState::new(config, dataset))
}

/// Read both tables from the file at `path`
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    // Check if the file exists; opening read-only would fail anyway, but
    // with a much less useful message
    if !path.exists() {
        return Err(KonaError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    info!("Opened SQLite dataset: {}", path.display());

    read_dataset(&conn)
}

/// Read both tables through an open connection
pub fn read_dataset(conn: &Connection) -> Result<Dataset> {
    let observations = read_observations(conn)?;
    let stations = read_stations(conn)?;
    Ok(Dataset::new(observations, stations))
}

fn read_observations(conn: &Connection) -> Result<Vec<Observation>> {
    let mut stmt =
        conn.prepare("SELECT station, date, prcp, tobs FROM measurement ORDER BY rowid")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Observation {
                station: row.get(0)?,
                date: row.get(1)?,
                precipitation: row.get(2)?,
                tobs: row.get(3)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    debug!("Read {} measurement rows", rows.len());
    Ok(rows)
}

fn read_stations(conn: &Connection) -> Result<Vec<Station>> {
    let mut stmt = conn.prepare(
        "SELECT station, name, latitude, longitude, elevation FROM station ORDER BY rowid",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Station {
                station: row.get(0)?,
                name: row.get(1)?,
                latitude: row.get(2)?,
                longitude: row.get(3)?,
                elevation: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    debug!("Read {} station rows", rows.len());
    Ok(rows)
}

#[cfg(test)]
fn create_test_database(path: &Path) -> Result<()> {
    let conn = Connection::open(path)?;
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
         );
         INSERT INTO measurement (station, date, prcp, tobs) VALUES
             ('USC00519397', '2010-01-01', 0.08, 65.0),
             ('USC00519397', '2010-01-02', NULL, 63.0),
             ('USC00513117', '2010-01-01', 0.28, 67.0);
         INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
             ('USC00519397', 'WAIKIKI 717.2, HI US', 21.2716, -157.8168, 3.0),
             ('USC00513117', 'KANEOHE 838.1, HI US', 21.4234, -157.8015, 14.6);",
    )?;
    Ok(())
}
