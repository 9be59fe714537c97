//! Print a summary of a SQLite climate dataset: row counts, date span and
//! the station activity ranking used by the `/api/v1.0/tobs` endpoint.

use anyhow::Context;
use std::path::PathBuf;

use kona::data_loader::load_dataset;
use kona::query::{aggregate_temperature, station_activity};

fn main() -> anyhow::Result<()> {
    let file_path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: inspect_dataset <path/to/dataset.sqlite>")?;

    println!("Inspecting dataset: {}", file_path.display());

    let dataset = load_dataset(&file_path)
        .with_context(|| format!("failed to load {}", file_path.display()))?;

    println!("\n=== TABLES ===");
    println!("  measurement: {} rows", dataset.observations.len());
    println!("  station:     {} rows", dataset.stations.len());

    match dataset.date_span() {
        Some((first, last)) => {
            println!("\nDate span: {} .. {}", first, last);
            let stats = aggregate_temperature(&dataset.observations, first, Some(last));
            println!(
                "Temperature: min {:?}, avg {:?}, max {:?}",
                stats.min, stats.avg, stats.max
            );
        }
        None => println!("\nNo observations"),
    }

    println!("\n=== STATION ACTIVITY ===");
    for (rank, activity) in station_activity(&dataset.observations).iter().enumerate() {
        let name = dataset
            .stations
            .iter()
            .find(|s| s.station == activity.station)
            .map(|s| s.name.as_str())
            .unwrap_or("(no station metadata)");
        println!(
            "  {:>2}. {} {:>6} rows  {}",
            rank + 1,
            activity.station,
            activity.count,
            name
        );
    }

    Ok(())
}
