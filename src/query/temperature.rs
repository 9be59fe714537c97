//! Temperature statistics over a date range.

use crate::state::Observation;

/// Inclusive date bounds compared as plain strings.
///
/// ISO-8601 `YYYY-MM-DD` dates sort lexicographically in calendar order,
/// so no date parsing happens here.
#[derive(Debug, Clone, Copy)]
pub struct DateRange<'a> {
    pub start: &'a str,
    pub end: Option<&'a str>,
}

impl<'a> DateRange<'a> {
    pub fn new(start: &'a str, end: Option<&'a str>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: &str) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }
}

/// Min/avg/max of `tobs`; every field is `None` when no row matched
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

/// Aggregate `tobs` over the observations whose date falls in the range
pub fn aggregate_temperature(
    observations: &[Observation],
    start: &str,
    end: Option<&str>,
) -> TemperatureStats {
    let range = DateRange::new(start, end);
    summarize(
        observations
            .iter()
            .filter(|obs| range.contains(&obs.date))
            .map(|obs| obs.tobs),
    )
}

fn summarize(values: impl Iterator<Item = f64>) -> TemperatureStats {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for value in values {
        count += 1;
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }

    if count == 0 {
        return TemperatureStats::default();
    }

    // Rounding in the mean can leave it a hair outside [min, max] when all
    // values are equal.
    let avg = (sum / count as f64).max(min).min(max);
    TemperatureStats {
        min: Some(min),
        avg: Some(avg),
        max: Some(max),
    }
}
