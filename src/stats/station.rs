use crate::dataset::Dataset;
use crate::error::{BikeshareError, Result};

use super::mode::{ModeCounter, Popular};

pub const STATION_STATS: &str = "station stats";

/// Joins start and end station names into a trip key.
///
/// Station names may themselves contain `&`, so two different pairs can map
/// to the same key. Such collisions are counted together.
pub const PAIR_SEPARATOR: char = '&';

#[must_use]
pub fn trip_key(start: &str, end: &str) -> String {
    format!("{start}{PAIR_SEPARATOR}{end}")
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start: Popular<String>,
    pub end: Popular<String>,
    /// Keyed with [`trip_key`].
    pub trip: Popular<String>,
}

/// Most frequent start station, end station and start/end pair.
///
/// Blank station cells are not counted, and a pair is only counted when both
/// ends are present.
///
/// # Errors
/// Returns [`BikeshareError::EmptyResult`] when the dataset has no rows, or
/// no row has both stations.
pub fn station_stats(ds: &Dataset) -> Result<StationStats> {
    let mut starts = ModeCounter::new();
    let mut ends = ModeCounter::new();
    let mut trips = ModeCounter::new();

    for trip in ds {
        let start = trip.start_station.as_deref();
        let end = trip.end_station.as_deref();
        if let Some(start) = start {
            starts.observe(start);
        }
        if let Some(end) = end {
            ends.observe(end);
        }
        if let (Some(start), Some(end)) = (start, end) {
            trips.observe(trip_key(start, end));
        }
    }

    let owned = |p: Popular<&str>| Popular {
        value: p.value.to_string(),
        count: p.count,
    };

    match (starts.into_mode(), ends.into_mode(), trips.into_mode()) {
        (Some(start), Some(end), Some(trip)) => Ok(StationStats {
            start: owned(start),
            end: owned(end),
            trip,
        }),
        _ => Err(BikeshareError::EmptyResult {
            statistic: STATION_STATS,
        }),
    }
}

#[cfg(test)]
#[path = "station_tests.rs"]
mod tests;
