//! Descriptive statistics over a filtered [`Dataset`].
//!
//! Each routine is independent: one failing (typically with
//! [`BikeshareError::EmptyResult`](crate::error::BikeshareError::EmptyResult))
//! never prevents the others from running.

mod duration;
mod mode;
mod station;
mod time;
mod user;

use std::time::{Duration, Instant};

pub use duration::{
    DurationBreakdown, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, TRIP_DURATION_STATS,
    TripDurationStats, trip_duration_stats,
};
pub use mode::{ModeCounter, Popular, mode_of};
pub use station::{PAIR_SEPARATOR, STATION_STATS, StationStats, station_stats, trip_key};
pub use time::{TIME_STATS, TimeStats, time_stats};
pub use user::{BirthYearStats, Demographics, USER_STATS, UserStats, user_stats};

use crate::config::CityConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::filter::FilterSelection;

/// A value and the wall-clock time it took to produce.
#[derive(Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Result of one timed statistics routine.
pub type Outcome<T> = Timed<Result<T>>;

/// Everything reported for one session iteration.
#[derive(Debug)]
pub struct CityReport {
    pub selection: FilterSelection,
    pub rows: usize,
    pub time: Outcome<TimeStats>,
    pub stations: Outcome<StationStats>,
    pub durations: Outcome<TripDurationStats>,
    pub users: Outcome<UserStats>,
}

impl CityReport {
    /// Run all four routines against `ds`.
    #[must_use]
    pub fn compute(selection: FilterSelection, city: &CityConfig, ds: &Dataset) -> Self {
        let time = run(TIME_STATS, || time_stats(ds));
        let stations = run(STATION_STATS, || station_stats(ds));
        let durations = run(TRIP_DURATION_STATS, || trip_duration_stats(ds));
        let users = run(USER_STATS, || user_stats(city, ds));

        Self {
            selection,
            rows: ds.len(),
            time,
            stations,
            durations,
            users,
        }
    }
}

fn run<T>(name: &'static str, routine: impl FnOnce() -> Result<T>) -> Outcome<T> {
    let outcome = timed(routine);
    match &outcome.value {
        Ok(_) => tracing::debug!(statistic = name, elapsed = ?outcome.elapsed, "computed"),
        Err(e) => tracing::info!(statistic = name, error = %e, "statistic unavailable"),
    }
    outcome
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
