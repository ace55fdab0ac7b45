use chrono::Weekday;

use crate::dataset::{Dataset, Trip};
use crate::error::{BikeshareError, Result};

use super::mode::{Popular, mode_of};

pub const TIME_STATS: &str = "time stats";

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Calendar month, 1..=12.
    pub month: Popular<u32>,
    pub weekday: Popular<Weekday>,
    /// Start hour, 0..=23.
    pub hour: Popular<u32>,
}

/// Most frequent month, weekday and start hour.
///
/// # Errors
/// Returns [`BikeshareError::EmptyResult`] when the dataset has no rows.
pub fn time_stats(ds: &Dataset) -> Result<TimeStats> {
    let month = mode_of(ds.iter().map(Trip::month));
    let weekday = mode_of(ds.iter().map(Trip::weekday));
    let hour = mode_of(ds.iter().map(Trip::hour));

    match (month, weekday, hour) {
        (Some(month), Some(weekday), Some(hour)) => Ok(TimeStats {
            month,
            weekday,
            hour,
        }),
        _ => Err(BikeshareError::EmptyResult {
            statistic: TIME_STATS,
        }),
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
