use std::fmt;

use crate::dataset::Dataset;
use crate::error::{BikeshareError, Result};

pub const TRIP_DURATION_STATS: &str = "trip duration stats";

const CENTIS_PER_SECOND: u64 = 100;
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripDurationStats {
    /// Rows that had a duration.
    pub trips: usize,
    pub total_secs: f64,
    pub mean_secs: f64,
}

impl TripDurationStats {
    #[must_use]
    pub fn total(&self) -> DurationBreakdown {
        DurationBreakdown::from_secs(self.total_secs)
    }

    #[must_use]
    pub fn mean(&self) -> DurationBreakdown {
        DurationBreakdown::from_secs(self.mean_secs)
    }
}

/// A second count split into days, hours, minutes and seconds.
///
/// Seconds keep two decimals; the value is rounded to the nearest
/// hundredth before it is split, so the parts always add back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    centis: u64,
}

impl DurationBreakdown {
    /// Negative and non-finite inputs clamp to zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_secs(secs: f64) -> Self {
        let centis = if secs.is_finite() && secs > 0.0 {
            (secs * CENTIS_PER_SECOND as f64).round() as u64
        } else {
            0
        };

        let whole = centis / CENTIS_PER_SECOND;
        Self {
            days: whole / SECONDS_PER_DAY,
            hours: whole % SECONDS_PER_DAY / SECONDS_PER_HOUR,
            minutes: whole % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            centis: whole % SECONDS_PER_MINUTE * CENTIS_PER_SECOND + centis % CENTIS_PER_SECOND,
        }
    }

    /// Remaining seconds after days, hours and minutes, `0.0..60.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn seconds(&self) -> f64 {
        self.centis as f64 / CENTIS_PER_SECOND as f64
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(&self) -> f64 {
        let whole = self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE;
        whole as f64 + self.seconds()
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

impl fmt::Display for DurationBreakdown {
    /// `1 day, 2 hours, 3 minutes, 4.5 seconds`; leading zero units are skipped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = [(self.days, "day"), (self.hours, "hour"), (self.minutes, "minute")];
        let mut parts: Vec<String> = units
            .iter()
            .skip_while(|(n, _)| *n == 0)
            .map(|&(n, unit)| plural(n, unit))
            .collect();

        let whole = self.centis / CENTIS_PER_SECOND;
        let frac = self.centis % CENTIS_PER_SECOND;
        parts.push(if frac == 0 {
            plural(whole, "second")
        } else if frac % 10 == 0 {
            format!("{whole}.{} seconds", frac / 10)
        } else {
            format!("{whole}.{frac:02} seconds")
        });

        f.write_str(&parts.join(", "))
    }
}

/// Sum and mean of the trip duration column.
///
/// Blank durations are skipped; the mean divides by the number of rows that
/// have one.
///
/// # Errors
/// Returns [`BikeshareError::EmptyResult`] when no row has a duration.
#[allow(clippy::cast_precision_loss)]
pub fn trip_duration_stats(ds: &Dataset) -> Result<TripDurationStats> {
    let (trips, total_secs) = ds
        .iter()
        .filter_map(|trip| trip.trip_duration)
        .fold((0_usize, 0.0_f64), |(n, sum), secs| (n + 1, sum + secs));

    if trips == 0 {
        return Err(BikeshareError::EmptyResult {
            statistic: TRIP_DURATION_STATS,
        });
    }

    Ok(TripDurationStats {
        trips,
        total_secs,
        mean_secs: total_secs / trips as f64,
    })
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
