use std::io::{IsTerminal, Write};
use std::time::Duration;

use crate::dataset::Trip;
use crate::error::{BikeshareError, Result};
use crate::filter::{month_name, title_case, weekday_title};
use crate::stats::{CityReport, Outcome, StationStats, TimeStats, TripDurationStats, UserStats};

use super::{ColorMode, ReportFormatter, ansi, rule};

pub const TIME_HEADER: &str = "Calculating The Most Frequent Times of Travel...";
pub const STATION_HEADER: &str = "Calculating The Most Popular Stations and Trip...";
pub const DURATION_HEADER: &str = "Calculating Trip Duration...";
pub const USER_HEADER: &str = "Calculating User Stats...";
pub const NO_DATA: &str = "No data for this selection.";

pub struct TextReportFormatter {
    use_colors: bool,
}

impl TextReportFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stdout().is_terminal()),
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn header(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", ansi::BOLD, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn no_data(&self, error: &BikeshareError) -> String {
        let text = if matches!(error, BikeshareError::EmptyResult { .. }) {
            NO_DATA.to_string()
        } else {
            error.to_string()
        };
        if self.use_colors {
            format!("{}{text}{}", ansi::YELLOW, ansi::RESET)
        } else {
            text
        }
    }

    /// Header, body (or the failure), timing and rule for one routine.
    fn write_block<T>(
        &self,
        output: &mut Vec<u8>,
        header: &str,
        outcome: &Outcome<T>,
        body: impl FnOnce(&mut Vec<u8>, &T),
    ) {
        writeln!(output).ok();
        writeln!(output, "{}", self.header(header)).ok();
        writeln!(output).ok();
        match &outcome.value {
            Ok(value) => body(output, value),
            Err(e) => {
                writeln!(output, "{}", self.no_data(e)).ok();
            }
        }
        writeln!(output).ok();
        writeln!(output, "{}", took(outcome.elapsed)).ok();
        writeln!(output, "{}", rule()).ok();
    }
}

fn took(elapsed: Duration) -> String {
    format!("This took {:.6} seconds.", elapsed.as_secs_f64())
}

fn write_time(output: &mut Vec<u8>, stats: &TimeStats) {
    let month = month_name(stats.month.value).map_or_else(|| stats.month.value.to_string(), title_case);
    writeln!(output, "Most Frequent Month: {month}").ok();
    writeln!(
        output,
        "Most Frequent Day of Week: {}",
        weekday_title(stats.weekday.value)
    )
    .ok();
    writeln!(output, "Most Frequent Start Hour: {}", stats.hour.value).ok();
}

fn write_stations(output: &mut Vec<u8>, stats: &StationStats) {
    writeln!(output, "Most Frequent Start Station: {}", stats.start.value).ok();
    writeln!(output, "Most Frequent End Station: {}", stats.end.value).ok();
    writeln!(output, "Most Frequent Combined Station: {}", stats.trip.value).ok();
}

fn write_durations(output: &mut Vec<u8>, stats: &TripDurationStats) {
    writeln!(output, "Total Travel Time: {}", stats.total()).ok();
    writeln!(output, "Average Travel Time: {}", stats.mean()).ok();
}

fn write_users(output: &mut Vec<u8>, stats: &UserStats) {
    writeln!(output, "Counts of user types:").ok();
    for (user_type, count) in &stats.user_types {
        writeln!(output, "  {user_type}: {count}").ok();
    }

    let Some(demographics) = &stats.demographics else {
        return;
    };

    writeln!(output, "Counts of gender:").ok();
    for (gender, count) in &demographics.genders {
        writeln!(output, "  {gender}: {count}").ok();
    }

    match &demographics.birth_years {
        Some(years) => {
            writeln!(output, "The Earliest Year of Birth: {}", years.earliest).ok();
            writeln!(output, "The Most Recent Year of Birth: {}", years.most_recent).ok();
            writeln!(
                output,
                "The Most Common Year of Birth: {}",
                years.most_common.value
            )
            .ok();
        }
        None => {
            writeln!(output, "No birth year data.").ok();
        }
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, report: &CityReport) -> Result<String> {
        let mut output = Vec::new();

        self.write_block(&mut output, TIME_HEADER, &report.time, write_time);
        self.write_block(&mut output, STATION_HEADER, &report.stations, write_stations);
        self.write_block(&mut output, DURATION_HEADER, &report.durations, write_durations);
        self.write_block(&mut output, USER_HEADER, &report.users, write_users);

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

/// Render raw rows for the sample viewer, one block per trip.
#[must_use]
pub fn format_sample(trips: &[&Trip], demographics: bool) -> String {
    let mut output = Vec::new();
    let missing = || "-".to_string();

    for trip in trips {
        writeln!(output, "Row {}", trip.id).ok();
        writeln!(output, "  Start Time: {}", trip.start_time.format("%Y-%m-%d %H:%M:%S")).ok();
        writeln!(output, "  End Time: {}", trip.end_time).ok();
        writeln!(
            output,
            "  Trip Duration: {}",
            trip.trip_duration.map_or_else(missing, |secs| secs.to_string())
        )
        .ok();
        writeln!(
            output,
            "  Start Station: {}",
            trip.start_station.clone().unwrap_or_else(missing)
        )
        .ok();
        writeln!(
            output,
            "  End Station: {}",
            trip.end_station.clone().unwrap_or_else(missing)
        )
        .ok();
        writeln!(
            output,
            "  User Type: {}",
            trip.user_type.clone().unwrap_or_else(missing)
        )
        .ok();
        if demographics {
            writeln!(
                output,
                "  Gender: {}",
                trip.gender.clone().unwrap_or_else(missing)
            )
            .ok();
            writeln!(
                output,
                "  Birth Year: {}",
                trip.birth_year_whole()
                    .map_or_else(missing, |year| year.to_string())
            )
            .ok();
        }
    }

    String::from_utf8_lossy(&output).into_owned()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
