use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::filter::{month_name, weekday_title};
use crate::stats::{
    CityReport, DurationBreakdown, Outcome, Popular, StationStats, TimeStats, TripDurationStats,
    UserStats,
};

use super::ReportFormatter;

pub struct JsonReportFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    city: &'a str,
    month: String,
    day: String,
    rows: usize,
    time: Block<JsonTime>,
    stations: Block<JsonStations<'a>>,
    trip_duration: Block<JsonDurations>,
    users: Block<JsonUsers<'a>>,
}

/// One routine's result: either `data` or `error`, always with timing.
#[derive(Serialize)]
struct Block<T> {
    elapsed_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct Mode<T> {
    value: T,
    count: usize,
}

impl<T> From<Popular<T>> for Mode<T> {
    fn from(p: Popular<T>) -> Self {
        Self {
            value: p.value,
            count: p.count,
        }
    }
}

#[derive(Serialize)]
struct JsonTime {
    month: Mode<String>,
    weekday: Mode<String>,
    hour: Mode<u32>,
}

#[derive(Serialize)]
struct JsonStations<'a> {
    start: Mode<&'a str>,
    end: Mode<&'a str>,
    trip: Mode<&'a str>,
}

#[derive(Serialize)]
struct JsonDuration {
    seconds: f64,
    display: String,
}

impl From<DurationBreakdown> for JsonDuration {
    fn from(b: DurationBreakdown) -> Self {
        Self {
            seconds: b.as_secs_f64(),
            display: b.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsonDurations {
    trips: usize,
    total: JsonDuration,
    mean: JsonDuration,
}

#[derive(Serialize)]
struct JsonUsers<'a> {
    user_types: &'a IndexMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    genders: Option<&'a IndexMap<String, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_years: Option<JsonBirthYears>,
}

#[derive(Serialize)]
struct JsonBirthYears {
    earliest: i32,
    most_recent: i32,
    most_common: Mode<i32>,
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &CityReport) -> Result<String> {
        let output = JsonReport {
            city: &report.selection.city,
            month: report.selection.month.to_string(),
            day: report.selection.day.to_string(),
            rows: report.rows,
            time: block(&report.time, convert_time),
            stations: block(&report.stations, convert_stations),
            trip_duration: block(&report.durations, convert_durations),
            users: block(&report.users, convert_users),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn block<'a, T, J>(outcome: &'a Outcome<T>, convert: impl FnOnce(&'a T) -> J) -> Block<J> {
    let (data, error) = match &outcome.value {
        Ok(value) => (Some(convert(value)), None),
        Err(e) => (None, Some(e.to_string())),
    };
    Block {
        elapsed_secs: outcome.elapsed.as_secs_f64(),
        data,
        error,
    }
}

fn convert_time(stats: &TimeStats) -> JsonTime {
    JsonTime {
        month: Mode {
            value: month_name(stats.month.value).unwrap_or_default().to_string(),
            count: stats.month.count,
        },
        weekday: Mode {
            value: weekday_title(stats.weekday.value),
            count: stats.weekday.count,
        },
        hour: stats.hour.into(),
    }
}

fn borrowed(p: &Popular<String>) -> Mode<&str> {
    Mode {
        value: p.value.as_str(),
        count: p.count,
    }
}

fn convert_stations(stats: &StationStats) -> JsonStations<'_> {
    JsonStations {
        start: borrowed(&stats.start),
        end: borrowed(&stats.end),
        trip: borrowed(&stats.trip),
    }
}

fn convert_durations(stats: &TripDurationStats) -> JsonDurations {
    JsonDurations {
        trips: stats.trips,
        total: stats.total().into(),
        mean: stats.mean().into(),
    }
}

fn convert_users(stats: &UserStats) -> JsonUsers<'_> {
    let demographics = stats.demographics.as_ref();
    JsonUsers {
        user_types: &stats.user_types,
        genders: demographics.map(|d| &d.genders),
        birth_years: demographics
            .and_then(|d| d.birth_years)
            .map(|years| JsonBirthYears {
                earliest: years.earliest,
                most_recent: years.most_recent,
                most_common: years.most_common.into(),
            }),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
