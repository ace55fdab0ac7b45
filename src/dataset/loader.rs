//! CSV loading for city trip files.
//!
//! Reads the whole file into memory, validates the header, parses each row
//! into a [`Trip`] (deriving month/weekday/hour on the way), and finally
//! applies the month/day filters.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::config::AppConfig;
use crate::error::{BikeshareError, Result};
use crate::filter::{DayFilter, MonthFilter};
use crate::output::LoadProgress;

use super::Dataset;
use super::record::{Trip, parse_timestamp};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city file must have.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    START_TIME,
    END_TIME,
    TRIP_DURATION,
    START_STATION,
    END_STATION,
    USER_TYPE,
];

/// Header positions resolved once per file.
struct ColumnIndex {
    row_id: Option<usize>,
    start_time: usize,
    end_time: usize,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, demographics: bool, path: &Path) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let mut required: Vec<&str> = REQUIRED_COLUMNS.to_vec();
        if demographics {
            required.extend([GENDER, BIRTH_YEAR]);
        }
        let missing: Vec<String> = required
            .into_iter()
            .filter(|&name| find(name).is_none())
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(BikeshareError::MissingColumns {
                path: path.to_path_buf(),
                columns: missing,
            });
        }

        // Presence was checked above.
        let at = |name: &str| find(name).unwrap_or_default();

        Ok(Self {
            row_id: headers.get(0).filter(|h| h.is_empty()).map(|_| 0),
            start_time: at(START_TIME),
            end_time: at(END_TIME),
            trip_duration: at(TRIP_DURATION),
            start_station: at(START_STATION),
            end_station: at(END_STATION),
            user_type: at(USER_TYPE),
            gender: demographics.then(|| at(GENDER)),
            birth_year: demographics.then(|| at(BIRTH_YEAR)),
        })
    }
}

/// Load a city's trips and apply the month/day filters.
///
/// # Errors
/// Returns a data-source error if the city is unknown, the file cannot be
/// opened, a required column is missing, or a row cannot be parsed.
pub fn load(
    config: &AppConfig,
    city: &str,
    month: MonthFilter,
    day: DayFilter,
) -> Result<Dataset> {
    let (path, city_config) = config
        .city_path(city)
        .zip(config.city(city))
        .ok_or_else(|| BikeshareError::DataSource {
            path: config.data_dir.clone(),
            reason: format!("no data source configured for city '{city}'"),
        })?;

    tracing::info!(city, path = %path.display(), "loading trip data");

    let file = File::open(&path).map_err(|e| BikeshareError::DataSource {
        path: path.clone(),
        reason: format!("cannot open file: {e}"),
    })?;

    let progress = LoadProgress::new(&format!("Loading {city} trips"));
    let trips = read_trips(BufReader::new(file), &path, city_config.demographics, &progress);
    tracing::debug!(rows = progress.position(), "parsed trip rows");
    progress.finish();
    let full = Dataset::new(city, trips?);

    let filtered = full.filtered(month, day);
    tracing::debug!(
        total = full.len(),
        kept = filtered.len(),
        %month,
        %day,
        "applied filters"
    );
    Ok(filtered)
}

/// Parse trips from CSV text. `path` is only used in error messages.
///
/// # Errors
/// Returns a data-source error for a bad header, a missing column, or an
/// unparseable row.
pub fn read_trips<R: Read>(
    reader: R,
    path: &Path,
    demographics: bool,
    progress: &LoadProgress,
) -> Result<Vec<Trip>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers().map_err(|e| csv_error(path, e))?.clone();
    let columns = ColumnIndex::resolve(&headers, demographics, path)?;

    let mut trips = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| csv_error(path, e))?;
        trips.push(parse_row(&record, &columns, row, path)?);
        progress.inc();
    }

    Ok(trips)
}

fn csv_error(path: &Path, source: csv::Error) -> BikeshareError {
    BikeshareError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn parse_row(record: &StringRecord, columns: &ColumnIndex, row: usize, path: &Path) -> Result<Trip> {
    let line = record.position().map_or(row as u64 + 2, csv::Position::line);
    let bad_row = |reason: String| BikeshareError::DataSource {
        path: path.to_path_buf(),
        reason: format!("line {line}: {reason}"),
    };
    let field = |idx: usize| record.get(idx).unwrap_or_default();
    let optional = |idx: Option<usize>| {
        idx.map(field)
            .filter(|value| !value.is_empty())
            .map(ToString::to_string)
    };

    let raw_start = field(columns.start_time);
    let start_time = parse_timestamp(raw_start)
        .ok_or_else(|| bad_row(format!("invalid {START_TIME} '{raw_start}'")))?;

    let trip_duration = match optional(Some(columns.trip_duration)) {
        Some(raw) => Some(
            raw.parse::<f64>()
                .ok()
                .filter(|secs| secs.is_finite() && *secs >= 0.0)
                .ok_or_else(|| bad_row(format!("invalid {TRIP_DURATION} '{raw}'")))?,
        ),
        None => None,
    };

    let birth_year = match optional(columns.birth_year) {
        Some(raw) => Some(
            raw.parse::<f64>()
                .ok()
                .filter(|year| year.is_finite())
                .ok_or_else(|| bad_row(format!("invalid {BIRTH_YEAR} '{raw}'")))?,
        ),
        None => None,
    };

    let id = columns
        .row_id
        .and_then(|idx| field(idx).parse::<u64>().ok())
        .unwrap_or(row as u64);

    Ok(Trip::new(
        id,
        start_time,
        field(columns.end_time).to_string(),
        trip_duration,
        optional(Some(columns.start_station)),
        optional(Some(columns.end_station)),
        optional(Some(columns.user_type)),
        optional(columns.gender),
        birth_year,
    ))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
