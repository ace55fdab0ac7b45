use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Timestamp layouts accepted for `Start Time`.
pub const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a trip timestamp in any of the accepted layouts.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Fields computed from the start timestamp.
///
/// Always built through [`DerivedFields::from_timestamp`], so they can never
/// disagree with the timestamp they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedFields {
    /// 1..=12
    pub month: u32,
    pub weekday: Weekday,
    /// 0..=23
    pub hour: u32,
}

impl DerivedFields {
    #[must_use]
    pub fn from_timestamp(ts: &NaiveDateTime) -> Self {
        Self {
            month: ts.month(),
            weekday: ts.weekday(),
            hour: ts.hour(),
        }
    }
}

/// One trip row.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Row id: the file's unnamed index column when present, otherwise the 0-based data row.
    pub id: u64,
    pub start_time: NaiveDateTime,
    /// Kept verbatim; only shown in raw samples.
    pub end_time: String,
    /// Seconds, non-negative. `None` when the cell was blank.
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    derived: DerivedFields,
}

impl Trip {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        start_time: NaiveDateTime,
        end_time: String,
        trip_duration: Option<f64>,
        start_station: Option<String>,
        end_station: Option<String>,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<f64>,
    ) -> Self {
        let derived = DerivedFields::from_timestamp(&start_time);
        Self {
            id,
            start_time,
            end_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            derived,
        }
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.derived.month
    }

    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.derived.weekday
    }

    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.derived.hour
    }

    /// Birth year coerced to a whole year.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn birth_year_whole(&self) -> Option<i32> {
        self.birth_year.map(|year| year.trunc() as i32)
    }
}
