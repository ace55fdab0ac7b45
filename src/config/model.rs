use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Calendar month names, in order. Month filters are positional within this list.
pub const CALENDAR_MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Weekday names, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// The wildcard answer accepted for month and day prompts.
pub const ALL: &str = "all";

/// Number of months the bundled trip data covers.
const DEFAULT_MONTH_COUNT: usize = 6;

/// Default batch size for the raw sample viewer.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Backing data source for one city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CityConfig {
    /// CSV file name, relative to `data_dir` unless absolute.
    pub file: String,

    /// Whether the file carries `Gender` and `Birth Year` columns.
    #[serde(default)]
    pub demographics: bool,
}

impl CityConfig {
    #[must_use]
    pub fn new(file: &str, demographics: bool) -> Self {
        Self {
            file: file.to_string(),
            demographics,
        }
    }
}

/// Order in which the sample viewer reveals unseen rows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SampleOrder {
    #[default]
    Random,
    Sequential,
}

/// Immutable application configuration, built once and passed by reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory the city files are resolved against.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Rows revealed per "yes" in the sample viewer.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    #[serde(default)]
    pub sample_order: SampleOrder,

    /// Fixed seed for random sample order (reproducible previews).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Months offered at the month prompt. Must start at January and stay in calendar order.
    #[serde(default = "default_months")]
    pub months: Vec<String>,

    /// Weekdays offered at the day prompt.
    #[serde(default = "default_days")]
    pub days: Vec<String>,

    /// City name (lower case) to data source, in prompt order.
    #[serde(default = "default_cities")]
    pub cities: IndexMap<String, CityConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            sample_size: default_sample_size(),
            sample_order: SampleOrder::default(),
            seed: None,
            months: default_months(),
            days: default_days(),
            cities: default_cities(),
        }
    }
}

impl AppConfig {
    /// Lower-cases and trims every enumerated name so lookups are case-insensitive.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.months = self.months.iter().map(|m| normalize(m)).collect();
        self.days = self.days.iter().map(|d| normalize(d)).collect();
        self.cities = self
            .cities
            .into_iter()
            .map(|(name, city)| (normalize(&name), city))
            .collect();
        self
    }

    #[must_use]
    pub fn city(&self, name: &str) -> Option<&CityConfig> {
        self.cities.get(name)
    }

    #[must_use]
    pub fn city_names(&self) -> Vec<&str> {
        self.cities.keys().map(String::as_str).collect()
    }

    /// Resolve a city's data file against `data_dir`.
    #[must_use]
    pub fn city_path(&self, name: &str) -> Option<PathBuf> {
        self.city(name).map(|city| {
            let file = Path::new(&city.file);
            if file.is_absolute() {
                file.to_path_buf()
            } else {
                self.data_dir.join(file)
            }
        })
    }

    /// 1-indexed position of `month` within the configured month list.
    #[must_use]
    pub fn month_position(&self, month: &str) -> Option<u32> {
        self.months
            .iter()
            .position(|m| m == month)
            .and_then(|idx| u32::try_from(idx + 1).ok())
    }

    #[must_use]
    pub fn has_day(&self, day: &str) -> bool {
        self.days.iter().any(|d| d == day)
    }
}

pub(super) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

const fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

fn default_months() -> Vec<String> {
    CALENDAR_MONTHS[..DEFAULT_MONTH_COUNT]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_days() -> Vec<String> {
    WEEKDAYS.iter().map(ToString::to_string).collect()
}

fn default_cities() -> IndexMap<String, CityConfig> {
    let mut cities = IndexMap::new();
    cities.insert("chicago".to_string(), CityConfig::new("chicago.csv", true));
    cities.insert(
        "new york".to_string(),
        CityConfig::new("new_york_city.csv", true),
    );
    cities.insert(
        "washington".to_string(),
        CityConfig::new("washington.csv", false),
    );
    cities
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
