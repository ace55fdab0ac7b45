mod loader;
mod record;

pub use loader::{
    BIRTH_YEAR, END_STATION, END_TIME, GENDER, REQUIRED_COLUMNS, START_STATION, START_TIME,
    TRIP_DURATION, USER_TYPE, load, read_trips,
};
pub use record::{DerivedFields, TIMESTAMP_FORMATS, Trip, parse_timestamp};

use crate::filter::{DayFilter, MonthFilter};

/// Trips for one city, in source row order.
///
/// Immutable once built: filtering produces a new `Dataset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    city: String,
    trips: Vec<Trip>,
}

impl Dataset {
    #[must_use]
    pub fn new(city: impl Into<String>, trips: Vec<Trip>) -> Self {
        Self {
            city: city.into(),
            trips,
        }
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Rows whose derived month and weekday satisfy both filters, order preserved.
    #[must_use]
    pub fn filtered(&self, month: MonthFilter, day: DayFilter) -> Self {
        let trips = self
            .trips
            .iter()
            .filter(|trip| month.matches(trip.month()) && day.matches(trip.weekday()))
            .cloned()
            .collect();
        Self {
            city: self.city.clone(),
            trips,
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
