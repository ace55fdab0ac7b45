use indexmap::IndexMap;

use crate::config::CityConfig;
use crate::dataset::Dataset;
use crate::error::{BikeshareError, Result};

use super::mode::{ModeCounter, Popular};

pub const USER_STATS: &str = "user stats";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Rows per user type in first-seen order; rows without a type are not counted.
    pub user_types: IndexMap<String, usize>,
    /// `None` for cities whose data carries no gender or birth year.
    pub demographics: Option<Demographics>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub genders: IndexMap<String, usize>,
    /// `None` when no row in the selection has a birth year.
    pub birth_years: Option<BirthYearStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: Popular<i32>,
}

/// User type counts, plus gender and birth year figures where the city has them.
///
/// # Errors
/// Returns [`BikeshareError::EmptyResult`] when the dataset has no rows.
pub fn user_stats(city: &CityConfig, ds: &Dataset) -> Result<UserStats> {
    if ds.is_empty() {
        return Err(BikeshareError::EmptyResult {
            statistic: USER_STATS,
        });
    }

    let user_types: ModeCounter<String> = ds
        .iter()
        .filter_map(|trip| trip.user_type.clone())
        .collect();

    let demographics = city.demographics.then(|| demographics_of(ds));

    Ok(UserStats {
        user_types: user_types.into_counts(),
        demographics,
    })
}

fn demographics_of(ds: &Dataset) -> Demographics {
    let genders: ModeCounter<String> = ds.iter().filter_map(|trip| trip.gender.clone()).collect();

    let years: ModeCounter<i32> = ds.iter().filter_map(|trip| trip.birth_year_whole()).collect();
    let earliest = years.counts().keys().min().copied();
    let most_recent = years.counts().keys().max().copied();

    let birth_years = match (earliest, most_recent, years.into_mode()) {
        (Some(earliest), Some(most_recent), Some(most_common)) => Some(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        }),
        _ => None,
    };

    Demographics {
        genders: genders.into_counts(),
        birth_years,
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
