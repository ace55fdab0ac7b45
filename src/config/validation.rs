//! Semantic validation for `AppConfig`.
//!
//! Runs after TOML parsing and normalization, so every name compared here is
//! already lower case.

use std::collections::{HashMap, HashSet};

use crate::error::{BikeshareError, Result};

use super::model::{ALL, AppConfig, CALENDAR_MONTHS, WEEKDAYS, normalize};

/// Validate a normalized configuration.
///
/// # Errors
/// Returns `BikeshareError::Config` describing the first problem found.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    validate_cities(config)?;
    validate_months(&config.months)?;
    validate_days(&config.days)?;

    if config.sample_size == 0 {
        return Err(BikeshareError::Config(
            "sample_size must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

/// City keys must stay distinct once trimmed and lower-cased.
///
/// Runs on the raw parsed config, since normalization would fold the
/// duplicates into one entry.
///
/// # Errors
/// Returns `BikeshareError::Config` naming the colliding keys.
pub fn validate_city_names(config: &AppConfig) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for name in config.cities.keys() {
        if let Some(first) = seen.insert(normalize(name), name) {
            return Err(BikeshareError::Config(format!(
                "duplicate city '{name}' (same as '{first}')"
            )));
        }
    }
    Ok(())
}

fn validate_cities(config: &AppConfig) -> Result<()> {
    if config.cities.is_empty() {
        return Err(BikeshareError::Config(
            "at least one city must be configured".to_string(),
        ));
    }

    for (name, city) in &config.cities {
        if name.is_empty() || name == ALL {
            return Err(BikeshareError::Config(format!(
                "invalid city name '{name}'"
            )));
        }
        if city.file.trim().is_empty() {
            return Err(BikeshareError::Config(format!(
                "cities.{name}.file cannot be empty"
            )));
        }
    }

    Ok(())
}

/// Month filters are positional, so the list must be a calendar prefix:
/// `months[i]` is calendar month `i + 1`.
fn validate_months(months: &[String]) -> Result<()> {
    if months.is_empty() {
        return Err(BikeshareError::Config("months cannot be empty".to_string()));
    }

    for (idx, month) in months.iter().enumerate() {
        match CALENDAR_MONTHS.get(idx) {
            Some(expected) if *expected == month => {}
            Some(expected) => {
                return Err(BikeshareError::Config(format!(
                    "months[{idx}] must be '{expected}', got '{month}' (months start at january and follow calendar order)"
                )));
            }
            None => {
                return Err(BikeshareError::Config(format!(
                    "months has {} entries, at most 12 are allowed",
                    months.len()
                )));
            }
        }
    }

    Ok(())
}

fn validate_days(days: &[String]) -> Result<()> {
    if days.is_empty() {
        return Err(BikeshareError::Config("days cannot be empty".to_string()));
    }

    let mut seen = HashSet::new();
    for day in days {
        if !WEEKDAYS.contains(&day.as_str()) {
            return Err(BikeshareError::Config(format!("unknown weekday '{day}'")));
        }
        if !seen.insert(day.as_str()) {
            return Err(BikeshareError::Config(format!("duplicate weekday '{day}'")));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
