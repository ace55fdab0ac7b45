//! Filter selection and the interactive validator that produces it.

use std::fmt;
use std::io::{BufRead, Write};

use chrono::Weekday;

use crate::config::{ALL, AppConfig, CALENDAR_MONTHS, WEEKDAYS};
use crate::console::Console;
use crate::error::Result;
use crate::output::rule;

/// Month restriction. `Month(n)` holds the 1-indexed calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u32),
}

impl MonthFilter {
    #[must_use]
    pub const fn matches(self, month: u32) -> bool {
        match self {
            Self::All => true,
            Self::Month(m) => m == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Month(m) => f.write_str(month_name(*m).unwrap_or("unknown")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    #[must_use]
    pub fn matches(self, weekday: Weekday) -> bool {
        match self {
            Self::All => true,
            Self::Day(d) => d == weekday,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Day(d) => f.write_str(WEEKDAYS[d.num_days_from_monday() as usize]),
        }
    }
}

/// A validated (city, month, day) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: String,
    pub month: MonthFilter,
    pub day: DayFilter,
}

/// Lower-case calendar name for a 1-indexed month.
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    CALENDAR_MONTHS.get(idx).copied()
}

/// Parse a lower-case weekday name.
#[must_use]
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Title-cased weekday name, e.g. `Friday`.
#[must_use]
pub fn weekday_title(weekday: Weekday) -> String {
    title_case(WEEKDAYS[weekday.num_days_from_monday() as usize])
}

/// Upper-case the first letter of every word.
#[must_use]
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render options as `A, B or C`.
#[must_use]
pub fn join_options<S: AsRef<str>>(options: &[S]) -> String {
    let titled: Vec<String> = options.iter().map(|o| title_case(o.as_ref())).collect();
    match titled.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
    }
}

/// Render options followed by the wildcard: `A, B, C or All`.
#[must_use]
pub fn options_with_all<S: AsRef<str>>(options: &[S]) -> String {
    let mut titled: Vec<String> = options.iter().map(|o| title_case(o.as_ref())).collect();
    titled.push(title_case(ALL));
    join_options(&titled)
}

/// Interpret a lower-cased month answer against the configured months.
#[must_use]
pub fn parse_month(config: &AppConfig, answer: &str) -> Option<MonthFilter> {
    if answer == ALL {
        return Some(MonthFilter::All);
    }
    config.month_position(answer).map(MonthFilter::Month)
}

/// Interpret a lower-cased day answer against the configured days.
#[must_use]
pub fn parse_day(config: &AppConfig, answer: &str) -> Option<DayFilter> {
    if answer == ALL {
        return Some(DayFilter::All);
    }
    if !config.has_day(answer) {
        return None;
    }
    weekday_from_name(answer).map(DayFilter::Day)
}

/// Ask for city, month and day until each answer is valid.
///
/// Retries are unbounded; the only way out without a valid triple is the
/// input stream closing.
///
/// # Errors
/// Returns `InputClosed` if input ends, or an IO error from the console.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &AppConfig,
) -> Result<FilterSelection> {
    console.say("Hello! Let's explore some US bikeshare data!")?;

    let cities = join_options(&config.city_names());
    let city = ask_until(
        console,
        &format!("Would you like to see data for: {cities}?"),
        &format!("Unknown City! Please choose from the following cities: {cities}?"),
        |answer| config.city(answer).map(|_| answer.to_string()),
    )?;

    let months = options_with_all(&config.months);
    let month = ask_until(
        console,
        &format!("Would you like to see data for: {months}?"),
        &format!("Unknown Choice! Please choose from the following options: {months}?"),
        |answer| parse_month(config, answer),
    )?;

    let days = options_with_all(&config.days);
    let day = ask_until(
        console,
        &format!("Would you like to see data for: {days}?"),
        &format!("Unknown Choice! Please choose from the following options: {days}?"),
        |answer| parse_day(config, answer),
    )?;

    console.say(&rule())?;
    tracing::info!(%city, %month, %day, "filters selected");

    Ok(FilterSelection { city, month, day })
}

fn ask_until<R, W, T, F>(
    console: &mut Console<R, W>,
    prompt: &str,
    retry_prompt: &str,
    accept: F,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    let mut answer = console.ask_lower(prompt)?;
    loop {
        if let Some(value) = accept(&answer) {
            return Ok(value);
        }
        tracing::debug!(%answer, "rejected answer");
        answer = console.ask_lower(retry_prompt)?;
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
