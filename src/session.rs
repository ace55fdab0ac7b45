//! The interactive loop: filters, load, statistics, raw sample, restart.

use std::io::{BufRead, Write};

use crate::config::AppConfig;
use crate::console::Console;
use crate::dataset::load;
use crate::error::{BikeshareError, Result};
use crate::filter::collect_filters;
use crate::output::{ErrorOutput, ReportFormatter};
use crate::sample::offer_sample;
use crate::stats::CityReport;

pub const RESTART_PROMPT: &str = "Would you like to restart? Enter yes or no.";

/// How a single iteration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iteration {
    Completed { rows: usize },
    /// The city's data could not be loaded; the error was already reported.
    Aborted,
}

pub struct Session<'a> {
    config: &'a AppConfig,
    formatter: Box<dyn ReportFormatter>,
    errors: ErrorOutput,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(config: &'a AppConfig, formatter: Box<dyn ReportFormatter>, errors: ErrorOutput) -> Self {
        Self {
            config,
            formatter,
            errors,
        }
    }

    /// Run iterations until the user declines to restart.
    ///
    /// Returns the number of iterations run.
    ///
    /// # Errors
    /// Returns `InputClosed` if input ends mid-prompt, or an IO error from the console.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<usize> {
        let mut iterations = 0;
        loop {
            iterations += 1;
            let outcome = self.run_once(console)?;
            tracing::info!(iteration = iterations, ?outcome, "iteration finished");

            console.say("")?;
            if console.ask_lower(RESTART_PROMPT)? != "yes" {
                return Ok(iterations);
            }
        }
    }

    /// One pass of filters, load, statistics and raw sample.
    ///
    /// # Errors
    /// Data source failures are reported and turned into [`Iteration::Aborted`];
    /// only input and output failures are returned.
    pub fn run_once<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<Iteration> {
        let selection = collect_filters(console, self.config)?;

        let ds = match load(self.config, &selection.city, selection.month, selection.day) {
            Ok(ds) => ds,
            Err(e) if e.is_data_source() => {
                tracing::warn!(city = %selection.city, error = %e, "load failed");
                self.errors.print_error(&e);
                return Ok(Iteration::Aborted);
            }
            Err(e) => return Err(e),
        };

        let city = self.config.city(&selection.city).ok_or_else(|| {
            BikeshareError::Config(format!("city '{}' is not configured", selection.city))
        })?;

        let report = CityReport::compute(selection, city, &ds);
        let rendered = self.formatter.format(&report)?;
        console.write_block(&rendered)?;
        if !rendered.ends_with('\n') {
            console.say("")?;
        }

        if ds.is_empty() {
            tracing::debug!("no rows in selection, skipping raw sample");
        } else {
            offer_sample(console, &ds, self.config)?;
        }

        Ok(Iteration::Completed { rows: ds.len() })
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
