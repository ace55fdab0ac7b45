//! Paged preview of raw rows.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::config::{AppConfig, SampleOrder};
use crate::console::Console;
use crate::dataset::{Dataset, Trip};
use crate::error::Result;
use crate::output::format_sample;

pub const SAMPLE_PROMPT: &str = "Would you like to see sample of raw data? Yes/No";
pub const UNKNOWN_ENTRY: &str = "Unknown Entry!";
pub const NO_MORE_ROWS: &str = "All rows have been shown; there is no unseen data left.";

/// Hands out row indices in batches, never repeating one.
///
/// The reveal order is fixed up front: either source order or a shuffled
/// permutation of it.
#[derive(Debug, Clone)]
pub struct SampleViewer {
    order: Vec<usize>,
    cursor: usize,
    batch_size: usize,
}

impl SampleViewer {
    #[must_use]
    pub fn new(rows: usize, batch_size: usize, order: SampleOrder, seed: Option<u64>) -> Self {
        let mut indices: Vec<usize> = (0..rows).collect();
        if order == SampleOrder::Random {
            let mut rng = seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
            indices.shuffle(&mut rng);
        }
        Self {
            order: indices,
            cursor: 0,
            batch_size,
        }
    }

    #[must_use]
    pub fn for_dataset(ds: &Dataset, config: &AppConfig) -> Self {
        Self::new(ds.len(), config.sample_size, config.sample_order, config.seed)
    }

    /// The next at most `batch_size` unseen indices; empty once exhausted.
    pub fn next_batch(&mut self) -> &[usize] {
        let start = self.cursor;
        self.cursor = (start + self.batch_size).min(self.order.len());
        &self.order[start..self.cursor]
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }
}

/// Ask repeatedly whether to show raw rows, printing a batch on each "yes".
///
/// Returns the number of rows shown.
///
/// # Errors
/// Returns `InputClosed` if input ends before a "no", or an IO error.
pub fn offer_sample<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ds: &Dataset,
    config: &AppConfig,
) -> Result<usize> {
    let demographics = config.city(ds.city()).is_some_and(|c| c.demographics);
    let mut viewer = SampleViewer::for_dataset(ds, config);
    let mut shown = 0;

    loop {
        match console.ask_lower(SAMPLE_PROMPT)?.as_str() {
            "yes" => {
                let batch: Vec<&Trip> = viewer
                    .next_batch()
                    .iter()
                    .filter_map(|&idx| ds.trips().get(idx))
                    .collect();
                if batch.is_empty() {
                    console.say(NO_MORE_ROWS)?;
                    continue;
                }
                shown += batch.len();
                tracing::debug!(rows = batch.len(), remaining = viewer.remaining(), "sample batch");
                console.write_block(&format_sample(&batch, demographics))?;
            }
            "no" => return Ok(shown),
            _ => console.say(UNKNOWN_ENTRY)?,
        }
    }
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod tests;
