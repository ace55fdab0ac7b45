use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a city file is being read.
///
/// Drawn on stderr, and only when stderr is a terminal, so piped sessions
/// and tests see no progress output.
#[derive(Clone)]
pub struct LoadProgress {
    progress_bar: ProgressBar,
}

impl LoadProgress {
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self::new_with_visibility(label, std::io::stderr().is_terminal())
    }

    /// A spinner that never draws.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            progress_bar: ProgressBar::hidden(),
        }
    }

    fn new_with_visibility(label: &str, is_tty: bool) -> Self {
        if !is_tty {
            return Self::hidden();
        }

        let progress_bar = ProgressBar::new_spinner();
        // Static template; fall back to the default spinner style if it is ever rejected.
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} ({pos} rows)") {
            progress_bar.set_style(style);
        }
        progress_bar.set_message(label.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(100));
        Self { progress_bar }
    }

    /// Count one more parsed row.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Stop the spinner and clear it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
