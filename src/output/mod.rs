mod error_output;
mod json;
mod progress;
mod text;

pub use error_output::{ErrorOutput, print_error};
pub use json::JsonReportFormatter;
pub use progress::LoadProgress;
pub use text::{TextReportFormatter, format_sample};

use crate::error::Result;
use crate::stats::CityReport;

/// Width of the dashed separator printed after each block.
pub const RULE_WIDTH: usize = 40;

/// The dashed separator line, without a trailing newline.
#[must_use]
pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve against a concrete stream's terminal status.
    #[must_use]
    pub fn use_colors(self, is_tty: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // https://no-color.org: presence of the variable disables color.
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_tty,
        }
    }
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Trait for rendering a session iteration's statistics.
pub trait ReportFormatter {
    /// Render the report into a string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, report: &CityReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl ReportFormat {
    #[must_use]
    pub fn formatter(self, color: ColorMode) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextReportFormatter::new(color)),
            Self::Json => Box::new(JsonReportFormatter),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
