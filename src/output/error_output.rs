//! Error and warning output on stderr.
//!
//! Format: `✖ Type: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use crate::error::BikeshareError;

use super::ColorMode;
use super::ansi;

#[derive(Debug, Clone, Copy)]
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stderr().is_terminal()),
        }
    }

    /// Auto-detect color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    pub fn print_error(&self, error: &BikeshareError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error);
    }

    pub fn print_warning(&self, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail);
    }

    /// Writes an error to any writer.
    pub fn write_error<W: Write>(&self, w: &mut W, error: &BikeshareError) {
        // Nothing sensible to do if stderr itself is gone.
        let error_type = error.error_type();
        let message = error.message();
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = error.detail() {
            self.write_detail(w, &d);
        }

        if let Some(s) = error.suggestion() {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }

        if let Some(d) = detail {
            self.write_detail(w, d);
        }
    }

    fn write_detail<W: Write>(&self, w: &mut W, detail: &str) {
        for line in detail.lines() {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {line}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {line}");
            }
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Prints an error using auto-detected color mode.
pub fn print_error(error: &BikeshareError) {
    ErrorOutput::stderr().print_error(error);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
