//! Line-oriented prompt I/O.
//!
//! Every interactive component talks to a `Console` instead of stdin/stdout
//! directly, so sessions can be driven from in-memory buffers in tests.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::error::{BikeshareError, Result};

pub struct Console<R, W> {
    input: R,
    output: W,
}

/// Console bound to the process's standard streams.
pub type StdConsole = Console<StdinLock<'static>, Stdout>;

impl StdConsole {
    #[must_use]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` on its own line and read one answer, trimmed.
    ///
    /// # Errors
    /// Returns `InputClosed` when the input stream is exhausted, or an IO error.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Like [`Console::ask`], but lower-cases the answer.
    ///
    /// # Errors
    /// Same as [`Console::ask`].
    pub fn ask_lower(&mut self, prompt: &str) -> Result<String> {
        self.ask(prompt).map(|answer| answer.to_lowercase())
    }

    /// Write a line of output.
    ///
    /// # Errors
    /// Returns an error if the output stream fails.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write pre-rendered text without adding a newline.
    ///
    /// # Errors
    /// Returns an error if the output stream fails.
    pub fn write_block(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
