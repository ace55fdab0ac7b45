pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod logging;
pub mod output;
pub mod sample;
pub mod session;
pub mod stats;

pub use error::{BikeshareError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_CLOSED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
