use std::fs;

use crate::cli::InitArgs;
use crate::output::print_error;
use crate::{BikeshareError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            println!("Created configuration file: {}", args.output.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(BikeshareError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    tracing::info!(path = %output_path.display(), "wrote configuration template");
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# bikeshare configuration file
# Every setting is optional; the values below are the built-in defaults.

# Directory the city CSV files are read from (relative to the working directory)
data_dir = "."

# Rows revealed each time you ask for raw data
sample_size = 5

# "random" shuffles the rows once per session; "sequential" keeps file order
sample_order = "random"

# Fixed seed for reproducible random samples
# seed = 42

# Months offered at the month prompt, starting at January in calendar order
months = ["january", "february", "march", "april", "may", "june"]

# Weekdays offered at the day prompt
days = ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"]

# City name -> data file. Cities with demographics = true must have
# Gender and Birth Year columns.
[cities.chicago]
file = "chicago.csv"
demographics = true

[cities."new york"]
file = "new_york_city.csv"
demographics = true

[cities.washington]
file = "washington.csv"
demographics = false
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
