use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::{Cli, ExploreArgs};
use crate::config::{AppConfig, ConfigLoader, FileConfigLoader, SampleOrder, validate_config};
use crate::console::{Console, StdConsole};
use crate::error::{BikeshareError, Result};
use crate::output::ErrorOutput;
use crate::session::Session;
use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_CLOSED, EXIT_SUCCESS};

use super::color_choice_to_mode;

#[must_use]
pub fn run_explore(args: &ExploreArgs, cli: &Cli) -> i32 {
    let errors = ErrorOutput::new(color_choice_to_mode(cli.color));
    let mut console = StdConsole::stdio();

    match run_explore_impl(args, cli, errors, &mut console) {
        Ok(iterations) => {
            tracing::debug!(iterations, "session ended");
            EXIT_SUCCESS
        }
        Err(BikeshareError::InputClosed) => {
            errors.print_error(&BikeshareError::InputClosed);
            EXIT_INPUT_CLOSED
        }
        Err(e) => {
            errors.print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Build the effective configuration and run the interactive session on `console`.
///
/// Warnings and per-iteration errors go through `errors`.
///
/// # Errors
/// Returns a config error before the session starts, or `InputClosed`/IO errors from it.
pub fn run_explore_impl<R: BufRead, W: Write>(
    args: &ExploreArgs,
    cli: &Cli,
    errors: ErrorOutput,
    console: &mut Console<R, W>,
) -> Result<usize> {
    let config = apply_overrides(load_config(cli.config.as_deref())?, args)?;
    let color = color_choice_to_mode(cli.color);

    if config.seed.is_some() && config.sample_order == SampleOrder::Sequential {
        errors.print_warning(
            "seed is ignored",
            Some("raw samples are shown in file order when sample_order is sequential"),
        );
    }

    let session = Session::new(&config, args.format.formatter(color), errors);
    session.run(console)
}

/// Load from `path` if given, else from the default search locations.
///
/// # Errors
/// Returns an error if a config file is missing, unreadable, or invalid.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let loader = FileConfigLoader::new();
    let loaded = match path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    match &loaded.source {
        Some(source) => tracing::info!(path = %source.display(), "using config file"),
        None => tracing::info!("using built-in configuration"),
    }
    Ok(loaded.config)
}

/// Apply command-line overrides on top of a loaded configuration.
///
/// # Errors
/// Returns an error if the result fails validation (e.g. `--sample-size 0`).
pub fn apply_overrides(mut config: AppConfig, args: &ExploreArgs) -> Result<AppConfig> {
    if let Some(dir) = &args.data_dir {
        config.data_dir.clone_from(dir);
    }
    if let Some(size) = args.sample_size {
        config.sample_size = size;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.sequential {
        config.sample_order = SampleOrder::Sequential;
    }
    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
#[path = "explore_tests.rs"]
mod tests;
