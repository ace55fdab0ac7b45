use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{AppConfig, LOCAL_CONFIG_NAME, parse_config};
use crate::output::print_error;
use crate::{BikeshareError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate => {
            let path = cli
                .config
                .clone()
                .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_NAME));
            run_config_validate(&path)
        }
        ConfigAction::Show { format } => run_config_show(cli.config.as_deref(), *format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(BikeshareError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    parse_config(&content)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub fn run_config_show_impl(config_path: Option<&Path>, format: ConfigOutputFormat) -> Result<String> {
    let config = load_config(config_path)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &AppConfig) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    writeln!(output, "=== Effective Configuration ===").ok();
    writeln!(output).ok();
    writeln!(output, "data_dir = {}", config.data_dir.display()).ok();
    writeln!(output, "sample_size = {}", config.sample_size).ok();
    writeln!(output, "sample_order = {:?}", config.sample_order).ok();
    match config.seed {
        Some(seed) => writeln!(output, "seed = {seed}").ok(),
        None => writeln!(output, "seed = (random)").ok(),
    };
    writeln!(output, "months = {}", config.months.join(", ")).ok();
    writeln!(output, "days = {}", config.days.join(", ")).ok();

    writeln!(output).ok();
    writeln!(output, "[cities]").ok();
    for (name, city) in &config.cities {
        let path = config.city_path(name).unwrap_or_else(|| PathBuf::from(&city.file));
        let demographics = if city.demographics {
            "with demographics"
        } else {
            "no demographics"
        };
        writeln!(output, "  {name}: {} ({demographics})", path.display()).ok();
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
