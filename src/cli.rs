use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::ReportFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "bikeshare")]
#[command(author, version, about = "Explore US bike-share trip data interactively")]
#[command(long_about = "Loads trip records for a city, filters them by month and weekday, \
    and prints the most popular travel times, stations, trip durations and user figures.\n\n\
    Exit codes:\n  \
    0 - Session ended normally\n  \
    1 - Input ended before the session finished\n  \
    2 - Configuration or runtime error")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub explore: ExploreArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session (the default)
    Explore(ExploreArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExploreArgs {
    /// Directory containing the city CSV files (overrides config)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Rows shown per raw sample batch (overrides config)
    #[arg(long)]
    pub sample_size: Option<usize>,

    /// Seed for the random sample order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show raw rows in file order instead of random order
    #[arg(long)]
    pub sequential: bool,

    /// Report format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate a configuration file (default: .bikeshare.toml, or --config)
    Validate,

    /// Display the effective configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
