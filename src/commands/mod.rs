pub mod config;
pub mod explore;
pub mod init;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use explore::{apply_overrides, load_config, run_explore, run_explore_impl};
pub use init::{generate_config_template, run_init, run_init_impl};

use crate::cli::ColorChoice;
use crate::output::ColorMode;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}
