use std::path::{Path, PathBuf};

use crate::error::{BikeshareError, Result};

use super::AppConfig;
use super::filesystem::{FileSystem, RealFileSystem};
use super::validation::{validate_city_names, validate_config};

/// File name searched for in the current directory.
pub const LOCAL_CONFIG_NAME: &str = ".bikeshare.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// A loaded configuration and the file it came from (`None` for built-in defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: AppConfig,
    pub source: Option<PathBuf>,
}

pub trait ConfigLoader {
    /// Load configuration from the default search locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read, parsed, or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or invalid.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.bikeshare.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. Built-in defaults
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn read_and_parse(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| BikeshareError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config = parse_config(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let candidates = [self.local_config_path(), self.user_config_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                return self.read_and_parse(&path);
            }
        }

        tracing::debug!("no config file found, using built-in defaults");
        Ok(LoadResult {
            config: AppConfig::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        if !self.fs.exists(path) {
            return Err(BikeshareError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        self.read_and_parse(path)
    }
}

/// Parse, normalize, and validate TOML configuration text.
///
/// # Errors
/// Returns an error on TOML syntax errors or failed semantic validation.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content)?;
    validate_city_names(&config)?;
    let config = config.normalized();
    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
