use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::config::SampleOrder;

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/bikeshare")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn load_without_files_returns_defaults() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load().unwrap();
    assert_eq!(result.config, AppConfig::default());
    assert!(result.source.is_none());
}

#[test]
fn load_prefers_local_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.bikeshare.toml", "sample_size = 3")
        .with_file("/home/user/.config/bikeshare/config.toml", "sample_size = 9");
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load().unwrap();
    assert_eq!(result.config.sample_size, 3);
    assert_eq!(
        result.source,
        Some(PathBuf::from("/project/.bikeshare.toml"))
    );
}

#[test]
fn load_falls_back_to_user_config() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/bikeshare/config.toml",
        "sample_order = \"sequential\"",
    );
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load().unwrap();
    assert_eq!(result.config.sample_order, SampleOrder::Sequential);
}

#[test]
fn load_without_user_config_dir() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let loader = FileConfigLoader::with_fs(fs);
    assert!(loader.load().unwrap().source.is_none());
}

#[test]
fn load_from_missing_path_errors() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load_from_path(Path::new("/project/custom.toml"))
        .unwrap_err();
    assert!(err.message().contains("not found"));
}

#[test]
fn load_from_path_normalizes_names() {
    let fs = MockFileSystem::new().with_file(
        "/project/custom.toml",
        r#"
days = ["Saturday", "SUNDAY"]

[cities."New York"]
file = "nyc.csv"
demographics = true
"#,
    );
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader
        .load_from_path(Path::new("/project/custom.toml"))
        .unwrap()
        .config;
    assert_eq!(config.days, vec!["saturday", "sunday"]);
    assert!(config.city("new york").is_some());
}

#[test]
fn load_invalid_toml_errors() {
    let fs = MockFileSystem::new().with_file("/project/.bikeshare.toml", "sample_size = ");
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load().unwrap_err();
    assert!(matches!(err, BikeshareError::TomlParse(_)));
}

#[test]
fn load_semantically_invalid_errors() {
    let fs = MockFileSystem::new().with_file("/project/.bikeshare.toml", "sample_size = 0");
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load().unwrap_err();
    assert!(matches!(err, BikeshareError::Config(_)));
}

#[test]
fn parse_config_accepts_data_dir() {
    let config = parse_config("data_dir = \"/srv/bikeshare\"").unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/srv/bikeshare"));
}

#[test]
fn parse_config_rejects_city_keys_that_collide_after_normalizing() {
    let err = parse_config(
        r#"
[cities.chicago]
file = "chicago.csv"

[cities.Chicago]
file = "other.csv"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, BikeshareError::Config(_)));
    assert!(err.message().contains("duplicate city"));
}
