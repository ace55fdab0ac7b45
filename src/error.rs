use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BikeshareError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data source error: {}: {reason}", path.display())]
    DataSource { path: PathBuf, reason: String },

    #[error("Data source {} is missing required columns: {}", path.display(), columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    #[error("Malformed CSV in {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("No data for this selection: {statistic}")]
    EmptyResult { statistic: &'static str },

    #[error("Input stream closed before an answer was given")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl BikeshareError {
    /// Short category name used as the headline of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::DataSource { .. } | Self::MissingColumns { .. } | Self::Csv { .. } => {
                "DataSource"
            }
            Self::EmptyResult { .. } => "EmptyResult",
            Self::InputClosed => "Input",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// The message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::DataSource { path, .. } | Self::Csv { path, .. } => path.display().to_string(),
            Self::MissingColumns { path, .. } => {
                format!("{} is missing required columns", path.display())
            }
            Self::EmptyResult { statistic } => format!("no data for this selection ({statistic})"),
            Self::InputClosed => "input stream closed".to_string(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string().lines().next().unwrap_or_default().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Secondary information, typically the underlying cause.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::DataSource { reason, .. } => Some(reason.clone()),
            Self::MissingColumns { columns, .. } => Some(format!("missing: {}", columns.join(", "))),
            Self::Csv { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => {
                let rendered = e.to_string();
                let rest: Vec<&str> = rendered.lines().skip(1).filter(|l| !l.trim().is_empty()).collect();
                (!rest.is_empty()).then(|| rest.join("\n"))
            }
            _ => None,
        }
    }

    /// An actionable hint for the user, when one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format, or run `bikeshare config validate`")
            }
            Self::DataSource { .. } => {
                Some("Check that the city's CSV file exists in the data directory (--data-dir)")
            }
            Self::MissingColumns { .. } => {
                Some("The file must have Start Time, End Time, Trip Duration, Start Station, End Station and User Type columns")
            }
            Self::Csv { .. } => Some("Check that the file is a comma-separated table with a header row"),
            Self::EmptyResult { .. } => Some("Try a wider month or day filter"),
            Self::InputClosed | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// True for errors that invalidate the current dataset load.
    #[must_use]
    pub const fn is_data_source(&self) -> bool {
        matches!(
            self,
            Self::DataSource { .. } | Self::MissingColumns { .. } | Self::Csv { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BikeshareError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
