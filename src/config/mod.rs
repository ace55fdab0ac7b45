mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, parse_config};
pub use model::{
    ALL, AppConfig, CALENDAR_MONTHS, CityConfig, DEFAULT_SAMPLE_SIZE, SampleOrder, WEEKDAYS,
};
pub use validation::{validate_city_names, validate_config};
