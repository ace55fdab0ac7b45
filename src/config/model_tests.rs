use std::path::PathBuf;

use super::*;

#[test]
fn default_months_are_january_through_june() {
    let config = AppConfig::default();
    assert_eq!(
        config.months,
        vec!["january", "february", "march", "april", "may", "june"]
    );
}

#[test]
fn default_cities_carry_demographics_flags() {
    let config = AppConfig::default();
    assert!(config.city("chicago").unwrap().demographics);
    assert!(config.city("new york").unwrap().demographics);
    assert!(!config.city("washington").unwrap().demographics);
    assert!(config.city("boston").is_none());
}

#[test]
fn month_position_is_one_indexed() {
    let config = AppConfig::default();
    assert_eq!(config.month_position("january"), Some(1));
    assert_eq!(config.month_position("march"), Some(3));
    assert_eq!(config.month_position("june"), Some(6));
    assert_eq!(config.month_position("july"), None);
    assert_eq!(config.month_position("all"), None);
}

#[test]
fn has_day_checks_configured_days() {
    let config = AppConfig::default();
    assert!(config.has_day("friday"));
    assert!(!config.has_day("Friday"));
    assert!(!config.has_day("funday"));
}

#[test]
fn city_path_joins_data_dir() {
    let config = AppConfig {
        data_dir: PathBuf::from("/data"),
        ..AppConfig::default()
    };
    assert_eq!(
        config.city_path("new york"),
        Some(PathBuf::from("/data/new_york_city.csv"))
    );
    assert_eq!(config.city_path("nowhere"), None);
}

#[cfg(unix)]
#[test]
fn city_path_keeps_absolute_file() {
    let mut config = AppConfig::default();
    config
        .cities
        .insert("chicago".to_string(), CityConfig::new("/srv/trips.csv", true));
    assert_eq!(
        config.city_path("chicago"),
        Some(PathBuf::from("/srv/trips.csv"))
    );
}

#[test]
fn normalized_lowercases_names() {
    let mut config = AppConfig {
        months: vec![" January ".to_string(), "FEBRUARY".to_string()],
        days: vec!["Monday".to_string()],
        ..AppConfig::default()
    };
    config.cities.clear();
    config
        .cities
        .insert("New York".to_string(), CityConfig::new("ny.csv", true));

    let config = config.normalized();
    assert_eq!(config.months, vec!["january", "february"]);
    assert_eq!(config.days, vec!["monday"]);
    assert_eq!(config.city_names(), vec!["new york"]);
}

#[test]
fn deserialize_empty_uses_defaults() {
    let config: AppConfig = toml::from_str("").unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn deserialize_sample_order() {
    let config: AppConfig = toml::from_str("sample_order = \"sequential\"").unwrap();
    assert_eq!(config.sample_order, SampleOrder::Sequential);
}

#[test]
fn deserialize_cities_preserve_order() {
    let config: AppConfig = toml::from_str(
        r#"
[cities.washington]
file = "dc.csv"

[cities.chicago]
file = "chi.csv"
demographics = true
"#,
    )
    .unwrap();
    assert_eq!(config.city_names(), vec!["washington", "chicago"]);
    assert!(!config.city("washington").unwrap().demographics);
}

#[test]
fn serialize_round_trip_through_toml() {
    let config = AppConfig::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: AppConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
