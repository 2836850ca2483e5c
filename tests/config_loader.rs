//! Configuration loading and validation tests.

use std::fs;
use std::path::PathBuf;

use marquee::config::{Config, ConfigError};

#[test]
fn default_config_points_at_tmdb() {
    let config = Config::default();

    assert_eq!(
        config.api.search_base_url,
        "https://api.themoviedb.org/3/search/movie"
    );
    assert_eq!(config.api.poster_base_url, "https://image.tmdb.org/t/p/w92");
    assert_eq!(config.api.timeout_seconds, 30);
    assert!(config.api.api_key.is_empty());
    assert!(config.store.path.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn config_path_is_under_the_config_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("marquee/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.api.timeout_seconds, 30);
}

#[test]
fn partial_toml_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[api]
api_key = "secret"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.api_key, "secret");
    assert_eq!(
        config.api.search_base_url,
        "https://api.themoviedb.org/3/search/movie"
    );
}

#[test]
fn full_toml_overrides_everything() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[api]
search_base_url = "https://api.example.com/3/search/movie"
api_key = "secret"
poster_base_url = "https://image.example.com/w185"
timeout_seconds = 10

[store]
path = "/tmp/marquee-test/recent.json"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.api.search_base_url,
        "https://api.example.com/3/search/movie"
    );
    assert_eq!(config.api.poster_base_url, "https://image.example.com/w185");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(
        config.store_path(),
        PathBuf::from("/tmp/marquee-test/recent.json")
    );
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "invalid { toml }").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_timeout_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[api]
timeout_seconds = 0
"#,
    )
    .unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn empty_base_url_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[api]
search_base_url = ""
"#,
    )
    .unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn default_store_path_is_under_the_data_dir() {
    let config = Config::default();
    let path = config.store_path();
    assert!(path.ends_with("marquee/recent_searches.json"));
}
