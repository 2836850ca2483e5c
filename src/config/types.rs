use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Settings for the remote movie search API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Search endpoint base URL.
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,
    /// API key appended to every search request.
    #[serde(default)]
    pub api_key: String,
    /// Base URL that poster paths are appended to.
    #[serde(default = "default_poster_base_url")]
    pub poster_base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Settings for the recent-search store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Override for the store file location. When absent, the store lives
    /// in the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_search_base_url() -> String {
    "https://api.themoviedb.org/3/search/movie".to_string()
}

fn default_poster_base_url() -> String {
    "https://image.tmdb.org/t/p/w92".to_string()
}

fn default_timeout_seconds() -> u32 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_base_url: default_search_base_url(),
            api_key: String::new(),
            poster_base_url: default_poster_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Resolve the recent-search store file location.
    ///
    /// Uses the configured override when present, otherwise
    /// `<data_dir>/marquee/recent_searches.json`. Falls back to the
    /// current directory if the platform data directory is unavailable.
    pub fn store_path(&self) -> PathBuf {
        if let Some(ref path) = self.store.path {
            return path.clone();
        }
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("marquee").join("recent_searches.json")
    }
}
