use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub home: HomeConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the recommendation backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds (default: 25).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Response cache TTL in seconds (default: 30).
    #[serde(default = "default_cache_ttl_seconds")]
    pub cache_ttl_seconds: u64,
}

/// Home view settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Category shown when no search is active.
    #[serde(default = "default_category")]
    pub category: Category,
    /// Result-count limit for the home listing (default: 24).
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Grid width in cards; valid range is 4..=8 (default: 6).
    #[serde(default = "default_grid_columns")]
    pub grid_columns: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            cache_ttl_seconds: default_cache_ttl_seconds(),
        }
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            limit: default_limit(),
            grid_columns: default_grid_columns(),
        }
    }
}

fn default_base_url() -> String {
    "https://movie-rec-466x.onrender.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    25
}

fn default_cache_ttl_seconds() -> u64 {
    30
}

fn default_category() -> Category {
    Category::Trending
}

fn default_limit() -> u32 {
    24
}

fn default_grid_columns() -> u16 {
    6
}
