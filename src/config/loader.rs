use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/moviedeck/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("moviedeck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error: every key has a default.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks that the base URL is an http(s) URL, the grid width is
    /// inside the renderable 4..=8 range, and the listing limit is
    /// positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.api.base_url;
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url must be an http(s) URL, got '{base}'"),
            });
        }

        if !(4..=8).contains(&self.home.grid_columns) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "home.grid_columns must be between 4 and 8, got {}",
                    self.home.grid_columns
                ),
            });
        }

        if self.home.limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "home.limit must be positive".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use std::io::Write;

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[home]\ncategory = \"top_rated\"\n").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.home.category, Category::TopRated);
        assert_eq!(config.home.grid_columns, 6);
        assert_eq!(config.api.timeout_seconds, 25);
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn out_of_range_grid_columns_are_rejected() {
        let mut config = Config::default();
        config.home.grid_columns = 9;
        assert!(config.validate().is_err());
        config.home.grid_columns = 3;
        assert!(config.validate().is_err());
        config.home.grid_columns = 4;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_category_fails_to_parse() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[home]\ncategory = \"cult_classics\"\n").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
