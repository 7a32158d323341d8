//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dataset location
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/avocado.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

/// What to do when a configured initial dropdown value is absent from the data
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InitialSelection {
    /// Log a warning and select the first available option
    #[default]
    Fallback,
    /// Refuse to start
    Strict,
}

/// Dashboard initial state
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_initial_region")]
    pub initial_region: String,

    #[serde(default = "default_initial_type")]
    pub initial_type: String,

    #[serde(default)]
    pub initial_selection: InitialSelection,
}

fn default_initial_region() -> String {
    "Albany".to_string()
}

fn default_initial_type() -> String {
    "organic".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            initial_region: default_initial_region(),
            initial_type: default_initial_type(),
            initial_selection: InitialSelection::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Runs before logging is set up, so nothing is logged here; the caller
    /// reports [`LoadedConfig::source`] and [`LoadedConfig::skipped`].
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("avocado-analytics").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing, valid file of `paths`, else env-only defaults
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut skipped = Vec::new();

        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: ConfigSource::File(path.clone()),
                        skipped,
                    }
                }
                Err(e) => skipped.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            source: ConfigSource::Defaults,
            skipped,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("AVOCADO_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("AVOCADO_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(path) = std::env::var("AVOCADO_DATA_PATH") {
            self.dataset.path = PathBuf::from(path);
        }

        if let Ok(level) = std::env::var("AVOCADO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("AVOCADO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A TOML file, with environment overrides applied
    File(PathBuf),
    /// Built-in defaults with environment overrides
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "defaults + environment"),
        }
    }
}

/// Result of resolving the configuration from default locations
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    /// Config files that exist but could not be loaded
    pub skipped: Vec<ConfigError>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Avocado Analytics Configuration
#
# Environment variables override these settings:
# - AVOCADO_HOST
# - AVOCADO_PORT
# - AVOCADO_DATA_PATH
# - AVOCADO_LOG_LEVEL
# - AVOCADO_LOG_FORMAT

[server]
# Dashboard host
host = "127.0.0.1"

# Dashboard port
port = 8050

[dataset]
# CSV file with the avocado sales data
path = "data/avocado.csv"

[dashboard]
# Initially selected region and avocado type
initial_region = "Albany"
initial_type = "organic"

# When an initial value is missing from the data:
# "fallback" selects the first available option, "strict" refuses to start
initial_selection = "fallback"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "127.0.0.1:8050");
        assert_eq!(config.dataset.path, PathBuf::from("data/avocado.csv"));
        assert_eq!(config.dashboard.initial_region, "Albany");
        assert_eq!(config.dashboard.initial_type, "organic");
        assert_eq!(config.dashboard.initial_selection, InitialSelection::Fallback);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.dashboard.initial_selection, InitialSelection::Fallback);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\n\n[dashboard]\ninitial_selection = \"strict\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dashboard.initial_selection, InitialSelection::Strict);
        assert_eq!(config.dashboard.initial_region, "Albany");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_first_reports_skipped_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let valid = dir.path().join("valid.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        std::fs::write(&valid, "[logging]\nformat = \"json\"\n").unwrap();

        let loaded = Config::load_first(&[
            dir.path().join("absent.toml"),
            broken.clone(),
            valid.clone(),
        ]);

        assert_eq!(loaded.source, ConfigSource::File(valid));
        assert_eq!(loaded.config.logging.format, "json");
        assert_eq!(loaded.skipped.len(), 1);
        assert!(matches!(&loaded.skipped[0], ConfigError::Parse { path, .. } if *path == broken));
    }

    #[test]
    fn test_load_first_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "not = [valid").unwrap();

        let loaded = Config::load_first(&[broken]);

        assert_eq!(loaded.source, ConfigSource::Defaults);
        assert_eq!(loaded.skipped.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
