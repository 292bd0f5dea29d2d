use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::render::TableFormat;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "PIP_DEV_LOG";

/// Log level used when neither the config nor `PIP_DEV_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const APP_DIR: &str = "pip-dev";

/// pip-dev configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Table format used when `--format` is not given
    pub format: TableFormat,
    /// Hide rejected versions from rendered tables
    pub only_valid: bool,
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Also write logs to `log_path()`
    pub file: bool,
    /// Emit logs as JSON lines
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: false,
            json: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Load the config file at `path`, falling back to defaults when it does
    /// not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Returns the path to the config directory for pip-dev.
/// Uses $XDG_CONFIG_HOME/pip-dev if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/pip-dev,
/// or ./pip-dev if neither is available.
pub fn config_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the data directory for pip-dev.
/// Uses $XDG_DATA_HOME/pip-dev if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/pip-dev,
/// or ./pip-dev if neither is available.
pub fn data_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("pip-dev.log")
}

fn app_dir_with_env(
    xdg_dir: Option<String>,
    home_dir: Option<PathBuf>,
    home_subdir: &str,
) -> PathBuf {
    let base_dir = xdg_dir
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_subdir)))
        .unwrap_or_else(|| PathBuf::from("."));

    base_dir.join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "onlyValid": true
        }))
        .unwrap();

        assert!(result.only_valid);
        assert_eq!(result.format, TableFormat::Plain);
        assert_eq!(result.log, LogConfig::default());
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "format": "html",
            "onlyValid": false,
            "log": {
                "level": "debug",
                "file": true,
                "json": true
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                format: TableFormat::Html,
                only_valid: false,
                log: LogConfig {
                    level: "debug".to_string(),
                    file: true,
                    json: true,
                },
            }
        );
    }

    #[test]
    fn load_returns_defaults_when_file_is_missing() {
        let temp_dir = TempDir::new().unwrap();

        let config = Config::load(&temp_dir.path().join("config.json")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_reads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "format": "markup" }"#).unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.format, TableFormat::Markup);
    }

    #[test]
    fn load_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ format: ").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn app_dir_with_env_uses_xdg_dir_when_set() {
        let path = app_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
            ".local/share",
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/pip-dev"));
    }

    #[test]
    fn app_dir_with_env_falls_back_to_home_subdir() {
        let path = app_dir_with_env(None, Some(PathBuf::from("/home/user")), ".config");

        assert_eq!(path, PathBuf::from("/home/user/.config/pip-dev"));
    }

    #[test]
    fn app_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = app_dir_with_env(None, None, ".local/share");
        assert_eq!(path, PathBuf::from("./pip-dev"));
    }
}
