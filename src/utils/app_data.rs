use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::index::snippet::DEFAULT_WINDOW;

const APP_NAME: &str = "worksearch";
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides the listening port
pub const PORT_ENV: &str = "PORT";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Text searched by queries
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,

    /// File holding the `Contents` listing
    #[serde(default = "default_toc_path")]
    pub toc_path: PathBuf,

    /// HTTP port (overridden by `PORT`)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Context bytes on each side of a match
    #[serde(default = "default_window")]
    pub window: usize,

    /// Directory served for non-API paths
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Cap on snippets per query; 0 means unlimited
    #[serde(default)]
    pub max_results: usize,
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("completeworks.txt")
}

fn default_toc_path() -> PathBuf {
    PathBuf::from("completeworks.txt")
}

fn default_port() -> u16 {
    3001
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./static")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            corpus_path: default_corpus_path(),
            toc_path: default_toc_path(),
            port: default_port(),
            window: default_window(),
            static_dir: default_static_dir(),
            max_results: 0,
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from an explicit file, or return default if it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .context("Failed to read config file")?;
            let config: AppConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            tracing::debug!(path = %config_path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = get_config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Apply the `PORT` environment variable, if set and valid
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var(PORT_ENV) {
            if !port.is_empty() {
                self.port = port
                    .parse()
                    .with_context(|| format!("Invalid {PORT_ENV} value: {port}"))?;
            }
        }
        Ok(())
    }

    /// Result cap as a lookup limit (`None` = unlimited)
    pub fn result_limit(&self) -> Option<usize> {
        (self.max_results > 0).then_some(self.max_results)
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_app_data_dir()?.join(CONFIG_FILE))
}

/// Get the application data directory
/// - Windows: %LOCALAPPDATA%/worksearch
/// - macOS: ~/Library/Application Support/worksearch
/// - Linux: ~/.local/share/worksearch
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.port, 3001);
        assert_eq!(config.window, 250);
        assert_eq!(config.corpus_path, PathBuf::from("completeworks.txt"));
        assert_eq!(config.result_limit(), None);
    }

    #[test]
    fn test_app_config_partial_json() {
        // Should use defaults for missing fields
        let json = r#"{"port": 8080, "max_results": 20}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.result_limit(), Some(20));
        assert_eq!(config.window, 250); // default
    }

    #[test]
    fn test_app_config_empty_json() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = AppConfig {
            corpus_path: PathBuf::from("/data/shakespeare.txt"),
            window: 100,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
