use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_clear_screen() -> bool {
    true
}
fn default_separator_char() -> String {
    "=".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            clear_screen: default_clear_screen(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.worklog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".worklog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worklog.sqlite")
    }

    /// Load configuration from the standard location, or defaults if absent.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse a YAML document; missing keys take their defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }
}
