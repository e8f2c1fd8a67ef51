//! Display preference storage
//!
//! The display language is the only value cdaylink persists. It lives in a
//! `config.toml` file inside a directory chosen by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::labels::Language;

/// Name of the preference file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Error type for preference operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown language: {0:?} (expected \"en\" or \"vi\")")]
    UnknownLanguage(String),
}

/// Persisted user preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
}

/// Path of the preference file inside `config_dir`
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load preferences from `config_dir`
///
/// A missing directory or file yields the defaults.
pub fn load_preferences(config_dir: &Path) -> Result<Preferences, ConfigError> {
    let path = config_path(config_dir);

    if !path.exists() {
        return Ok(Preferences::default());
    }

    let contents = fs::read_to_string(&path)?;
    parse_preferences(&contents)
}

/// Parse the TOML contents of a preference file
pub fn parse_preferences(contents: &str) -> Result<Preferences, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Save preferences into `config_dir`, creating the directory if needed
pub fn save_preferences(config_dir: &Path, preferences: &Preferences) -> Result<(), ConfigError> {
    fs::create_dir_all(config_dir)?;

    let contents = toml::to_string(preferences)?;
    fs::write(config_path(config_dir), contents)?;

    Ok(())
}
