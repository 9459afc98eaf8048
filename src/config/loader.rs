#![warn(clippy::all, clippy::pedantic)]

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::Config;

// Default config file path
const CONFIG_FILE_PATH: &str = "config/blockfall.toml";

// Environment variable that overrides the config location
pub const CONFIG_ENV_VAR: &str = "BLOCKFALL_CONFIG";

// Load the configuration from the default location
pub fn load_config_from_file() -> Result<Config, ConfigError> {
    load_config_from(&config_file_path())
}

// Load the configuration from `path`, writing defaults there if it doesn't exist yet
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        let default_config = Config::default();
        save_config_to(&default_config, path)?;
        return Ok(Config {
            modified: modified_time(path),
            ..default_config
        });
    }

    let contents = fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&contents)?;
    config.modified = modified_time(path);
    Ok(config)
}

pub fn save_config_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)?;

    Ok(())
}

// Get the path to the config file
#[must_use]
pub fn config_file_path() -> PathBuf {
    // Check for environment variable override
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    // Otherwise use default path in user's config directory
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("blockfall").join("config.toml")
    } else {
        // Fallback to local directory
        PathBuf::from(CONFIG_FILE_PATH)
    }
}

#[must_use]
pub fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

// Custom error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config I/O error: {err}"),
            ConfigError::Parse(err) => write!(f, "invalid config file: {err}"),
            ConfigError::Serialize(err) => write!(f, "could not serialize config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}
