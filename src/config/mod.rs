pub mod loader;
pub mod sections;

use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant, SystemTime};

pub use sections::{AudioConfig, DisplayConfig, GameConfig, LeaderboardConfig};

// Process-wide configuration, replaced wholesale on reload
pub static CONFIG: once_cell::sync::Lazy<RwLock<Config>> =
    once_cell::sync::Lazy::new(|| RwLock::new(Config::default()));

// Time to wait between checking for config file changes
const CONFIG_CHECK_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub audio: AudioConfig,
    pub display: DisplayConfig,
    pub leaderboard: LeaderboardConfig,
    pub game: GameConfig,
    // Modification time of the file this config was read from
    #[serde(skip)]
    modified: Option<SystemTime>,
    #[serde(skip)]
    checked_at: Option<Instant>,
}

impl Config {
    #[must_use]
    pub fn current() -> Config {
        CONFIG
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn install(mut config: Config) {
        config.checked_at = Some(Instant::now());
        *CONFIG.write().unwrap_or_else(PoisonError::into_inner) = config;
    }

    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.display.frame_ms.max(1))
    }

    // Reload the config if the file changed since it was last read.
    // Returns true when a new config was installed.
    pub fn check_and_reload() -> bool {
        let now = Instant::now();
        let (due, known_modified) = {
            let config = CONFIG.read().unwrap_or_else(PoisonError::into_inner);
            let due = config
                .checked_at
                .is_none_or(|checked| now.duration_since(checked) > CONFIG_CHECK_INTERVAL);
            (due, config.modified)
        };

        if !due {
            return false;
        }

        let path = loader::config_file_path();
        let modified = loader::modified_time(&path);
        if modified.is_some() && modified != known_modified {
            if let Ok(new_config) = loader::load_config_from(&path) {
                Self::install(new_config);
                return true;
            }
        }

        CONFIG
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .checked_at = Some(now);
        false
    }
}
