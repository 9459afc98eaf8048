use serde::{Deserialize, Serialize};

// Sound effect settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub sound_enabled: bool,
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            volume: 0.5,
        }
    }
}

impl AudioConfig {
    // Volume clamped into the range the mixer accepts
    #[must_use]
    pub fn clamped_volume(&self) -> f32 {
        self.volume.clamp(0.0, 1.0)
    }
}

// Terminal presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub frame_ms: u64,
    pub show_leaderboard: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_ms: 16, // ~60 FPS
            show_leaderboard: true,
        }
    }
}

// How many finished games are kept on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub max_entries: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self { max_entries: 10 }
    }
}

// Gameplay settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Fixed seed for the piece generator; unset means a fresh random game each time
    pub seed: Option<u64>,
}
