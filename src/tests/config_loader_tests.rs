#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::config::loader::{
        CONFIG_ENV_VAR, ConfigError, config_file_path, load_config_from, save_config_to,
    };
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.audio.sound_enabled);
        assert!((config.audio.volume - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.display.frame_ms, 16);
        assert!(config.display.show_leaderboard);
        assert_eq!(config.leaderboard.max_entries, 10);
        assert_eq!(config.game.seed, None);
        assert_eq!(config.frame_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("blockfall").join("config.toml");

        let config = load_config_from(&config_path).expect("Failed to load config");

        assert!(config_path.exists());
        assert_eq!(config.leaderboard.max_entries, 10);
        let written = fs::read_to_string(&config_path).expect("Failed to read config");
        assert!(written.contains("[audio]"));
        assert!(written.contains("max_entries = 10"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.audio.sound_enabled = false;
        config.display.frame_ms = 33;
        config.leaderboard.max_entries = 3;
        config.game.seed = Some(42);
        save_config_to(&config, &config_path).expect("Failed to save config");

        let loaded = load_config_from(&config_path).expect("Failed to load config");
        assert!(!loaded.audio.sound_enabled);
        assert_eq!(loaded.display.frame_ms, 33);
        assert_eq!(loaded.leaderboard.max_entries, 3);
        assert_eq!(loaded.game.seed, Some(42));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[display]\nshow_leaderboard = false\n")
            .expect("Failed to write config");

        let config = load_config_from(&config_path).expect("Failed to load config");
        assert!(!config.display.show_leaderboard);
        assert_eq!(config.display.frame_ms, 16);
        assert!(config.audio.sound_enabled);
        assert_eq!(config.leaderboard.max_entries, 10);
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[audio]\nvolume = \"loud\"\n").expect("Failed to write config");

        let result = load_config_from(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        let message = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.starts_with("invalid config file"));
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut config = Config::default();
        config.audio.volume = 3.0;
        assert!((config.audio.clamped_volume() - 1.0).abs() < f32::EPSILON);
        config.audio.volume = -1.0;
        assert!(config.audio.clamped_volume().abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_frame_time_is_raised() {
        let mut config = Config::default();
        config.display.frame_ms = 0;
        assert_eq!(config.frame_duration(), Duration::from_millis(1));
    }

    #[test]
    fn test_config_path_env_override() {
        let custom = PathBuf::from("/tmp/blockfall-test-config.toml");
        unsafe {
            std::env::set_var(CONFIG_ENV_VAR, &custom);
        }
        assert_eq!(config_file_path(), custom);
        unsafe {
            std::env::remove_var(CONFIG_ENV_VAR);
        }
    }
}
