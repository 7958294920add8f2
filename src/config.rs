use std::path::Path;

use crate::error::ConfigError;

/// Search settings for the expectimax agent.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies explored before static evaluation; 0 evaluates immediately.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 2 }
    }
}

/// Batch-play settings for the selfplay binary.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub num_games: usize,
    pub base_seed: u64,
    /// Turn cap per game; games where both sides hold bar checkers cannot
    /// finish on their own.
    pub max_turns: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            num_games: 100,
            base_seed: 42,
            max_turns: 400,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub play: PlayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            search: SearchConfig::default(),
            play: PlayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.play.num_games == 0 {
            return Err(ConfigError::Validation(
                "play.num_games must be > 0".into(),
            ));
        }
        if self.play.max_turns == 0 {
            return Err(ConfigError::Validation(
                "play.max_turns must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
