use std::path::Path;

use log::warn;

use crate::ai::DEFAULT_DEPTH;
use crate::error::ConfigError;

/// Default chance that the computer plays a random column instead of
/// searching.
pub const DEFAULT_BLUNDER_PROBABILITY: f64 = 0.4;

/// Computer strength settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched by minimax
    pub search_depth: usize,
    /// Probability in [0, 1] of a random move instead of the searched one
    pub blunder_probability: f64,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            search_depth: DEFAULT_DEPTH,
            blunder_probability: DEFAULT_BLUNDER_PROBABILITY,
            seed: None,
        }
    }
}

/// Terminal presentation settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pause before the computer replies, in milliseconds
    pub computer_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            computer_delay_ms: 500,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub ui: UiConfig,
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
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::Validation(
                "engine.search_depth must be >= 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.blunder_probability) {
            return Err(ConfigError::Validation(
                "engine.blunder_probability must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
