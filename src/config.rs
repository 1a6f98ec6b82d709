use std::path::Path;

use crate::ai::DEFAULT_DEPTH;
use crate::error::ConfigError;

/// Largest search depth accepted from a config file.
pub const MAX_HARD_DEPTH: usize = 10;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub ui: UiConfig,
}

/// Tuning for the computer opponents.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Plies searched by the Hard opponent.
    pub hard_depth: usize,
    /// Alpha-beta cutoffs. Turning them off only makes the search slower.
    pub pruning: bool,
    /// Probability that Medium plays its best threat-scored cell.
    pub medium_strategic_chance: f64,
    /// Fixed RNG seed for Easy and Medium; entropy-seeded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            hard_depth: DEFAULT_DEPTH,
            pruning: true,
            medium_strategic_chance: 0.7,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the event loop waits for a key before redrawing.
    pub poll_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
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
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_HARD_DEPTH).contains(&self.ai.hard_depth) {
            return Err(ConfigError::Validation(format!(
                "ai.hard_depth must be in 1..={MAX_HARD_DEPTH}"
            )));
        }
        if !(0.0..=1.0).contains(&self.ai.medium_strategic_chance) {
            return Err(ConfigError::Validation(
                "ai.medium_strategic_chance must be in [0, 1]".into(),
            ));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
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
