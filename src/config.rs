//! Configuration management module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub learner: LearnerConfig,
    pub timing: TimingConfig,
    pub effects: EffectsConfig,
    pub ui: UiConfig,
}

/// Learner identity shown on the welcome and congratulations screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    pub display_name: String,
}

/// Timing constants for the screen animations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Seconds the welcome screen stays up before auto-advancing.
    pub welcome_secs: f32,
    /// Offsets (seconds from mount) at which the congratulations
    /// screen reveals its icon, text, and button groups.
    pub reveal_offsets_secs: [f32; 3],
}

/// Decorative effect settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub particle_count: usize,
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_width: f32,
    pub window_height: f32,
}

impl AppConfig {
    /// Get config file path (same directory as executable).
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.learner.display_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Learner display name cannot be empty".to_string(),
            ));
        }
        if self.timing.welcome_secs < 1.0 || self.timing.welcome_secs > 30.0 {
            return Err(ConfigError::Validation(
                "Welcome delay must be between 1 and 30 seconds".to_string(),
            ));
        }
        let offsets = &self.timing.reveal_offsets_secs;
        if offsets[0] < 0.0 {
            return Err(ConfigError::Validation(
                "Reveal offsets cannot be negative".to_string(),
            ));
        }
        if !(offsets[0] < offsets[1] && offsets[1] < offsets[2]) {
            return Err(ConfigError::Validation(
                "Reveal offsets must be strictly increasing".to_string(),
            ));
        }
        if self.effects.particle_count < 1 || self.effects.particle_count > 500 {
            return Err(ConfigError::Validation(
                "Particle count must be between 1 and 500".to_string(),
            ));
        }
        if self.ui.window_width < 400.0 || self.ui.window_height < 300.0 {
            return Err(ConfigError::Validation(
                "Window size must be at least 400x300".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            display_name: "Learner".to_string(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            welcome_secs: 3.0,
            reveal_offsets_secs: [0.1, 0.8, 1.5],
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self { particle_count: 60 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1000.0,
            window_height: 700.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_display_name() {
        let mut config = AppConfig::default();
        config.learner.display_name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_welcome_secs_bounds() {
        let mut config = AppConfig::default();

        config.timing.welcome_secs = 0.5;
        assert!(config.validate().is_err());

        config.timing.welcome_secs = 31.0;
        assert!(config.validate().is_err());

        config.timing.welcome_secs = 3.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_reveal_offsets_must_increase() {
        let mut config = AppConfig::default();

        config.timing.reveal_offsets_secs = [0.8, 0.1, 1.5];
        assert!(config.validate().is_err());

        config.timing.reveal_offsets_secs = [0.1, 0.1, 1.5];
        assert!(config.validate().is_err());

        config.timing.reveal_offsets_secs = [-0.1, 0.8, 1.5];
        assert!(config.validate().is_err());

        config.timing.reveal_offsets_secs = [0.1, 0.8, 1.5];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_particle_count_bounds() {
        let mut config = AppConfig::default();

        config.effects.particle_count = 0;
        assert!(config.validate().is_err());

        config.effects.particle_count = 501;
        assert!(config.validate().is_err());

        config.effects.particle_count = 60;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_parses_with_defaults() {
        let config: AppConfig = toml::from_str("[learner]\ndisplay_name = \"Ada\"\n").unwrap();
        assert_eq!(config.learner.display_name, "Ada");
        assert_eq!(config.effects.particle_count, 60);
        assert!(config.validate().is_ok());
    }
}
