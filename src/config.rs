use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::steps::LabelStrings;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// Display strings for timer labels (localization)
    #[serde(default)]
    pub labels: LabelStrings,
    /// Timer clock and step hint settings
    #[serde(default)]
    pub timers: TimerSettings,
    /// Serving defaults
    #[serde(default)]
    pub servings: ServingSettings,
}

/// Configuration for the timer clock
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TimerSettings {
    /// Clock period in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Steps at least this long suggest doing other work meanwhile
    #[serde(default = "default_hint_threshold_minutes")]
    pub hint_threshold_minutes: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            hint_threshold_minutes: default_hint_threshold_minutes(),
        }
    }
}

impl TimerSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Configuration for ingredient scaling
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServingSettings {
    /// Servings used when none are requested
    #[serde(default = "default_servings")]
    pub default: u32,
}

impl Default for ServingSettings {
    fn default() -> Self {
        Self {
            default: default_servings(),
        }
    }
}

// Default value functions
fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_hint_threshold_minutes() -> u32 {
    5
}

fn default_servings() -> u32 {
    crate::ingredients::BASE_SERVINGS
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_STEPS__ prefix
    /// 2. recipe-steps.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_STEPS__TIMERS__TICK_INTERVAL_MS
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Parse settings from TOML text only, without environment overrides.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

/// Load configuration from an optional explicit file and environment variables
///
/// Without `path`, `recipe-steps.toml` in the working directory is used when
/// present. An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("recipe-steps").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_STEPS__LABELS__STEP
        .add_source(
            Environment::with_prefix("RECIPE_STEPS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
