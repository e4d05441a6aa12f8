//! Configuration loading and validation.
//!
//! Configuration lives in `<config_dir>/runnerdeck/config.toml` unless
//! `RUNNERDECK_CONFIG` points elsewhere. Every field has a default, so a
//! missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "RUNNERDECK_CONFIG";

/// Errors raised while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub animation: AnimationConfig,
    pub ui: UiConfig,
}

/// Timing constants of the mock terminal animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Simulated workflow duration the clock counts up to (seconds)
    pub target_duration_secs: u32,
    /// Simulated seconds per real second
    pub speed_multiplier: u32,
    /// Pause between the last revealed line and the clock start (ms)
    pub clock_gap_ms: u64,
    /// How often the simulated clock is sampled (ms)
    pub poll_interval_ms: u64,
    /// Dwell after completion before replaying (ms)
    pub replay_dwell_ms: u64,
    /// Replay the sequence forever
    pub auto_replay: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            target_duration_secs: 7 * 60 + 13,
            speed_multiplier: 100,
            clock_gap_ms: 800,
            poll_interval_ms: 50,
            replay_dwell_ms: 30_000,
            auto_replay: true,
        }
    }
}

impl AnimationConfig {
    pub fn clock_gap(&self) -> Duration {
        Duration::from_millis(self.clock_gap_ms)
    }

    /// Poll interval, never zero.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn replay_dwell(&self) -> Duration {
        Duration::from_millis(self.replay_dwell_ms)
    }

    /// Real time the simulated clock needs to reach the target with perfect
    /// sampling: `ceil(target * 1000 / speed)` ms.
    pub fn ideal_clock_run(&self) -> Duration {
        let speed = u64::from(self.speed_multiplier.max(1));
        let ms = (u64::from(self.target_duration_secs) * 1000).div_ceil(speed);
        Duration::from_millis(ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_duration_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "animation.target_duration_secs",
                reason: "must be greater than zero",
            });
        }
        if self.speed_multiplier == 0 {
            return Err(ConfigError::Invalid {
                field: "animation.speed_multiplier",
                reason: "must be greater than zero",
            });
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "animation.poll_interval_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

/// Interface settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial theme: "dark" or "light"
    pub theme: ThemeName,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
        }
    }
}

/// Named theme palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    /// The other palette.
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
        }
    }
}

impl Config {
    /// Location of the config file.
    ///
    /// `RUNNERDECK_CONFIG` wins over the platform config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("runnerdeck").join("config.toml"))
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.animation.validate()
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to the default location, creating parent directories.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(io_err)
    }
}
