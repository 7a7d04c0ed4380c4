//! Scenario and viewport settings.
//!
//! [`SimConfig`] defaults to the reference scenario in [`crate::constants`].
//! A JSON file may override any subset of fields; omitted fields keep their
//! defaults. Validation only guards configuration input. Entities built
//! directly through their constructors are never checked.
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    FRAMES_PER_SECOND, PLAYER_ACCELERATION, PLAYER_MAX_SPEED, PLAYER_SIZE, PURSUER_SIZE,
    PURSUER_SPAWN_X, PURSUER_SPAWN_Y, PURSUER_SPEED, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};

/// Errors raised while loading or validating a [`SimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file was not valid configuration JSON.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
    /// A field holds a value the simulation cannot use.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Human readable explanation.
        reason: String,
    },
}

/// Window dimensions in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

/// Player tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    /// Acceleration in units per second squared.
    pub acceleration: f64,
    /// Per-axis speed cap.
    pub max_speed: f64,
    /// Footprint side length.
    pub size: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            acceleration: PLAYER_ACCELERATION,
            max_speed: PLAYER_MAX_SPEED,
            size: PLAYER_SIZE,
        }
    }
}

/// Pursuer spawn and tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PursuerConfig {
    /// Spawn `x` of the footprint's top-left corner.
    pub x: f64,
    /// Spawn `y` of the footprint's top-left corner.
    pub y: f64,
    /// Footprint side length.
    pub size: f64,
    /// Constant speed in units per second.
    pub speed: f64,
}

impl Default for PursuerConfig {
    fn default() -> Self {
        Self {
            x: PURSUER_SPAWN_X,
            y: PURSUER_SPAWN_Y,
            size: PURSUER_SIZE,
            speed: PURSUER_SPEED,
        }
    }
}

/// Complete scenario configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Window dimensions; the player spawns at their centre.
    pub viewport: Viewport,
    /// Frame cap; each frame advances the simulation by `1 / fps` seconds.
    pub fps: f64,
    /// Player tuning.
    pub player: PlayerConfig,
    /// Pursuer spawn and tuning.
    pub pursuer: PursuerConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            fps: FRAMES_PER_SECOND,
            player: PlayerConfig::default(),
            pursuer: PursuerConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::parse(json, Path::new("<inline>"))
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
    /// same errors as [`SimConfig::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let text = fs::read_to_string(file).map_err(|source| ConfigError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::parse(&text, file)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Checks that every field holds a usable value.
    ///
    /// Sizes and the pursuer speed may be zero: a zero-size footprint is a
    /// point and its centre is its position.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.width == 0 {
            return Err(invalid("viewport.width", "must be non-zero"));
        }
        if self.viewport.height == 0 {
            return Err(invalid("viewport.height", "must be non-zero"));
        }
        positive("fps", self.fps)?;
        positive("player.acceleration", self.player.acceleration)?;
        positive("player.max_speed", self.player.max_speed)?;
        non_negative("player.size", self.player.size)?;
        finite("pursuer.x", self.pursuer.x)?;
        finite("pursuer.y", self.pursuer.y)?;
        non_negative("pursuer.size", self.pursuer.size)?;
        non_negative("pursuer.speed", self.pursuer.speed)
    }

    /// Simulation step matching the frame cap.
    #[must_use]
    pub fn frame_dt(&self) -> f64 {
        self.fps.recip()
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("expected a finite number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        Err(invalid(field, format!("must not be negative, got {value}")))
    } else {
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}
