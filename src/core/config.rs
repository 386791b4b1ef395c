//! Game geometry and timing configuration.
//!
//! Defaults reproduce the reference tuning. A JSON file can override any
//! subset of fields; every config is validated before a session starts so a
//! bad file can never produce a negative-height obstacle.

use super::constants::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons a configuration is rejected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{field} is out of range: |{value}| exceeds {max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        max: i64,
    },
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: i64 },
    #[error("upper height range is empty: [{min}, {max})")]
    EmptyUpperRange { min: i32, max: i32 },
    #[error(
        "gap {gap} + max upper height {max_upper} exceeds playfield height {height}; \
         lower obstacles would have no height"
    )]
    GapTooLarge {
        gap: i32,
        max_upper: i32,
        height: i32,
    },
    #[error("avatar does not fit inside the playfield")]
    AvatarOutOfBounds,
    #[error("impulse velocity must point upward (negative), got {0}")]
    ImpulseNotUpward(i32),
}

/// Every tunable of the game. Units are pixels, pixels per tick and milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Score row above the playfield; also the ceiling y.
    pub header_height: i32,
    pub playfield_width: i32,
    pub playfield_height: i32,
    pub avatar_x: i32,
    pub avatar_size: i32,
    pub gravity: i32,
    pub impulse_velocity: i32,
    pub scroll_speed: i32,
    pub obstacle_width: i32,
    pub obstacle_gap: i32,
    pub min_upper_height: i32,
    pub max_upper_height: i32,
    pub tick_ms: u64,
    pub flash_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            header_height: HEADER_HEIGHT,
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            avatar_x: AVATAR_X,
            avatar_size: AVATAR_SIZE,
            gravity: GRAVITY,
            impulse_velocity: IMPULSE_VELOCITY,
            scroll_speed: SCROLL_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_gap: OBSTACLE_GAP,
            min_upper_height: MIN_UPPER_HEIGHT,
            max_upper_height: MAX_UPPER_HEIGHT,
            tick_ms: TICK_INTERVAL_MS,
            flash_ms: COLLISION_FLASH_MS,
        }
    }
}

impl GameConfig {
    /// Ceiling y coordinate (top of the playfield).
    pub fn top(&self) -> i32 {
        self.header_height
    }

    /// Floor y coordinate (bottom of the playfield).
    pub fn bottom(&self) -> i32 {
        self.header_height + self.playfield_height
    }

    /// Full drawable surface, header included.
    pub fn surface_size(&self) -> (i32, i32) {
        (self.playfield_width + self.header_height, self.bottom())
    }

    /// Avatar spawn height: vertically centred in the playfield.
    pub fn avatar_start_y(&self) -> i32 {
        self.top() + (self.playfield_height - self.avatar_size) / 2
    }

    /// Check the invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Bounds first so the sums below cannot overflow.
        let pixels: [(&'static str, i32); 12] = [
            ("header_height", self.header_height),
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("avatar_x", self.avatar_x),
            ("avatar_size", self.avatar_size),
            ("gravity", self.gravity),
            ("impulse_velocity", self.impulse_velocity),
            ("scroll_speed", self.scroll_speed),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_gap", self.obstacle_gap),
            ("min_upper_height", self.min_upper_height),
            ("max_upper_height", self.max_upper_height),
        ];
        for (field, value) in pixels {
            if i64::from(value).abs() > i64::from(MAX_CONFIG_PIXELS) {
                return Err(ConfigError::OutOfRange {
                    field,
                    value: i64::from(value),
                    max: i64::from(MAX_CONFIG_PIXELS),
                });
            }
        }
        for (field, value) in [("tick_ms", self.tick_ms), ("flash_ms", self.flash_ms)] {
            if value > MAX_CONFIG_MS {
                return Err(ConfigError::OutOfRange {
                    field,
                    value: i64::try_from(value).unwrap_or(i64::MAX),
                    max: MAX_CONFIG_MS as i64,
                });
            }
        }

        let positive: [(&'static str, i64); 10] = [
            ("header_height", self.header_height as i64),
            ("playfield_width", self.playfield_width as i64),
            ("playfield_height", self.playfield_height as i64),
            ("avatar_size", self.avatar_size as i64),
            ("scroll_speed", self.scroll_speed as i64),
            ("obstacle_width", self.obstacle_width as i64),
            ("obstacle_gap", self.obstacle_gap as i64),
            ("min_upper_height", self.min_upper_height as i64),
            ("tick_ms", self.tick_ms as i64),
            ("flash_ms", self.flash_ms as i64),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.min_upper_height >= self.max_upper_height {
            return Err(ConfigError::EmptyUpperRange {
                min: self.min_upper_height,
                max: self.max_upper_height,
            });
        }

        // Largest drawable upper height is max - 1, lower must keep at least 1px.
        if self.obstacle_gap + self.max_upper_height > self.playfield_height {
            return Err(ConfigError::GapTooLarge {
                gap: self.obstacle_gap,
                max_upper: self.max_upper_height,
                height: self.playfield_height,
            });
        }

        if self.avatar_size >= self.playfield_height
            || self.avatar_x < 0
            || self.avatar_x + self.avatar_size > self.playfield_width
        {
            return Err(ConfigError::AvatarOutOfBounds);
        }

        if self.impulse_velocity >= 0 {
            return Err(ConfigError::ImpulseNotUpward(self.impulse_velocity));
        }

        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take reference values.
    pub fn from_json(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file that the user asked for explicitly.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &text)
    }

    /// Load from the platform config directory, falling back to defaults when
    /// no file exists there.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                log::info!("Loading config from {}", path.display());
                Self::load(&path)
            }
            _ => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// `config.json` inside the platform config directory, if one can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Pretty JSON of the effective config (for `--print-config`).
    pub fn to_json(&self) -> String {
        // A struct of plain integers always serializes.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
