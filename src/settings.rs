//! Game configuration
//!
//! Every gameplay constant is tunable here rather than hard-coded in the
//! simulation. Loaded from JSON or built from defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Timing ===
    /// Fall step cadence in milliseconds
    pub tick_ms: u64,
    /// Minimum elapsed time between two spawns
    pub spawn_interval_ms: u64,
    /// Delay before spawning restarts after a resume
    pub resume_spawn_delay_ms: u64,

    // === Catchables ===
    pub catchable_width: f32,
    pub catchable_height: f32,
    /// Units fallen per tick
    pub catchable_speed: f32,

    // === Catcher ===
    pub catcher_width: f32,
    pub catcher_height: f32,
    /// Catcher top edge sits this far above the bottom of the field
    pub catcher_start_offset: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            resume_spawn_delay_ms: RESUME_SPAWN_DELAY_MS,

            catchable_width: CATCHABLE_WIDTH,
            catchable_height: CATCHABLE_HEIGHT,
            catchable_speed: CATCHABLE_SPEED,

            catcher_width: CATCHER_WIDTH,
            catcher_height: CATCHER_HEIGHT,
            catcher_start_offset: CATCHER_START_OFFSET,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would stall or break the simulation.
    ///
    /// Zero-length timers would make the scheduler re-run the same chain
    /// forever within a single update.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(invalid("tick_ms", "must be greater than zero"));
        }
        if self.spawn_interval_ms == 0 {
            return Err(invalid("spawn_interval_ms", "must be greater than zero"));
        }

        let sizes = [
            ("catchable_width", self.catchable_width),
            ("catchable_height", self.catchable_height),
            ("catcher_width", self.catcher_width),
            ("catcher_height", self.catcher_height),
        ];
        for (field, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be a positive finite number"));
            }
        }

        if !self.catchable_speed.is_finite() || self.catchable_speed <= 0.0 {
            return Err(invalid("catchable_speed", "must be a positive finite number"));
        }
        if !self.catcher_start_offset.is_finite() {
            return Err(invalid("catcher_start_offset", "must be finite"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
