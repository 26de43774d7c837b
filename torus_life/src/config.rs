// config.rs - Run configuration
//
// Defaults are the classic interactive setup: an 11x11 board advancing every
// 200 ms, randomized with 30% live cells, halting on repeats seen within the
// last 10 generations.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, LifeResult};
use crate::grid::cell_count;
use crate::history::DEFAULT_HISTORY_DEPTH;

/// Board extents a driver accepts from a user.
pub const DIMENSION_RANGE: RangeInclusive<usize> = 3..=50;

/// Update interval bounds in milliseconds.
pub const INTERVAL_MS_RANGE: RangeInclusive<u64> = 100..=1000;

pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.3;

/// Clamp a requested width or height into [`DIMENSION_RANGE`].
pub fn clamp_dimension(requested: usize) -> usize {
    requested.clamp(*DIMENSION_RANGE.start(), *DIMENSION_RANGE.end())
}

/// Clamp a requested update interval into [`INTERVAL_MS_RANGE`].
pub fn clamp_interval_ms(requested: u64) -> u64 {
    requested.clamp(*INTERVAL_MS_RANGE.start(), *INTERVAL_MS_RANGE.end())
}

/// Randomizer settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Chance that any one cell starts alive
    pub live_probability: f64,

    /// Fixed seed for reproducible boards; `None` draws a fresh one
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            live_probability: DEFAULT_LIVE_PROBABILITY,
            seed: None,
        }
    }
}

impl RandomConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> LifeResult<()> {
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(LifeError::InvalidProbability(self.live_probability));
        }
        Ok(())
    }
}

/// Master configuration for a run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,

    /// Milliseconds between generations when a driver auto-advances
    pub update_interval_ms: u64,

    pub random: RandomConfig,

    /// Generations remembered for cycle detection
    pub history_depth: usize,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 11,
            height: 11,
            update_interval_ms: 200,
            random: RandomConfig::default(),
            history_depth: DEFAULT_HISTORY_DEPTH,
        }
    }
}

impl LifeConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> LifeResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| LifeError::config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> LifeResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| LifeError::config(err.to_string()))
    }

    /// Reject values the core cannot run with. The driver ranges are not
    /// enforced here; use [`LifeConfig::clamped`] for that.
    pub fn validate(&self) -> LifeResult<()> {
        cell_count(self.width, self.height)?;
        if self.update_interval_ms == 0 {
            return Err(LifeError::config("update_interval_ms must be positive"));
        }
        if self.history_depth == 0 {
            return Err(LifeError::config("history_depth must be at least 1"));
        }
        self.random.validate()
    }

    /// Copy with extents and interval pulled into the driver ranges.
    pub fn clamped(&self) -> Self {
        Self {
            width: clamp_dimension(self.width),
            height: clamp_dimension(self.height),
            update_interval_ms: clamp_interval_ms(self.update_interval_ms),
            ..self.clone()
        }
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}
