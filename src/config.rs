//! Controller configuration parameters
//!
//! One tunable cadence plus the width of the output bank.  Values can be
//! overridden from a JSON file through [`ConfigPort`](crate::app::ports::ConfigPort).

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::drivers::line_frame::{DEFAULT_LINES, MAX_LINES, MIN_LINES};

/// Core controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Base signaling frequency in cycles per second.  Blink ticks run at
    /// twice this rate.
    pub frequency_hz: f32,
    /// Number of digital output lines in a broadcast frame.
    pub line_count: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            frequency_hz: 1.0,
            line_count: DEFAULT_LINES,
        }
    }
}

impl SignalConfig {
    /// Reject out-of-range values instead of clamping them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Err(ConfigError::ValidationFailed(
                "frequency_hz must be finite and positive",
            ));
        }
        if !(MIN_LINES..=MAX_LINES).contains(&self.line_count) {
            return Err(ConfigError::ValidationFailed(
                "line_count must be between 4 and 16",
            ));
        }
        Ok(())
    }

    /// Period of one blink tick: `1 / (2 * frequency)`.
    ///
    /// Panics unless the frequency is finite and positive; call
    /// [`validate`](Self::validate) first.
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f32(0.5 / self.frequency_hz)
    }

    /// Wait between steps of the end-of-transport blink: `0.5 / frequency`.
    ///
    /// Same precondition as [`tick_period`](Self::tick_period).
    pub fn blink_step(&self) -> Duration {
        Duration::from_secs_f32(0.5 / self.frequency_hz)
    }
}
