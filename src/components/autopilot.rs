use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;

/// Timer driven autopilot attached to the arcade aircraft.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AutopilotState {
    /// Whether the autopilot currently overrides manual control.
    pub engaged: bool,
    /// Elapsed autopilot time (s). Frozen while disengaged.
    pub timer: f64,
    /// Toggle action state seen on the previous tick, for edge detection.
    pub toggle_held: bool,
}

impl AutopilotState {
    pub fn new(engaged: bool) -> Self {
        Self {
            engaged,
            ..Default::default()
        }
    }

    /// Flips `engaged` on the rising edge of the toggle action only.
    /// Returns true when the mode changed.
    pub fn latch_toggle(&mut self, toggle_active: bool) -> bool {
        let rising = toggle_active && !self.toggle_held;
        self.toggle_held = toggle_active;
        if rising {
            self.engaged = !self.engaged;
        }
        rising
    }
}

/// A sinusoid `offset + amplitude * sin(frequency * t)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub frequency: f64,
    pub amplitude: f64,
    #[serde(default)]
    pub offset: f64,
}

impl Wave {
    pub const fn new(frequency: f64, amplitude: f64, offset: f64) -> Self {
        Self {
            frequency,
            amplitude,
            offset,
        }
    }

    pub fn sample(&self, t: f64) -> f64 {
        self.offset + (self.frequency * t).sin() * self.amplitude
    }
}

/// Flight pattern flown by the autopilot. Angles in degrees.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotConfig {
    /// Timer advance per tick (s).
    pub time_step: f64,
    /// Yaw increment per tick.
    pub yaw_rate: Wave,
    /// Absolute pitch target.
    pub pitch: Wave,
    /// Absolute roll target.
    pub roll: Wave,
    /// Absolute throttle target.
    pub throttle: Wave,
    /// Below this altitude pitch is forced to `low_altitude_pitch`.
    pub min_altitude: f64,
    pub low_altitude_pitch: f64,
    /// Above this altitude pitch is forced to `high_altitude_pitch`.
    pub max_altitude: f64,
    pub high_altitude_pitch: f64,
    /// Throttle commanded after touching the ground.
    pub recovery_throttle: f64,
    /// Pitch commanded after touching the ground.
    pub recovery_pitch: f64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            time_step: 0.02,
            yaw_rate: Wave::new(0.5, 0.5, 0.0),
            pitch: Wave::new(0.3, 10.0, 0.0),
            roll: Wave::new(0.4, 15.0, 0.0),
            throttle: Wave::new(0.2, 0.2, 0.4),
            min_altitude: 30.0,
            low_altitude_pitch: -20.0,
            max_altitude: 100.0,
            high_altitude_pitch: 20.0,
            recovery_throttle: 0.8,
            recovery_pitch: -30.0,
        }
    }
}

impl AutopilotConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "autopilot time_step must be positive, got {}",
                self.time_step
            )));
        }
        if self.min_altitude > self.max_altitude {
            return Err(ConfigError::Invalid(format!(
                "autopilot altitude band is inverted: {} > {}",
                self.min_altitude, self.max_altitude
            )));
        }
        if !(0.0..=1.0).contains(&self.recovery_throttle) {
            return Err(ConfigError::Invalid(format!(
                "recovery_throttle must be in [0, 1], got {}",
                self.recovery_throttle
            )));
        }
        Ok(())
    }
}
