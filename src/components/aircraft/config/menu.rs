use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;

/// Step sizes of the menu driven airplane.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuAircraftConfig {
    /// Throttle change per throttle command.
    pub throttle_step: f64,
    /// Pitch change per pitch command (radians).
    pub pitch_step: f64,
    /// Speed at full throttle.
    pub throttle_gain: f64,
    /// Simulated time advanced after each command (s).
    pub dt: f64,
}

impl Default for MenuAircraftConfig {
    fn default() -> Self {
        Self {
            throttle_step: 0.1,
            pitch_step: 0.05,
            throttle_gain: 100.0,
            dt: 0.1,
        }
    }
}

impl MenuAircraftConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "menu dt must be a non-negative number, got {}",
                self.dt
            )));
        }
        if self.throttle_step < 0.0 {
            return Err(ConfigError::Invalid(
                "throttle_step must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
