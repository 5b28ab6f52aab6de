use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;

/// Handling limits and kinematic gains of the arcade aircraft.
///
/// Angles are in degrees and all rates are applied once per tick, so the
/// values only make sense together with the tick rate they were tuned for.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeAircraftConfig {
    /// Yaw change per tick while a yaw action is held (deg).
    pub yaw_rate: f64,
    /// Pitch change per tick while a pitch action is held (deg).
    pub pitch_rate: f64,
    /// Roll change per tick while a roll action is held (deg).
    pub roll_rate: f64,
    /// Throttle change per tick while a throttle action is held.
    pub throttle_step: f64,
    /// Speed gained per unit of throttle (units/tick).
    pub throttle_gain: f64,
    /// Speed at zero throttle, keeps the aircraft from stalling to a halt.
    pub min_speed: f64,
    /// Constant altitude loss per tick.
    pub gravity_drain: f64,
    /// Flat ground height; altitude never drops below it.
    pub ground_height: f64,
    /// Speed factor applied on ground contact.
    pub ground_friction: f64,
    /// Symmetric pitch and roll limit (deg).
    pub attitude_limit: f64,
}

impl Default for ArcadeAircraftConfig {
    fn default() -> Self {
        Self {
            yaw_rate: 2.0,
            pitch_rate: 1.0,
            roll_rate: 2.0,
            throttle_step: 0.02,
            throttle_gain: 8.0,
            min_speed: 1.0,
            gravity_drain: 0.2,
            ground_height: 10.0,
            ground_friction: 0.8,
            attitude_limit: 60.0,
        }
    }
}

impl ArcadeAircraftConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.attitude_limit > 0.0 && self.attitude_limit <= 90.0) {
            return Err(ConfigError::Invalid(format!(
                "attitude_limit must be in (0, 90], got {}",
                self.attitude_limit
            )));
        }
        if !(0.0..=1.0).contains(&self.ground_friction) {
            return Err(ConfigError::Invalid(format!(
                "ground_friction must be in [0, 1], got {}",
                self.ground_friction
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
