use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Fixed starting condition of the arcade aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeStartConfig {
    /// Start position, y up.
    pub position: Vector3<f64>,
    /// Initial heading (deg).
    pub yaw: f64,
    pub throttle: f64,
    /// Speed reported before the first tick recomputes it.
    pub velocity: f64,
    /// Whether the autopilot is flying at startup.
    pub autopilot: bool,
    pub camera_distance: f64,
}

impl Default for ArcadeStartConfig {
    /// Starts well above the terrain with the autopilot engaged.
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 150.0, 0.0),
            yaw: 0.0,
            throttle: 0.3,
            velocity: 2.0,
            autopilot: true,
            camera_distance: 100.0,
        }
    }
}
