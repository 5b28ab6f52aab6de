use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::ArcadeStartConfig;
use crate::utils::{format_general, wrap_degrees};

/// State of the arcade aircraft.
///
/// Position uses a y-up frame. Orientation is kept in degrees because every
/// control rate and limit is expressed in degrees per tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcadeAircraftState {
    pub position: Vector3<f64>,
    /// Pitch (deg), positive climbs.
    pub pitch: f64,
    /// Heading (deg) in [0, 360).
    pub yaw: f64,
    /// Bank (deg).
    pub roll: f64,
    /// Normalized engine power in [0, 1].
    pub throttle: f64,
    /// Speed of the last tick, recomputed from throttle by the integrator.
    pub velocity: f64,
}

impl Default for ArcadeAircraftState {
    fn default() -> Self {
        Self::from_start(&ArcadeStartConfig::default())
    }
}

impl ArcadeAircraftState {
    pub fn from_start(start: &ArcadeStartConfig) -> Self {
        Self {
            position: start.position,
            pitch: 0.0,
            yaw: wrap_degrees(start.yaw),
            roll: 0.0,
            throttle: start.throttle.clamp(0.0, 1.0),
            velocity: start.velocity,
        }
    }

    /// Altitude above the zero plane.
    pub fn altitude(&self) -> f64 {
        self.position.y
    }
}

/// State of the menu driven airplane.
///
/// Angles are radians and are never limited. `y`, `vy`, `yaw` and `roll`
/// are carried for the status report only; nothing updates them.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuAircraftState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    pub throttle: f64,
}

impl MenuAircraftState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four line status block printed after most commands.
    pub fn status_lines(&self) -> Vec<String> {
        let p = &self.position;
        let v = &self.velocity;
        vec![
            format!(
                "Position: ({}, {}, {})",
                format_general(p.x),
                format_general(p.y),
                format_general(p.z)
            ),
            format!(
                "Velocity: ({}, {}, {})",
                format_general(v.x),
                format_general(v.y),
                format_general(v.z)
            ),
            format!("Pitch: {}", format_general(self.pitch)),
            format!("Throttle: {}", format_general(self.throttle)),
        ]
    }
}
