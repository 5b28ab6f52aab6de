use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Third-person camera distance, owned by the aircraft it follows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    pub distance: f64,
}

impl CameraRig {
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }

    /// Moves the camera by `delta`, kept within the configured range.
    pub fn adjust(&mut self, delta: f64, config: &CameraConfig) {
        self.distance = (self.distance + delta).clamp(config.min_distance, config.max_distance);
    }
}

/// Marker for the render camera that chases the player.
#[derive(Component, Debug, Default)]
pub struct ChaseCamera;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub min_distance: f64,
    pub max_distance: f64,
    /// Distance change per tick while a zoom action is held.
    pub zoom_step: f64,
    /// Height of the camera above the aircraft.
    pub height_offset: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            max_distance: 200.0,
            zoom_step: 5.0,
            height_offset: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_distance_clamped() {
        let config = CameraConfig::default();
        let mut rig = CameraRig::new(100.0);

        for _ in 0..20 {
            rig.adjust(-config.zoom_step, &config);
        }
        assert_eq!(rig.distance, 50.0);

        for _ in 0..40 {
            rig.adjust(config.zoom_step, &config);
        }
        assert_eq!(rig.distance, 200.0);
    }
}
