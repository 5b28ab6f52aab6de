use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Vertical field of view (deg).
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Sky colour as sRGB components.
    pub clear_color: [f32; 3],
    /// Draw the sine terrain wireframe below the aircraft.
    pub draw_terrain: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Flight Simulator".to_string(),
            screen_width: 800,
            screen_height: 600,
            fov: 45.0,
            near: 1.0,
            far: 1000.0,
            clear_color: [0.5, 0.7, 1.0],
            draw_terrain: false,
        }
    }
}
