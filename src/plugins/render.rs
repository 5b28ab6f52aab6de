use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::plugins::staging::{ensure_startup_sequence, StartupStage};
use crate::resources::{RenderConfig, SineTerrain, TerrainConfig};
use crate::systems::{
    aircraft_wireframe_system, chase_camera_system, hud_update_system,
    spawn_chase_camera, spawn_hud, terrain_wireframe_system,
};

/// Opens the window and draws the aircraft, the chase view and the HUD.
pub struct ArcadeRenderPlugin {
    render: RenderConfig,
    terrain: TerrainConfig,
}

impl ArcadeRenderPlugin {
    pub fn new(render: RenderConfig, terrain: TerrainConfig) -> Self {
        ArcadeRenderPlugin { render, terrain }
    }
}

impl Plugin for ArcadeRenderPlugin {
    fn build(&self, app: &mut App) {
        ensure_startup_sequence(app);

        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.render.title.clone(),
                resolution: WindowResolution::new(
                    self.render.screen_width as f32,
                    self.render.screen_height as f32,
                ),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(self.render.clone())
        .add_systems(
            Startup,
            (
                spawn_chase_camera.in_set(StartupStage::BuildCameras),
                spawn_hud.in_set(StartupStage::BuildOverlay),
            ),
        )
        .add_systems(
            Update,
            (
                chase_camera_system,
                aircraft_wireframe_system,
                hud_update_system,
                terrain_wireframe_system,
            ),
        );

        if self.render.draw_terrain {
            app.insert_resource(SineTerrain::generate(&self.terrain));
        }
    }
}
