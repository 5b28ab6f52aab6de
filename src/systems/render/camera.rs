use bevy::prelude::*;

use crate::components::{ArcadeAircraftState, CameraConfig, CameraRig, ChaseCamera, PlayerController};
use crate::resources::RenderConfig;
use crate::systems::render::aircraft::aircraft_translation;

pub fn spawn_chase_camera(mut commands: Commands, render: Res<RenderConfig>) {
    let [r, g, b] = render.clear_color;
    commands.insert_resource(ClearColor(Color::srgb(r, g, b)));

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: render.fov.to_radians(),
            near: render.near,
            far: render.far,
            ..default()
        }),
        Transform::default(),
        ChaseCamera,
        Name::new("Chase Camera"),
    ));
}

/// Places the camera behind and above the aircraft, looking at it.
pub fn chase_camera_transform(
    state: &ArcadeAircraftState,
    rig: &CameraRig,
    config: &CameraConfig,
) -> Transform {
    let target = aircraft_translation(state);
    let yaw = state.yaw.to_radians();
    let eye = Vec3::new(
        (state.position.x - yaw.sin() * rig.distance) as f32,
        (state.position.y + config.height_offset) as f32,
        (state.position.z - yaw.cos() * rig.distance) as f32,
    );

    Transform::from_translation(eye).looking_at(target, Vec3::Y)
}

pub fn chase_camera_system(
    mut camera_query: Query<&mut Transform, With<ChaseCamera>>,
    target_query: Query<(&ArcadeAircraftState, &CameraRig), With<PlayerController>>,
    config: Res<CameraConfig>,
) {
    if let (Ok(mut transform), Ok((state, rig))) =
        (camera_query.get_single_mut(), target_query.get_single())
    {
        *transform = chase_camera_transform(state, rig, &config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_camera_behind_aircraft() {
        let state = ArcadeAircraftState {
            position: Vector3::new(0.0, 150.0, 0.0),
            yaw: 90.0,
            ..Default::default()
        };
        let transform =
            chase_camera_transform(&state, &CameraRig::new(100.0), &CameraConfig::default());

        assert!(transform
            .translation
            .abs_diff_eq(Vec3::new(-100.0, 180.0, 0.0), 1e-3));

        let towards_aircraft = (Vec3::new(0.0, 150.0, 0.0) - transform.translation).normalize();
        assert!(transform.forward().abs_diff_eq(towards_aircraft, 1e-4));
    }
}
