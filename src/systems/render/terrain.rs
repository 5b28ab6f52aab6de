use bevy::prelude::*;

use crate::resources::SineTerrain;

fn vertex(terrain: &SineTerrain, i: usize, k: usize) -> Option<Vec3> {
    terrain
        .vertex(i, k)
        .map(|v| Vec3::new(v.x as f32, v.y as f32, v.z as f32))
}

/// Grid lines between neighbouring terrain samples.
pub fn terrain_wireframe_system(terrain: Option<Res<SineTerrain>>, mut gizmos: Gizmos) {
    let Some(terrain) = terrain else {
        return;
    };
    let color = Color::srgb(0.2, 0.8, 0.2);
    let n = terrain.size();

    for i in 0..n {
        for k in 0..n {
            let Some(here) = vertex(&terrain, i, k) else {
                continue;
            };
            for next in [vertex(&terrain, i, k + 1), vertex(&terrain, i + 1, k)]
                .into_iter()
                .flatten()
            {
                gizmos.line(here, next, color);
            }
        }
    }
}
