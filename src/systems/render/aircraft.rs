use bevy::prelude::*;

use crate::components::ArcadeAircraftState;

/// Fuselage triangles, nose towards +z.
const FUSELAGE: [[Vec3; 3]; 3] = [
    [
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(-2.0, 0.0, -10.0),
        Vec3::new(2.0, 0.0, -10.0),
    ],
    [
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(0.0, 2.0, -10.0),
        Vec3::new(-2.0, 0.0, -10.0),
    ],
    [
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(2.0, 0.0, -10.0),
        Vec3::new(0.0, 2.0, -10.0),
    ],
];

const WING: [Vec3; 4] = [
    Vec3::new(-15.0, 0.0, -2.0),
    Vec3::new(15.0, 0.0, -2.0),
    Vec3::new(10.0, 0.0, 2.0),
    Vec3::new(-10.0, 0.0, 2.0),
];

/// Half edge of the marker cube drawn around the aircraft.
const MARKER_HALF_EDGE: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

/// Render rotation of the aircraft: heading about y, then pitch, then roll.
///
/// Pitch is negated so a positive pitch shows the nose up, matching the
/// direction the integrator moves the aircraft.
pub fn aircraft_rotation(state: &ArcadeAircraftState) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        (state.yaw as f32).to_radians(),
        -(state.pitch as f32).to_radians(),
        (state.roll as f32).to_radians(),
    )
}

pub fn aircraft_translation(state: &ArcadeAircraftState) -> Vec3 {
    Vec3::new(
        state.position.x as f32,
        state.position.y as f32,
        state.position.z as f32,
    )
}

/// World space wireframe of the aircraft and its marker cube.
pub fn aircraft_wireframe(state: &ArcadeAircraftState) -> Vec<Segment> {
    let rotation = aircraft_rotation(state);
    let origin = aircraft_translation(state);
    let place = |v: Vec3| origin + rotation * v;

    let fuselage = Color::srgb(0.8, 0.2, 0.2);
    let wing = Color::srgb(0.6, 0.6, 0.6);

    let mut segments = Vec::with_capacity(9 + 4 + 12);
    let mut polygon = |vertices: &[Vec3], color: Color| {
        for (i, v) in vertices.iter().enumerate() {
            let next = vertices[(i + 1) % vertices.len()];
            segments.push(Segment {
                start: place(*v),
                end: place(next),
                color,
            });
        }
    };

    for triangle in &FUSELAGE {
        polygon(triangle, fuselage);
    }
    polygon(&WING, wing);

    let s = MARKER_HALF_EDGE;
    let corner = |i: usize| {
        Vec3::new(
            if i & 1 == 0 { -s } else { s },
            if i & 2 == 0 { -s } else { s },
            if i & 4 == 0 { -s } else { s },
        )
    };
    for i in 0..8 {
        for bit in [1, 2, 4] {
            let j = i | bit;
            if j != i {
                segments.push(Segment {
                    start: place(corner(i)),
                    end: place(corner(j)),
                    color: Color::WHITE,
                });
            }
        }
    }

    segments
}

pub fn aircraft_wireframe_system(query: Query<&ArcadeAircraftState>, mut gizmos: Gizmos) {
    for state in query.iter() {
        for segment in aircraft_wireframe(state) {
            gizmos.line(segment.start, segment.end, segment.color);
        }
    }
}
