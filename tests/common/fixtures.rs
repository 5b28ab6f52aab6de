use nalgebra::Vector3;
use skyhop::{components::ArcadeStartConfig, resources::SimulationConfig};

/// Level flight at 150 with the autopilot off.
pub fn level_start() -> ArcadeStartConfig {
    ArcadeStartConfig {
        position: Vector3::new(0.0, 150.0, 0.0),
        yaw: 0.0,
        throttle: 0.3,
        velocity: 2.0,
        autopilot: false,
        camera_distance: 100.0,
    }
}

pub fn test_config() -> SimulationConfig {
    SimulationConfig {
        start: level_start(),
        ..Default::default()
    }
}

/// Joins console lines the way the menu loop prints them.
pub fn menu_transcript(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}
