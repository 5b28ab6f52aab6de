use approx::assert_relative_eq;
use nalgebra::Vector3;
use skyhop::components::{ArcadeAircraftConfig, ArcadeAircraftState};

/// Invariants that hold after every integration step.
pub fn assert_arcade_state_valid(state: &ArcadeAircraftState, config: &ArcadeAircraftConfig) {
    assert!(
        state.position.y >= config.ground_height,
        "below ground: {}",
        state.position.y
    );
    assert!(
        (0.0..360.0).contains(&state.yaw),
        "yaw out of range: {}",
        state.yaw
    );
    assert!(
        state.pitch.abs() <= config.attitude_limit,
        "pitch out of range: {}",
        state.pitch
    );
    assert!(
        state.roll.abs() <= config.attitude_limit,
        "roll out of range: {}",
        state.roll
    );
    assert!(
        (0.0..=1.0).contains(&state.throttle),
        "throttle out of range: {}",
        state.throttle
    );
    assert!(state.position.iter().all(|v| v.is_finite()));
}

pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
