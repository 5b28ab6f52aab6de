use bevy::prelude::*;

use crate::components::{MenuAircraftConfig, MenuAircraftState};
use crate::resources::MenuSession;

/// Advances the menu airplane once for every handled command.
pub fn menu_integrator_system(
    mut query: Query<(&mut MenuAircraftState, &MenuAircraftConfig)>,
    mut session: ResMut<MenuSession>,
) {
    if !session.take_pending_step() {
        return;
    }

    for (mut state, config) in query.iter_mut() {
        integrate(&mut state, config.throttle_gain, config.dt);
    }
}

/// Planar update in the x/z plane. Pitch is in radians and unbounded.
pub fn integrate(state: &mut MenuAircraftState, throttle_gain: f64, dt: f64) {
    let speed = state.throttle * throttle_gain;
    state.velocity.x = speed * state.pitch.cos();
    state.velocity.z = speed * state.pitch.sin();

    state.position.x += state.velocity.x * dt;
    state.position.z += state.velocity.z * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_level_update() {
        let mut state = MenuAircraftState::new();
        state.throttle = 0.1;
        integrate(&mut state, 100.0, 0.1);

        assert_relative_eq!(state.velocity.x, 10.0);
        assert_relative_eq!(state.velocity.z, 0.0);
        assert_relative_eq!(state.position.x, 1.0);
    }

    #[test]
    fn test_pitched_update() {
        let mut state = MenuAircraftState::new();
        state.throttle = 0.1;
        state.pitch = 0.05;
        integrate(&mut state, 100.0, 0.1);

        assert_relative_eq!(state.velocity.x, 9.9875, epsilon = 1e-4);
        assert_relative_eq!(state.velocity.z, 0.4998, epsilon = 1e-4);
        assert_relative_eq!(state.position.x, 0.99875, epsilon = 1e-5);
        assert_relative_eq!(state.position.z, 0.04998, epsilon = 1e-5);
    }

    #[test]
    fn test_vertical_axis_untouched() {
        let mut state = MenuAircraftState::new();
        state.throttle = 1.0;
        state.pitch = 1.2;
        for _ in 0..50 {
            integrate(&mut state, 100.0, 0.1);
        }

        assert_eq!(state.position.y, 0.0);
        assert_eq!(state.velocity.y, 0.0);
    }
}
