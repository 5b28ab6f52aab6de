use bevy::prelude::*;

use crate::components::{ArcadeAircraftConfig, ArcadeAircraftState, AutopilotConfig, AutopilotState};
use crate::resources::TickCounter;
use crate::utils::{deg_to_rad, wrap_degrees};

/// Advances every arcade aircraft by one tick.
///
/// Aircraft without an `AutopilotState` are treated as manually flown.
pub fn arcade_integrator_system(
    mut query: Query<(
        &mut ArcadeAircraftState,
        &ArcadeAircraftConfig,
        Option<&AutopilotState>,
        Option<&AutopilotConfig>,
    )>,
    mut counter: ResMut<TickCounter>,
) {
    let default_autopilot = AutopilotConfig::default();

    for (mut state, config, autopilot, autopilot_config) in query.iter_mut() {
        let engaged = autopilot.is_some_and(|a| a.engaged);
        integrate(
            &mut state,
            config,
            autopilot_config.unwrap_or(&default_autopilot),
            engaged,
        );
    }

    counter.advance();
}

/// Moves the aircraft along its heading and applies the boundary rules.
///
/// # Arguments
/// * `state` - Aircraft state, orientation already updated by the controller.
/// * `config` - Kinematic gains and limits.
/// * `autopilot` - Recovery values used when the autopilot hits the ground.
/// * `autopilot_engaged` - Whether the autopilot is flying this tick.
pub fn integrate(
    state: &mut ArcadeAircraftState,
    config: &ArcadeAircraftConfig,
    autopilot: &AutopilotConfig,
    autopilot_engaged: bool,
) {
    state.velocity = state.throttle * config.throttle_gain + config.min_speed;

    let yaw = deg_to_rad(state.yaw);
    let pitch = deg_to_rad(state.pitch);

    state.position.x += yaw.sin() * pitch.cos() * state.velocity;
    state.position.z += yaw.cos() * pitch.cos() * state.velocity;
    state.position.y += pitch.sin() * state.velocity;
    state.position.y -= config.gravity_drain;

    if state.position.y < config.ground_height {
        state.position.y = config.ground_height;
        state.velocity *= config.ground_friction;
        if autopilot_engaged {
            debug!("Autopilot ground contact, climbing out");
            state.throttle = autopilot.recovery_throttle;
            state.pitch = autopilot.recovery_pitch;
        }
    }

    state.pitch = state
        .pitch
        .clamp(-config.attitude_limit, config.attitude_limit);
    state.roll = state.roll.clamp(-config.attitude_limit, config.attitude_limit);
    state.yaw = wrap_degrees(state.yaw);
}
