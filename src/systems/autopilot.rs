use bevy::prelude::*;

use crate::components::{ArcadeAircraftState, AutopilotConfig, AutopilotState};

/// Flies every aircraft whose autopilot is engaged.
pub fn autopilot_system(
    mut query: Query<(
        &mut ArcadeAircraftState,
        &mut AutopilotState,
        &AutopilotConfig,
    )>,
) {
    for (mut state, mut autopilot, config) in query.iter_mut() {
        fly(&mut state, &mut autopilot, config);
    }
}

/// Advances the autopilot timer and overwrites orientation and throttle
/// with the flight pattern. Does nothing while disengaged, so the timer
/// stays frozen.
pub fn fly(state: &mut ArcadeAircraftState, autopilot: &mut AutopilotState, config: &AutopilotConfig) {
    if !autopilot.engaged {
        return;
    }

    autopilot.timer += config.time_step;
    let t = autopilot.timer;

    state.yaw += config.yaw_rate.sample(t);
    state.pitch = config.pitch.sample(t);
    state.roll = config.roll.sample(t);
    state.throttle = config.throttle.sample(t).clamp(0.0, 1.0);

    // Altitude band overrides the pattern for this tick only
    if state.altitude() < config.min_altitude {
        state.pitch = config.low_altitude_pitch;
    }
    if state.altitude() > config.max_altitude {
        state.pitch = config.high_altitude_pitch;
    }
}
