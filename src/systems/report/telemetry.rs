use bevy::prelude::*;

use crate::components::{ArcadeAircraftState, AutopilotState, CameraRig, PlayerController};
use crate::resources::{TelemetryConfig, TelemetryRecord, TelemetryRecorder, TickCounter};

/// Trace of the player position, once per tick.
pub fn position_log_system(
    query: Query<&ArcadeAircraftState, With<PlayerController>>,
    config: Res<TelemetryConfig>,
) {
    if !config.log_position {
        return;
    }
    if let Ok(state) = query.get_single() {
        info!(
            "Aircraft position: X={:.2} Y={:.2} Z={:.2}",
            state.position.x, state.position.y, state.position.z
        );
    }
}

/// Appends the player state to the telemetry log.
///
/// A failed write disables the recorder instead of stopping the flight.
pub fn telemetry_record_system(
    mut commands: Commands,
    query: Query<
        (&ArcadeAircraftState, Option<&AutopilotState>, Option<&CameraRig>),
        With<PlayerController>,
    >,
    recorder: Option<ResMut<TelemetryRecorder>>,
    counter: Res<TickCounter>,
) {
    let Some(mut recorder) = recorder else {
        return;
    };
    let Ok((state, autopilot, rig)) = query.get_single() else {
        return;
    };

    let record = TelemetryRecord {
        tick: counter.ticks,
        autopilot: autopilot.is_some_and(|a| a.engaged),
        camera_distance: rig.map_or(0.0, |r| r.distance),
        state: *state,
    };

    if let Err(e) = recorder.record(&record) {
        error!("Telemetry disabled: {}", e);
        commands.remove_resource::<TelemetryRecorder>();
    }
}
