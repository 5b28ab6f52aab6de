use bevy::prelude::*;

use crate::components::{
    ArcadeAircraftConfig, ArcadeAircraftState, AutopilotState, CameraConfig, CameraRig,
    FlightAction, PlayerController,
};
use crate::resources::{FlightInput, KeyBindings};

/// Samples the keyboard into the action set read by the controller.
///
/// Without an input plugin (headless runs) the action set is left alone, so
/// tests and scripted drivers can write it directly.
pub fn keyboard_input_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<FlightInput>,
) {
    if let Some(keyboard) = keyboard {
        *input = bindings.resolve(&keyboard);
    }
}

/// Applies the active actions to the player aircraft.
///
/// The autopilot toggle is handled first; while the autopilot is engaged
/// the manual flight controls are ignored, the camera zoom never is.
pub fn arcade_control_system(
    mut query: Query<
        (
            &mut ArcadeAircraftState,
            &mut AutopilotState,
            &mut CameraRig,
            &ArcadeAircraftConfig,
        ),
        With<PlayerController>,
    >,
    input: Res<FlightInput>,
    camera_config: Res<CameraConfig>,
) {
    if let Ok((mut state, mut autopilot, mut rig, config)) = query.get_single_mut() {
        if autopilot.latch_toggle(input.is_active(FlightAction::ToggleAutopilot)) {
            info!(
                "Autopilot {}",
                if autopilot.engaged {
                    "engaged"
                } else {
                    "disengaged"
                }
            );
        }

        if !autopilot.engaged {
            apply_manual_controls(&mut state, &input, config);
        }
        apply_camera_controls(&mut rig, &input, &camera_config);
    }
}

/// Fixed per-tick increments for every held flight action.
pub fn apply_manual_controls(
    state: &mut ArcadeAircraftState,
    input: &FlightInput,
    config: &ArcadeAircraftConfig,
) {
    if input.is_active(FlightAction::ThrottleUp) {
        state.throttle = (state.throttle + config.throttle_step).min(1.0);
    }
    if input.is_active(FlightAction::ThrottleDown) {
        state.throttle = (state.throttle - config.throttle_step).max(0.0);
    }

    if input.is_active(FlightAction::YawLeft) {
        state.yaw -= config.yaw_rate;
    }
    if input.is_active(FlightAction::YawRight) {
        state.yaw += config.yaw_rate;
    }
    if input.is_active(FlightAction::NoseDown) {
        state.pitch -= config.pitch_rate;
    }
    if input.is_active(FlightAction::NoseUp) {
        state.pitch += config.pitch_rate;
    }
    if input.is_active(FlightAction::RollLeft) {
        state.roll -= config.roll_rate;
    }
    if input.is_active(FlightAction::RollRight) {
        state.roll += config.roll_rate;
    }
}

pub fn apply_camera_controls(rig: &mut CameraRig, input: &FlightInput, config: &CameraConfig) {
    if input.is_active(FlightAction::CameraCloser) {
        rig.adjust(-config.zoom_step, config);
    }
    if input.is_active(FlightAction::CameraFarther) {
        rig.adjust(config.zoom_step, config);
    }
}
