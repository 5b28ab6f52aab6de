use bevy::prelude::*;
use std::collections::BTreeSet;

use crate::components::FlightAction;

/// Actions active on the current tick.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct FlightInput {
    active: BTreeSet<FlightAction>,
}

impl FlightInput {
    pub fn from_actions(actions: impl IntoIterator<Item = FlightAction>) -> Self {
        Self {
            active: actions.into_iter().collect(),
        }
    }

    pub fn is_active(&self, action: FlightAction) -> bool {
        self.active.contains(&action)
    }
}

/// Keyboard layout of the arcade aircraft.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub bindings: Vec<(KeyCode, FlightAction)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCode::KeyW, FlightAction::ThrottleUp),
                (KeyCode::KeyS, FlightAction::ThrottleDown),
                (KeyCode::KeyA, FlightAction::YawLeft),
                (KeyCode::KeyD, FlightAction::YawRight),
                (KeyCode::ArrowUp, FlightAction::NoseDown),
                (KeyCode::ArrowDown, FlightAction::NoseUp),
                (KeyCode::KeyQ, FlightAction::RollLeft),
                (KeyCode::KeyE, FlightAction::RollRight),
                (KeyCode::Space, FlightAction::ToggleAutopilot),
                (KeyCode::NumpadAdd, FlightAction::CameraCloser),
                (KeyCode::NumpadSubtract, FlightAction::CameraFarther),
            ],
        }
    }
}

impl KeyBindings {
    /// Actions whose key is held in `keyboard`.
    pub fn resolve(&self, keyboard: &ButtonInput<KeyCode>) -> FlightInput {
        FlightInput::from_actions(
            self.bindings
                .iter()
                .filter(|(key, _)| keyboard.pressed(*key))
                .map(|(_, action)| *action),
        )
    }
}
