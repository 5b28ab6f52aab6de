use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marks the aircraft driven by the local controls.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PlayerController;

/// Discrete pilot actions of the arcade aircraft, independent of any
/// keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlightAction {
    ThrottleUp,
    ThrottleDown,
    YawLeft,
    YawRight,
    NoseDown,
    NoseUp,
    RollLeft,
    RollRight,
    ToggleAutopilot,
    CameraCloser,
    CameraFarther,
}

impl FlightAction {
    pub const ALL: [FlightAction; 11] = [
        FlightAction::ThrottleUp,
        FlightAction::ThrottleDown,
        FlightAction::YawLeft,
        FlightAction::YawRight,
        FlightAction::NoseDown,
        FlightAction::NoseUp,
        FlightAction::RollLeft,
        FlightAction::RollRight,
        FlightAction::ToggleAutopilot,
        FlightAction::CameraCloser,
        FlightAction::CameraFarther,
    ];
}

/// A command typed at the menu prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    ThrottleUp,
    ThrottleDown,
    PitchUp,
    PitchDown,
    Status,
    Quit,
    /// Anything that is not a number between 1 and 6.
    Unknown(String),
}

impl MenuCommand {
    /// Menu entries in prompt order.
    pub const MENU: [(u8, &'static str); 6] = [
        (1, "throttle_up"),
        (2, "throttle_down"),
        (3, "pitch_up"),
        (4, "pitch_down"),
        (5, "status"),
        (6, "quit"),
    ];

    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token.parse::<i64>() {
            Ok(1) => MenuCommand::ThrottleUp,
            Ok(2) => MenuCommand::ThrottleDown,
            Ok(3) => MenuCommand::PitchUp,
            Ok(4) => MenuCommand::PitchDown,
            Ok(5) => MenuCommand::Status,
            Ok(6) => MenuCommand::Quit,
            _ => MenuCommand::Unknown(token.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_codes() {
        assert_eq!(MenuCommand::parse("1"), MenuCommand::ThrottleUp);
        assert_eq!(MenuCommand::parse(" 4 "), MenuCommand::PitchDown);
        assert_eq!(MenuCommand::parse("+6"), MenuCommand::Quit);
        assert_eq!(
            MenuCommand::parse("7"),
            MenuCommand::Unknown("7".to_string())
        );
        assert_eq!(
            MenuCommand::parse("up"),
            MenuCommand::Unknown("up".to_string())
        );
    }
}
