pub mod aircraft;
pub mod autopilot;
pub mod camera;
pub mod controller;

pub use aircraft::{
    ArcadeAircraftConfig, ArcadeAircraftState, ArcadeStartConfig, MenuAircraftConfig,
    MenuAircraftState,
};
pub use autopilot::{AutopilotConfig, AutopilotState, Wave};
pub use camera::{CameraConfig, CameraRig, ChaseCamera};
pub use controller::{FlightAction, MenuCommand, PlayerController};
