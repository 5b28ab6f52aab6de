mod autopilot;
mod controller;
pub mod physics;
pub mod render;
mod report;

pub use autopilot::{autopilot_system, fly};
pub use controller::{
    apply_menu_command, arcade_control_system, keyboard_input_system, menu_command_system,
    MenuOutcome,
};
pub use physics::{arcade_integrator_system, menu_integrator_system};
pub use render::{
    aircraft_wireframe_system, chase_camera_system, hud_update_system, spawn_chase_camera,
    spawn_hud, terrain_wireframe_system,
};
pub use report::{
    display_hint, menu_banner_system, position_log_system, telemetry_record_system,
    tick_limit_system,
};
