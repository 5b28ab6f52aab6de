pub mod aircraft;
mod camera;
mod hud;
mod terrain;

pub use aircraft::{aircraft_rotation, aircraft_wireframe, aircraft_wireframe_system, Segment};
pub use camera::{chase_camera_system, chase_camera_transform, spawn_chase_camera};
pub use hud::{hud_update_system, spawn_hud, AutopilotIndicator, HudGauge, HudReadout};
pub use terrain::terrain_wireframe_system;
