mod lifecycle;
mod menu;
mod telemetry;

pub use lifecycle::{display_hint, tick_limit_system};
pub use menu::menu_banner_system;
pub use telemetry::{position_log_system, telemetry_record_system};
