mod arcade_aircraft;
mod events;
mod headless;
mod menu_aircraft;
mod render;
mod staging;
mod telemetry;

pub use arcade_aircraft::{ArcadeAircraftPlugin, ArcadeSet};
pub use events::MenuCommandEvent;
pub use headless::HeadlessPlugin;
pub use menu_aircraft::{menu_runner, run_menu, MenuAircraftPlugin, MenuSet};
pub use render::ArcadeRenderPlugin;
pub use staging::{StartupSequencePlugin, StartupStage};
pub use telemetry::TelemetryPlugin;
