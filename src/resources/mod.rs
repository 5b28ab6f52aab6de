pub mod config;
mod console;
mod errors;
mod input;
mod telemetry;
mod terrain;
mod time;

pub use config::{PhysicsConfig, RenderConfig, SimulationConfig, TelemetryConfig};
pub use console::{MenuConsole, MenuSession};
pub use errors::{ConfigError, MenuError, TelemetryError};
pub use input::{FlightInput, KeyBindings};
pub use telemetry::{TelemetryRecord, TelemetryRecorder};
pub use terrain::{SineTerrain, TerrainConfig};
pub use time::{TickCounter, TickLimit};
