pub mod config;
pub mod state;

pub use config::{ArcadeAircraftConfig, ArcadeStartConfig, MenuAircraftConfig};
pub use state::{ArcadeAircraftState, MenuAircraftState};
