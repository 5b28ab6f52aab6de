use bevy::prelude::*;

use crate::plugins::ArcadeSet;
use crate::resources::{TelemetryConfig, TelemetryRecorder};
use crate::systems::{position_log_system, telemetry_record_system};

/// Position log and JSON-lines recording of the player aircraft.
pub struct TelemetryPlugin {
    config: TelemetryConfig,
}

impl TelemetryPlugin {
    pub fn new(config: TelemetryConfig) -> Self {
        TelemetryPlugin { config }
    }
}

impl Plugin for TelemetryPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone()).add_systems(
            FixedUpdate,
            (position_log_system, telemetry_record_system)
                .chain()
                .in_set(ArcadeSet::Report),
        );

        let Some(path) = &self.config.record_path else {
            return;
        };
        match TelemetryRecorder::create(path) {
            Ok(recorder) => {
                info!("Recording telemetry to {}", path.display());
                app.insert_resource(recorder);
            }
            Err(e) => error!("Cannot record telemetry to {}: {}", path.display(), e),
        }
    }
}
