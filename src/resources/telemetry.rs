use bevy::prelude::*;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::components::ArcadeAircraftState;
use crate::resources::TelemetryError;

/// One line of the telemetry log.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryRecord {
    pub tick: u64,
    pub autopilot: bool,
    pub camera_distance: f64,
    pub state: ArcadeAircraftState,
}

/// JSON-lines sink for per-tick aircraft snapshots.
#[derive(Resource)]
pub struct TelemetryRecorder {
    writer: Box<dyn Write + Send + Sync>,
    records: u64,
}

impl TelemetryRecorder {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, TelemetryError> {
        let file = File::create(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    pub fn from_writer(writer: impl Write + Send + Sync + 'static) -> Self {
        Self {
            writer: Box::new(writer),
            records: 0,
        }
    }

    pub fn record(&mut self, record: &TelemetryRecord) -> Result<(), TelemetryError> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.records += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), TelemetryError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn records(&self) -> u64 {
        self.records
    }
}

impl Drop for TelemetryRecorder {
    fn drop(&mut self) {
        match self.flush() {
            Ok(()) => debug!("Wrote {} telemetry records", self.records),
            Err(e) => error!("Failed to flush telemetry: {}", e),
        }
    }
}
