use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Log the aircraft position every tick.
    pub log_position: bool,
    /// Write one JSON state snapshot per tick to this file.
    pub record_path: Option<PathBuf>,
}
