use super::{physics::PhysicsConfig, render::RenderConfig, telemetry::TelemetryConfig};
use crate::components::{
    ArcadeAircraftConfig, ArcadeStartConfig, AutopilotConfig, CameraConfig, MenuAircraftConfig,
};
use crate::resources::{ConfigError, TerrainConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed to build either flight loop.
///
/// Every section falls back to its defaults, so a YAML file only needs the
/// values it wants to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub render: RenderConfig,
    pub aircraft: ArcadeAircraftConfig,
    pub start: ArcadeStartConfig,
    pub autopilot: AutopilotConfig,
    pub camera: CameraConfig,
    pub menu: MenuAircraftConfig,
    pub telemetry: TelemetryConfig,
    pub terrain: TerrainConfig,
}

impl SimulationConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.physics.time_step.is_finite() && self.physics.time_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "physics time_step must be positive, got {}",
                self.physics.time_step
            )));
        }
        let (min, max) = (self.camera.min_distance, self.camera.max_distance);
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(ConfigError::Invalid(format!(
                "camera range must be finite and ordered, got {} to {}",
                min, max
            )));
        }
        if !(min..=max).contains(&self.start.camera_distance) {
            return Err(ConfigError::Invalid(format!(
                "start camera_distance {} is outside {} to {}",
                self.start.camera_distance, min, max
            )));
        }
        if self.render.screen_width == 0 || self.render.screen_height == 0 {
            return Err(ConfigError::Invalid(
                "screen size must be non-zero".to_string(),
            ));
        }
        self.aircraft.validate()?;
        self.terrain.validate()?;
        self.autopilot.validate()?;
        self.menu.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.render.screen_width, 800);
        assert_eq!(config.render.screen_height, 600);
        assert_eq!(config.render.title, "Flight Simulator");
        assert_eq!(config.physics.time_step, 0.02);
        assert_eq!(config.menu.dt, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_load() -> Result<(), Box<dyn std::error::Error>> {
        let mut config = SimulationConfig::default();
        config.start.autopilot = false;
        config.camera.max_distance = 150.0;
        let temp_file = NamedTempFile::new()?;

        config.save(temp_file.path())?;
        assert!(fs::metadata(temp_file.path()).is_ok());

        let loaded_config = SimulationConfig::load(temp_file.path())?;
        assert_eq!(loaded_config, config);

        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "menu:\n  dt: 0.5\naircraft:\n  yaw_rate: 4.0")?;

        let config = SimulationConfig::load(temp_file.path())?;
        assert_eq!(config.menu.dt, 0.5);
        assert_eq!(config.menu.throttle_step, 0.1);
        assert_eq!(config.aircraft.yaw_rate, 4.0);
        assert_eq!(config.aircraft.ground_height, 10.0);

        Ok(())
    }

    #[test]
    fn test_invalid_config_load() {
        let result = SimulationConfig::load("nonexistent_file.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_malformed_yaml() -> Result<(), Box<dyn std::error::Error>> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "physics: [not, a, map")?;

        let result = SimulationConfig::load(temp_file.path());
        assert!(matches!(result, Err(ConfigError::YamlError(_))));

        Ok(())
    }

    #[test]
    fn test_rejects_invalid_values() -> Result<(), Box<dyn std::error::Error>> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "physics:\n  time_step: 0.0")?;

        let result = SimulationConfig::load(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let mut config = SimulationConfig::default();
        config.camera.min_distance = 300.0;
        assert!(config.validate().is_err());

        Ok(())
    }

    #[test]
    fn test_rejects_bad_camera_range() -> Result<(), Box<dyn std::error::Error>> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "camera:\n  max_distance: .nan")?;
        let result = SimulationConfig::load(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let mut config = SimulationConfig::default();
        config.start.camera_distance = 500.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.start.camera_distance = 200.0;
        assert!(config.validate().is_ok());

        Ok(())
    }
}
