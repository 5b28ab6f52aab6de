use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Number of samples along each axis.
    pub size: usize,
    /// Distance between neighbouring samples.
    pub spacing: f64,
    pub x_frequency: f64,
    pub x_amplitude: f64,
    pub z_frequency: f64,
    pub z_amplitude: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size: 100,
            spacing: 10.0,
            x_frequency: 0.1,
            x_amplitude: 10.0,
            z_frequency: 0.1,
            z_amplitude: 5.0,
        }
    }
}

impl TerrainConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::Invalid(format!(
                "terrain needs at least 2 samples per side, got {}",
                self.size
            )));
        }
        if !(self.spacing > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "terrain spacing must be positive, got {}",
                self.spacing
            )));
        }
        Ok(())
    }
}

/// Square heightmap `sin(fx * i) * ax + cos(fz * k) * az`, centred on the
/// origin. Only drawn, never collided with.
#[derive(Resource, Debug, Clone)]
pub struct SineTerrain {
    size: usize,
    spacing: f64,
    heights: Vec<f64>,
}

impl SineTerrain {
    pub fn generate(config: &TerrainConfig) -> Self {
        let size = config.size;
        let mut heights = Vec::with_capacity(size * size);
        for i in 0..size {
            for k in 0..size {
                heights.push(
                    (i as f64 * config.x_frequency).sin() * config.x_amplitude
                        + (k as f64 * config.z_frequency).cos() * config.z_amplitude,
                );
            }
        }

        Self {
            size,
            spacing: config.spacing,
            heights,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn height(&self, i: usize, k: usize) -> Option<f64> {
        if i >= self.size || k >= self.size {
            return None;
        }
        self.heights.get(i * self.size + k).copied()
    }

    /// World position of sample (i, k).
    pub fn vertex(&self, i: usize, k: usize) -> Option<Vector3<f64>> {
        let half = (self.size / 2) as f64;
        self.height(i, k).map(|h| {
            Vector3::new(
                (i as f64 - half) * self.spacing,
                h,
                (k as f64 - half) * self.spacing,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_heightmap_values() {
        let terrain = SineTerrain::generate(&TerrainConfig::default());
        assert_eq!(terrain.size(), 100);
        assert_relative_eq!(terrain.height(0, 0).unwrap(), 5.0);
        assert_relative_eq!(
            terrain.height(10, 20).unwrap(),
            1.0_f64.sin() * 10.0 + 2.0_f64.cos() * 5.0
        );
        assert!(terrain.height(100, 0).is_none());
    }

    #[test]
    fn test_grid_is_centred() {
        let terrain = SineTerrain::generate(&TerrainConfig::default());
        let corner = terrain.vertex(0, 0).unwrap();
        assert_eq!((corner.x, corner.z), (-500.0, -500.0));
        let centre = terrain.vertex(50, 50).unwrap();
        assert_eq!((centre.x, centre.z), (0.0, 0.0));
    }
}
