//! Settings for the simulation, the layout rules and the shell.
//!
//! Loaded from YAML. Every field has a default, so a file only needs the
//! values it changes.

use std::path::Path;

use macroquad::color::Color;
use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridConfig,
    pub layout: LayoutConfig,
    pub speed: SpeedConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Probability that a cell starts alive when randomizing
    pub density: f64,
    /// Fixed seed for reproducible random fills
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 50,
            density: 0.3,
            seed: None,
        }
    }
}

/// Cell sizing rules, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub min_cell_size: u32,
    pub max_cell_size: u32,
    /// Smallest cell size that still gets separator lines
    pub grid_line_threshold: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_cell_size: 4,
            max_cell_size: 20,
            grid_line_threshold: 6,
        }
    }
}

/// Generations per second while running.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    pub updates_per_second: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            updates_per_second: 10.0,
            min: 1.0,
            max: 60.0,
        }
    }
}

/// RGBA colours, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: [u8; 4],
    pub grid_line: [u8; 4],
    pub alive: [u8; 4],
    pub highlight: [u8; 4],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: [15, 15, 15, 255],
            grid_line: [40, 40, 40, 255],
            alive: [0, 255, 150, 255],
            highlight: [255, 255, 0, 90],
        }
    }
}

pub(crate) fn rgba([r, g, b, a]: [u8; 4]) -> Color {
    Color::from_rgba(r, g, b, a)
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LifeError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        let settings: Settings = serde_yaml::from_str(&content).map_err(|e| {
            LifeError::Config(format!("failed to parse {}: {e}", path.display()))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)
            .map_err(|e| LifeError::Config(format!("failed to serialize settings: {e}")))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LifeError::Config(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| LifeError::Config(format!("failed to write {}: {e}", path.display())))
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(LifeError::Config(msg));

        if self.grid.width == 0 || self.grid.height == 0 {
            return fail(format!(
                "grid dimensions must be positive, got {}x{}",
                self.grid.width, self.grid.height
            ));
        }

        if !(0.0..=1.0).contains(&self.grid.density) {
            return fail(format!("density must be within [0, 1], got {}", self.grid.density));
        }

        self.layout.validate()?;
        self.speed.validate()
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_cell_size == 0 || self.min_cell_size > self.max_cell_size {
            return Err(LifeError::Config(format!(
                "cell size bounds must satisfy 1 <= min <= max, got {}..{}",
                self.min_cell_size, self.max_cell_size
            )));
        }

        if self.grid_line_threshold < self.min_cell_size {
            return Err(LifeError::Config(format!(
                "grid line threshold {} is below the minimum cell size {}",
                self.grid_line_threshold, self.min_cell_size
            )));
        }

        Ok(())
    }
}

impl SpeedConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max) {
            return Err(LifeError::Config(format!(
                "speed bounds must satisfy 0 < min <= max, got {}..{}",
                self.min, self.max
            )));
        }

        if !(self.updates_per_second.is_finite() && self.updates_per_second > 0.0) {
            return Err(LifeError::Config(format!(
                "updates per second must be positive, got {}",
                self.updates_per_second
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!((settings.grid.width, settings.grid.height), (80, 50));
        assert_eq!(settings.layout.min_cell_size, 4);
        assert_eq!(settings.layout.max_cell_size, 20);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings: Settings = serde_yaml::from_str("grid:\n  width: 120\n  seed: 9\n").unwrap();

        assert_eq!(settings.grid.width, 120);
        assert_eq!(settings.grid.height, 50);
        assert_eq!(settings.grid.seed, Some(9));
        assert_eq!(settings.speed, SpeedConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.grid.height = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.grid.density = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.layout.min_cell_size = 30;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.speed.min = 0.0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.layout.grid_line_threshold = 2;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_speed_rejects_non_finite_values() {
        let settings: Settings = serde_yaml::from_str("speed:\n  updates_per_second: .nan\n").unwrap();
        assert!(settings.speed.updates_per_second.is_nan());
        assert!(matches!(settings.validate(), Err(LifeError::Config(_))));

        let speed = SpeedConfig { max: f32::INFINITY, ..SpeedConfig::default() };
        assert!(speed.validate().is_err());

        let speed = SpeedConfig { updates_per_second: -2.0, ..SpeedConfig::default() };
        assert!(speed.validate().is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("life.yaml");

        let mut settings = Settings::default();
        settings.grid.density = 0.45;
        settings.theme.alive = [255, 0, 0, 255];
        settings.to_file(&path).unwrap();

        assert_eq!(Settings::from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Settings::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, LifeError::Config(_)));
    }
}
