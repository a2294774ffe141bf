use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::apple::Effect;
use crate::error::ConfigError;
use crate::grid::Grid;

/// Game settings, loadable from a JSON file. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the grid in cells
    pub grid_width: u32,
    /// Height of the grid in cells
    pub grid_height: u32,
    /// Side of one cell in pixels
    pub cell_size: u32,
    /// Ticks per second at startup
    pub initial_speed: u32,
    pub min_speed: u32,
    pub max_speed: u32,
    /// Change applied by one speed key press
    pub speed_step: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            cell_size: 20,
            initial_speed: 20,
            min_speed: 5,
            max_speed: 50,
            speed_step: 5,
        }
    }
}

impl GameConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Reads a config file. The result is not validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.grid_width > i32::MAX as u32 || self.grid_height > i32::MAX as u32 {
            return Err(ConfigError::Invalid("grid dimensions too large".into()));
        }
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be non-zero".into()));
        }
        if self.speed_step == 0 {
            return Err(ConfigError::Invalid("speed_step must be non-zero".into()));
        }
        if self.min_speed == 0 || self.min_speed > self.max_speed {
            return Err(ConfigError::Invalid(format!(
                "speed range {}..={} is empty or starts at zero",
                self.min_speed, self.max_speed
            )));
        }
        if !(self.min_speed..=self.max_speed).contains(&self.initial_speed) {
            return Err(ConfigError::Invalid(format!(
                "initial_speed {} outside {}..={}",
                self.initial_speed, self.min_speed, self.max_speed
            )));
        }
        // A snake that fills the board is reset, so this only keeps tiny boards out.
        let needed = 4 * (Effect::ALL.len() + 1);
        let cells = self.grid_width as usize * self.grid_height as usize;
        if cells < needed {
            return Err(ConfigError::Invalid(format!(
                "a {}x{} grid has {cells} cells, need at least {needed}",
                self.grid_width, self.grid_height
            )));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(
            self.grid_width as i32,
            self.grid_height as i32,
            self.cell_size as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.initial_speed, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "grid_width": 10 }"#).unwrap();
        assert_eq!(config.grid_width, 10);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.max_speed, 50);
    }

    #[test]
    fn test_rejects_bad_speed_range() {
        let config = GameConfig {
            min_speed: 30,
            max_speed: 10,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            initial_speed: 60,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_tiny_grid() {
        assert!(GameConfig::new(2, 2).validate().is_err());
        assert!(GameConfig::new(5, 1).validate().is_err());
        assert!(GameConfig::new(5, 3).validate().is_err());
        assert!(GameConfig::new(4, 4).validate().is_ok());
        assert!(GameConfig::new(0, 10).validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_roundtrip_file() {
        let path = std::env::temp_dir().join(format!("snake_bend_config_{}.json", std::process::id()));
        let config = GameConfig::new(12, 9);
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = GameConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_garbage() {
        let path = std::env::temp_dir().join(format!("snake_bend_garbage_{}.json", std::process::id()));
        fs::write(&path, "not json").unwrap();
        let err = GameConfig::load(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
