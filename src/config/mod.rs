// src/config/mod.rs
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::errors::RunnerError;

/// Movement tuning for the player controller. Defaults mirror the values the
/// game was balanced against; a `runner.json` next to the binary overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub forward_speed: f32,
    pub lane_distance: f32,
    pub lane_change_speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub drift_compensation: f32,
    pub ground_stick: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            forward_speed: 5.0,
            lane_distance: 5.0,
            lane_change_speed: 15.0,
            jump_force: 10.0,
            gravity: -20.0,
            drift_compensation: -0.5,
            ground_stick: -1.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub offset: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: [0.0, 4.0, -6.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub dead_reload_delay: f32,
    pub win_reload_delay: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            dead_reload_delay: 1.0,
            win_reload_delay: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSpec {
    /// Lane index 0..=2 the box sits in.
    pub lane: i32,
    pub z: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    pub finish_z: f32,
    pub obstacles: Vec<ObstacleSpec>,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            finish_z: 120.0,
            obstacles: vec![
                ObstacleSpec { lane: 1, z: 20.0 },
                ObstacleSpec { lane: 0, z: 40.0 },
                ObstacleSpec { lane: 2, z: 55.0 },
                ObstacleSpec { lane: 1, z: 75.0 },
                ObstacleSpec { lane: 0, z: 95.0 },
            ],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub player: PlayerTuning,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
    pub course: CourseConfig,
}

impl RunnerConfig {
    /// Loads config from a JSON file, falling back to defaults when the file
    /// does not exist. A file that exists but fails to parse is an error.
    pub fn load(path: &Path) -> Result<Self, RunnerError> {
        if !path.exists() {
            log::info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: RunnerConfig = serde_json::from_str(&contents)
            .map_err(|e| RunnerError::ConfigError(format!("Failed to parse {}: {}", path.display(), e)))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_values() {
        let tuning = PlayerTuning::default();
        assert_eq!(tuning.forward_speed, 5.0);
        assert_eq!(tuning.lane_distance, 5.0);
        assert_eq!(tuning.jump_force, 10.0);
        assert_eq!(tuning.gravity, -20.0);
        assert_eq!(tuning.drift_compensation, -0.5);
        assert_eq!(tuning.ground_stick, -1.5);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: RunnerConfig =
            serde_json::from_str(r#"{ "player": { "forward_speed": 8.0 } }"#).unwrap();
        assert_eq!(config.player.forward_speed, 8.0);
        assert_eq!(config.player.lane_distance, 5.0);
        assert_eq!(config.scene.win_reload_delay, 5.0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = RunnerConfig::load(Path::new("definitely_not_here.json")).unwrap();
        assert_eq!(config.camera.offset, [0.0, 4.0, -6.0]);
    }
}
