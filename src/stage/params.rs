//! World configuration.

use serde::{Deserialize, Serialize};

use super::error::StageError;

/// Parameters describing the coordinate space of a world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldParams {
    /// Width of the world. Positions clamp to `[0, width]` when bounded.
    pub width: f32,
    /// Height of the world. Positions clamp to `[0, height]` when bounded.
    pub height: f32,
    /// Whether actor positions are clamped to the world rectangle.
    pub bounded: bool,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            bounded: true,
        }
    }
}

impl WorldParams {
    /// Parses parameters from a JSON document. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, StageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), StageError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, StageError> {
        let json = std::fs::read_to_string(path)?;
        let params = Self::from_json(&json)?;
        log::info!(
            "loaded world params from {}: {}x{} (bounded: {})",
            path,
            params.width,
            params.height,
            params.bounded
        );
        Ok(params)
    }
}
