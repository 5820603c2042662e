//! Level-build settings
//!
//! Loaded from a JSON file; any missing field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::Result;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 0x4841_4D4C_4554;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Fixed run seed (None = `DEFAULT_SEED`)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Effective seed
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LevelError;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(settings.screen_height, 1200);
        assert_eq!(settings.screen_width, 1600);
        assert_eq!(settings.seed(), 7);
    }

    #[test]
    fn test_default_seed() {
        assert_eq!(Settings::default().seed(), DEFAULT_SEED);
    }

    #[test]
    fn test_bad_json_is_json_error() {
        let err = Settings::from_json("{ screen_height: }").unwrap_err();
        assert!(matches!(err, LevelError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load("/nonexistent/hamlet/settings.json").unwrap_err();
        assert!(matches!(err, LevelError::Io(_)));
    }
}
