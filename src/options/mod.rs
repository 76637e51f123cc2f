//! Zoom policy and camera defaults with TOML preset support.
//!
//! Options serialize to/from TOML so embedding applications can ship
//! presets; every section uses `#[serde(default)]` so partial files work.

mod camera;
mod zoom;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom::{CenterToggle, ZoomOptions};

use crate::error::RubberBandError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[zoom]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Rubber-band zoom behavior.
    pub zoom: ZoomOptions,
    /// Initial camera projection parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RubberBandError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, RubberBandError> {
        toml::from_str(content)
            .map_err(|e| RubberBandError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RubberBandError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RubberBandError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
