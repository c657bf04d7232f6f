//! Settings and constants loading.

use std::path::Path;

use hy_core::PhysicalConstants;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Service settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub constants: PhysicalConstants,
}

impl Settings {
    pub fn with_constants(constants: PhysicalConstants) -> AppResult<Self> {
        constants.validate()?;
        Ok(Self { constants })
    }

    /// Load settings (`{ constants: ... }`) from a YAML or JSON file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let settings: Settings = read_document(path)?;
        settings.constants.validate()?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Settings whose constants come from a bare constants file.
    pub fn from_constants_file(path: &Path) -> AppResult<Self> {
        let constants: PhysicalConstants = read_document(path)?;
        Self::with_constants(constants)
    }

    /// The constants in effect, rendered as YAML.
    pub fn constants_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(&self.constants)
            .map_err(|e| AppError::Config(format!("Failed to serialize constants: {e}")))
    }
}

fn read_document<T: serde::de::DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("Failed to read {}: {e}", path.display())))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse {}: {e}", path.display()))),
        Some("yaml" | "yml") => serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse {}: {e}", path.display()))),
        _ => Err(AppError::Config(format!(
            "Unsupported settings format: {}",
            path.display()
        ))),
    }
}
