//! Demo profile configuration.
//!
//! A small TOML file seeds the session: the two display names and the
//! cosmetic timer delays. Nothing is ever written back; the session is
//! transient by design.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Session bootstrap values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Display name of the primary actor.
    pub user_name: String,
    /// Display name of the invited partner.
    pub partner_name: String,
    /// Splash auto-advance delay in milliseconds.
    pub splash_ms: u64,
    /// Processing screen status-flip delay in milliseconds.
    pub processing_stage_ms: u64,
    /// Processing screen auto-advance delay in milliseconds.
    pub processing_done_ms: u64,
    /// Post-setup "Sync Complete" hold in milliseconds.
    pub success_hold_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            user_name: "Priya".to_string(),
            partner_name: "Arjun".to_string(),
            splash_ms: 3_000,
            processing_stage_ms: 1_500,
            processing_done_ms: 3_500,
            success_hold_ms: 2_500,
        }
    }
}

impl DemoConfig {
    /// Load a profile from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: DemoConfig =
            toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.processing_done_ms <= self.processing_stage_ms {
            return Err(ConfigError::InvalidValue {
                key: "processing_done_ms".to_string(),
                message: "must be greater than processing_stage_ms".to_string(),
            });
        }
        Ok(())
    }
}
