//! Core TOML config loading.

use crate::schema::TesselConfig;
use crate::validation;
use std::path::Path;
use tessel_common::ConfigError;
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation failures are only
/// logged here; callers that need a guaranteed-valid config run
/// [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<TesselConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: TesselConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}
