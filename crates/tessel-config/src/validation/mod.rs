//! Full configuration validation.
//!
//! Validates every numeric range and collects all errors into a single
//! `ConfigError`.

mod helpers;
mod sections;


use crate::schema::TesselConfig;
use tessel_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TesselConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_border(&mut errors, config);
    sections::validate_floating(&mut errors, config);
    sections::validate_layout(&mut errors, config);
    sections::validate_sync(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
