//! Settings for the tiling sync core.
//!
//! Settings live in a TOML file. Every section uses serde defaults, so a
//! partial file (or none at all) yields a working configuration. The
//! [`ReloadManager`] republishes validated settings whenever the file
//! changes on disk.

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{
    BorderConfig, FloatingConfig, LayoutConfig, LogLevel, LoggingConfig, SyncConfig,
    TesselConfig,
};
pub use watcher::ConfigWatcher;

use std::path::Path;

use tessel_common::ConfigError;

/// Load settings from an explicit path and validate the result.
pub fn load_config_from(path: &Path) -> Result<TesselConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_accepts_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout]\ngap = 4.0\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert!((config.layout.gap - 4.0).abs() < f64::EPSILON);
        assert_eq!(config.sync.coalesce_ms, 20);
    }

    #[test]
    fn load_config_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_rejects_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[border]\nwidth = 500.0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("border.width"));
    }
}
