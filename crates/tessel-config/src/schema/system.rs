//! System configuration types: sync timing and logging.

use serde::{Deserialize, Serialize};

/// Retile scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Trailing-edge delay used to coalesce bursts of retile triggers,
    /// in milliseconds (valid range: 0-1000).
    pub coalesce_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { coalesce_ms: 20 }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

impl LoggingConfig {
    /// `EnvFilter` directive for the workspace crates.
    pub fn directive(&self) -> String {
        format!("tessel={}", self.level.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================
