//! Window border decoration and floating-window size.

use serde::{Deserialize, Serialize};

/// Decorative border drawn inside each tiled slot.
///
/// When enabled, the slot measured for a window is shrunk by
/// `width + offset` on every edge before it is sent to the native layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    pub enabled: bool,
    /// Border thickness in device-independent pixels (valid range: 0-20).
    pub width: f64,
    /// Extra distance between border and window; may be negative
    /// (valid range: -10-10).
    pub offset: f64,
}

impl BorderConfig {
    /// Inset applied to each edge of a measured slot.
    pub fn correction(&self) -> f64 {
        if self.enabled {
            self.width + self.offset
        } else {
            0.0
        }
    }
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 3.0,
            offset: -1.0,
        }
    }
}

/// Size of the placeholder shown for a pending floating placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    /// Width in device-independent pixels (valid range: 100-10000).
    pub width: f64,
    /// Height in device-independent pixels (valid range: 100-10000).
    pub height: f64,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
