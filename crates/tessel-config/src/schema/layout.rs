//! Tiling layout spacing.

use serde::{Deserialize, Serialize};

/// Spacing used by the layout solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between sibling containers in pixels (valid range: 0-100).
    pub gap: f64,
    /// Padding between the work area edge and the tree (valid range: 0-200).
    pub padding: f64,
    /// Height of the tab bar drawn above a stack; 0 hides it
    /// (valid range: 0-100).
    pub stack_bar_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 10.0,
            padding: 10.0,
            stack_bar_height: 0.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
