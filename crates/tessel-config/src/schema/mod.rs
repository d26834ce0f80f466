//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod border;
mod layout;
mod system;

pub use border::*;
pub use layout::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct TesselConfig {
    pub border: BorderConfig,
    pub floating: FloatingConfig,
    pub layout: LayoutConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
