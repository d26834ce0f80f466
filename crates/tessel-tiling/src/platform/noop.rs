//! No-op bridge.
//!
//! Used when no native layer is attached; every command succeeds silently.

use super::{NativeBridge, PositionMap, Result};

pub struct NoopBridge;

impl NativeBridge for NoopBridge {
    fn set_positions(&self, _positions: &PositionMap) -> Result<()> {
        Ok(())
    }
}
