//! Boundary to the native window-manager process.
//!
//! The sync core only reports where windows should go; moving them is the
//! native side's job. Everything outbound goes through [`NativeBridge`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tessel_common::errors::PlatformError;
use tessel_common::{Rect, WindowHandle};

pub mod json_lines;
pub mod noop;
pub mod recording;

pub use json_lines::JsonLinesBridge;
pub use noop::NoopBridge;
pub use recording::RecordingBridge;

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Absolute physical rect per window, keyed by the stringified handle.
/// Ordered so the same layout always serializes to the same bytes.
pub type PositionMap = BTreeMap<String, Rect>;

pub fn position_key(handle: WindowHandle) -> String {
    handle.to_string()
}

/// Commands sent to the native layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum OutboundCommand {
    SetWindowPositions { positions: PositionMap },
}

/// Outbound side of the native layer.
pub trait NativeBridge: Send + Sync {
    /// Move every listed window in one batch.
    fn set_positions(&self, positions: &PositionMap) -> Result<()>;
}

impl<B: NativeBridge + ?Sized> NativeBridge for std::sync::Arc<B> {
    fn set_positions(&self, positions: &PositionMap) -> Result<()> {
        (**self).set_positions(positions)
    }
}
