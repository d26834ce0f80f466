//! Messages pushed by the native window-manager process.

use serde::{Deserialize, Serialize};
use tessel_common::errors::ProtocolError;
use tessel_common::{AppEntry, FocusedApp, HostMetrics};

use crate::tree::{Reservation, WmNode};

/// An inbound event. Every payload replaces the previous value wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum NativeEvent {
    /// A new layout tree, or none when the monitor has nothing tiled.
    LayoutChanged(Option<WmNode>),
    FocusChanged(FocusedApp),
    /// Geometry must be recomputed although the tree did not change,
    /// e.g. after a monitor reconfiguration.
    ForceRetiling,
    OpenAppsChanged(Vec<AppEntry>),
    /// The shell window moved, resized or changed pixel density.
    HostChanged(HostMetrics),
    ReservationChanged(Option<Reservation>),
}

impl NativeEvent {
    pub fn from_json_line(line: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(line).map_err(|e| ProtocolError::MalformedEvent(e.to_string()))
    }
}

/// State answered by the native layer's one-shot startup queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NativeSnapshot {
    pub layout: Option<WmNode>,
    pub focused_app: FocusedApp,
    pub open_apps: Vec<AppEntry>,
    pub host: HostMetrics,
}

impl NativeSnapshot {
    pub fn from_json_line(line: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(line).map_err(|e| ProtocolError::MissingSnapshot(e.to_string()))
    }
}
