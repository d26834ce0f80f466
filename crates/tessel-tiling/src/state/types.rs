//! Core types and constructors for WmState.

use tessel_common::{AppEntry, FocusedApp, HostMetrics};
use tessel_config::TesselConfig;

use crate::events::NativeSnapshot;
use crate::layout::LayoutEngine;
use crate::sync::PositionSync;
use crate::tree::{Reservation, WmNode};

/// Why a layout pass is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetileReason {
    LayoutChanged,
    /// Carries the counter value after the bump.
    ForcedRetiling(u64),
    HostChanged,
    ReservationChanged,
    /// Focus moved while a reservation is showing, so the placeholder moves
    /// with it.
    ReservationFollowedFocus,
    SettingsChanged,
}

/// Everything the sync core knows, owned by the shell's window-manager
/// view for its lifetime.
///
/// Every inbound event overwrites one field wholesale; derived values
/// (layout boxes, overlay visibility, positions) are recomputed from
/// scratch each time they are asked for.
pub struct WmState {
    pub(super) layout: Option<WmNode>,
    pub(super) focused_app: FocusedApp,
    pub(super) open_apps: Vec<AppEntry>,
    pub(super) host: HostMetrics,
    pub(super) reservation: Option<Reservation>,
    /// Bumped by every forced-retiling event, never decreases.
    pub(super) forced_retiling: u64,
    pub(super) engine: LayoutEngine,
    pub(super) sync: PositionSync,
}

impl WmState {
    /// Build the state from the native layer's startup snapshot.
    pub fn new(snapshot: NativeSnapshot, config: &TesselConfig) -> Self {
        Self {
            layout: snapshot.layout,
            focused_app: snapshot.focused_app,
            open_apps: snapshot.open_apps,
            host: snapshot.host,
            reservation: None,
            forced_retiling: 0,
            engine: LayoutEngine::from_config(config),
            sync: PositionSync::from_config(config),
        }
    }

    // -- Accessors --

    pub fn layout(&self) -> Option<&WmNode> {
        self.layout.as_ref()
    }

    pub fn focused_app(&self) -> &FocusedApp {
        &self.focused_app
    }

    pub fn open_apps(&self) -> &[AppEntry] {
        &self.open_apps
    }

    pub fn host(&self) -> &HostMetrics {
        &self.host
    }

    pub fn reservation(&self) -> Option<Reservation> {
        self.reservation
    }

    pub fn forced_retiling(&self) -> u64 {
        self.forced_retiling
    }
}
