//! Applying inbound events to WmState.

use tessel_config::TesselConfig;
use tracing::{debug, info};

use crate::events::NativeEvent;
use crate::layout::LayoutEngine;
use crate::sync::PositionSync;

use super::{RetileReason, WmState};

impl WmState {
    /// Replace the value carried by `event` and report whether positions
    /// must be recomputed. Nothing here is debounced.
    pub fn apply(&mut self, event: NativeEvent) -> Option<RetileReason> {
        match event {
            NativeEvent::LayoutChanged(layout) => {
                debug!(
                    slots = layout.as_ref().map_or(0, |l| l.occupied_slots()),
                    "layout replaced"
                );
                self.layout = layout;
                Some(RetileReason::LayoutChanged)
            }
            NativeEvent::FocusChanged(app) => {
                let was_visible = self.overlay_visible();
                let focus_moved = app.hwnd != self.focused_app.hwnd;
                self.focused_app = app;

                let visible = self.overlay_visible();
                if visible != was_visible {
                    debug!(visible, "overlay visibility changed");
                }

                (focus_moved && self.reservation.is_some())
                    .then_some(RetileReason::ReservationFollowedFocus)
            }
            NativeEvent::ForceRetiling => {
                self.forced_retiling += 1;
                Some(RetileReason::ForcedRetiling(self.forced_retiling))
            }
            NativeEvent::OpenAppsChanged(apps) => {
                self.open_apps = apps;
                None
            }
            NativeEvent::HostChanged(host) => {
                self.host = host;
                Some(RetileReason::HostChanged)
            }
            NativeEvent::ReservationChanged(reservation) => {
                self.reservation = reservation;
                Some(RetileReason::ReservationChanged)
            }
        }
    }

    /// Swap in reloaded settings.
    pub fn apply_settings(&mut self, config: &TesselConfig) -> RetileReason {
        self.engine = LayoutEngine::from_config(config);
        self.sync = PositionSync::from_config(config);
        info!("settings applied to tiling layout");
        RetileReason::SettingsChanged
    }
}
