//! Deriving layout, overlay visibility and positions from WmState.

use std::collections::HashSet;

use tessel_common::WindowHandle;
use tracing::debug;

use crate::layout::{PlacedReservation, RenderedLayout};
use crate::overlay::overlay_visible;
use crate::platform::{NativeBridge, PositionMap};

use super::WmState;

impl WmState {
    pub fn overlay_visible(&self) -> bool {
        overlay_visible(&self.focused_app, self.layout.as_ref())
    }

    /// Lay the current tree out over the shell's client area. A reservation
    /// is drawn on the focused window's slot.
    pub fn render(&self) -> RenderedLayout {
        let placed = self.reservation.map(|reservation| PlacedReservation {
            anchor: self.focused_app.hwnd,
            reservation,
        });
        self.engine
            .render(self.layout.as_ref(), self.host.viewport(), placed)
    }

    /// Render, measure and send one batch of window positions.
    pub fn sync(&self, bridge: &dyn NativeBridge) -> PositionMap {
        let dangling = self.dangling_handles();
        if !dangling.is_empty() {
            debug!(?dangling, "layout references windows no open app reports");
        }
        let layout = self.render();
        self.sync
            .request_positioning_of_leaves(&layout, &self.host, bridge)
    }

    /// Handles in the tree that no open app owns. Informational only; the
    /// native side simply has nothing to move for them.
    pub fn dangling_handles(&self) -> Vec<WindowHandle> {
        let Some(layout) = &self.layout else {
            return Vec::new();
        };
        let known: HashSet<WindowHandle> = self
            .open_apps
            .iter()
            .flat_map(|app| app.windows.iter().map(|w| w.handle))
            .collect();
        layout
            .handles()
            .into_iter()
            .filter(|h| !known.contains(h))
            .collect()
    }
}
