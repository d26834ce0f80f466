//! Turning rendered boxes into native window positions.
//!
//! Measures every box tagged with a window handle, strips the decorative
//! border, converts to physical pixels in global screen space and hands
//! the whole mapping to the native layer in a single batch.

use tessel_common::{BoxRect, HostMetrics, WindowHandle};
use tessel_config::{BorderConfig, TesselConfig};
use tracing::{debug, warn};

use crate::layout::RenderedLayout;
use crate::platform::{position_key, NativeBridge, PositionMap};

/// Anything that can report the measured box of each window it shows.
pub trait BoxSource {
    fn tagged_boxes(&self) -> Vec<(WindowHandle, BoxRect)>;
}

impl BoxSource for RenderedLayout {
    fn tagged_boxes(&self) -> Vec<(WindowHandle, BoxRect)> {
        self.tagged().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionSync {
    border: BorderConfig,
}

impl PositionSync {
    pub fn new(border: BorderConfig) -> Self {
        Self { border }
    }

    pub fn from_config(config: &TesselConfig) -> Self {
        Self::new(config.border)
    }

    /// Absolute physical rect for every tagged box. Boxes that have not
    /// been laid out yet are reported as measured, zero size included.
    pub fn measure(&self, source: &impl BoxSource, host: &HostMetrics) -> PositionMap {
        let inset = self.border.correction();
        source
            .tagged_boxes()
            .into_iter()
            .map(|(handle, measured)| {
                let rect = measured.inset(inset).to_physical(host);
                (position_key(handle), rect)
            })
            .collect()
    }

    /// Measure and send one batched `set_positions` command.
    ///
    /// A failed send is logged and otherwise ignored; the next trigger
    /// computes everything afresh.
    pub fn request_positioning_of_leaves(
        &self,
        source: &impl BoxSource,
        host: &HostMetrics,
        bridge: &dyn NativeBridge,
    ) -> PositionMap {
        let positions = self.measure(source, host);
        debug!(count = positions.len(), "requesting window positions");
        if let Err(e) = bridge.set_positions(&positions) {
            warn!("failed to set window positions: {e}");
        }
        positions
    }
}
