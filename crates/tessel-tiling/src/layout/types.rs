//! Layout engine configuration and the boxes it produces.

use tessel_common::{BoxRect, WindowHandle};
use tessel_config::{FloatingConfig, TesselConfig};

use crate::tree::Reservation;

/// Class of a box holding a window.
pub const LEAF_CLASS: &str = "wm-leaf";
/// Class of the tab bar drawn above a stack.
pub const STACK_BAR_CLASS: &str = "wm-stack-bar";

/// Main axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Configuration for the solver that turns a tree into boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    /// Gap in pixels between sibling boxes.
    pub gap: f64,
    /// Inset in pixels around the whole work area.
    pub padding: f64,
    /// Height of a stack's tab bar; 0 renders none.
    pub stack_bar_height: f64,
    /// Placeholder size for floating reservations.
    pub floating: FloatingConfig,
}

impl LayoutEngine {
    pub fn from_config(config: &TesselConfig) -> Self {
        Self {
            gap: config.layout.gap,
            padding: config.layout.padding,
            stack_bar_height: config.layout.stack_bar_height,
            floating: config.floating,
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::from_config(&TesselConfig::default())
    }
}

/// A reservation pinned to the slot of the window it was requested on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedReservation {
    pub anchor: WindowHandle,
    pub reservation: Reservation,
}

/// One rendered box. Boxes tagged with a handle are the ones whose
/// geometry gets pushed to the native layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox {
    pub class: String,
    pub handle: Option<WindowHandle>,
    pub bounds: BoxRect,
}

impl LayoutBox {
    pub fn window(handle: WindowHandle, bounds: BoxRect) -> Self {
        Self {
            class: LEAF_CLASS.to_string(),
            handle: Some(handle),
            bounds,
        }
    }

    pub fn untagged(class: impl Into<String>, bounds: BoxRect) -> Self {
        Self {
            class: class.into(),
            handle: None,
            bounds,
        }
    }
}

/// Output of one layout pass, in document (depth-first) order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedLayout {
    pub(crate) boxes: Vec<LayoutBox>,
}

impl RenderedLayout {
    pub fn boxes(&self) -> &[LayoutBox] {
        &self.boxes
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Boxes carrying a window handle.
    pub fn tagged(&self) -> impl Iterator<Item = (WindowHandle, BoxRect)> + '_ {
        self.boxes
            .iter()
            .filter_map(|b| b.handle.map(|handle| (handle, b.bounds)))
    }

    /// First box with the given class.
    pub fn find_class(&self, class: &str) -> Option<&LayoutBox> {
        self.boxes.iter().find(|b| b.class == class)
    }
}
