//! Rectangles in the two coordinate spaces the sync core moves between.

use serde::{Deserialize, Serialize};

/// Absolute screen rectangle in physical pixels.
///
/// Callers keep `left <= right` and `top <= bottom`; nothing here checks it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A rendered box in device-independent pixels, relative to the shell
/// window's client area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxRect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoxRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Shrink every edge towards the centre by `amount`. A negative amount
    /// grows the box.
    pub fn inset(&self, amount: f64) -> Self {
        Self {
            top: self.top + amount,
            left: self.left + amount,
            right: self.right - amount,
            bottom: self.bottom - amount,
        }
    }

    /// Convert to physical pixels and translate into global screen space.
    pub fn to_physical(&self, host: &HostMetrics) -> Rect {
        let scale = |v: f64| round_half_up(v * host.scale_factor);
        Rect {
            top: scale(self.top) + host.y,
            left: scale(self.left) + host.x,
            right: scale(self.right) + host.x,
            bottom: scale(self.bottom) + host.y,
        }
    }
}

/// Halves round towards positive infinity, matching the renderer the
/// layouts were originally measured in.
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Where the shell window sits on screen and how dense its pixels are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostMetrics {
    /// Physical x of the shell window's client origin.
    pub x: i32,
    /// Physical y of the shell window's client origin.
    pub y: i32,
    /// Device pixel ratio (physical pixels per device-independent pixel).
    pub scale_factor: f64,
    /// Client width in device-independent pixels.
    pub width: f64,
    /// Client height in device-independent pixels.
    pub height: f64,
}

impl HostMetrics {
    /// The client area as a box at the local origin.
    pub fn viewport(&self) -> BoxRect {
        BoxRect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for HostMetrics {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            scale_factor: 1.0,
            width: 0.0,
            height: 0.0,
        }
    }
}
