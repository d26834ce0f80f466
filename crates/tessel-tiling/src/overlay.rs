//! Whether the interactive control layer (resize handles and friends)
//! should be shown.

use tessel_common::FocusedApp;

use crate::tree::WmNode;

/// Shown over the shell's own overlays, and over a focused window that the
/// tiling tree manages unless it is maximized or fullscreen.
pub fn overlay_visible(focused: &FocusedApp, layout: Option<&WmNode>) -> bool {
    if focused.is_seelen_overlay {
        return true;
    }
    match layout {
        Some(tree) => {
            tree.contains(focused.hwnd) && !focused.is_maximized && !focused.is_fullscreened
        }
        None => false,
    }
}
