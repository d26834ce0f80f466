//! Window identity and the per-app state pushed by the native layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque OS window identifier. Never created or destroyed here, only
/// stored and forwarded.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WindowHandle(pub isize);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The application that currently owns keyboard focus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FocusedApp {
    pub hwnd: WindowHandle,
    pub is_maximized: bool,
    pub is_fullscreened: bool,
    /// The focused window is one of the shell's own overlays.
    pub is_seelen_overlay: bool,
    pub class: String,
    pub exe: String,
}

/// One window belonging to an open app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppWindow {
    pub handle: WindowHandle,
    #[serde(default)]
    pub title: String,
}

/// An open app (dock item) and the windows it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    pub path: String,
    #[serde(default)]
    pub umid: Option<String>,
    #[serde(default)]
    pub windows: Vec<AppWindow>,
}
