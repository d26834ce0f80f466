pub mod errors;
pub mod types;

pub use errors::{ConfigError, PlatformError, ProtocolError, TesselError};
pub use types::{AppEntry, AppWindow, BoxRect, FocusedApp, HostMetrics, Rect, WindowHandle};
