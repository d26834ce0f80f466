//! Tiling-layout synchronization core.
//!
//! The native window manager pushes a layout tree; [`LayoutEngine`] turns
//! it into boxes, [`PositionSync`] measures those boxes and reports the
//! physical rect of every window back through a [`NativeBridge`] in one
//! batch. [`WmState`] ties the pieces to the inbound event stream.

pub mod events;
pub mod layout;
pub mod overlay;
pub mod platform;
pub mod state;
pub mod sync;
pub mod tree;

pub use events::{NativeEvent, NativeSnapshot};
pub use layout::{LayoutEngine, RenderedLayout};
pub use overlay::overlay_visible;
pub use platform::{NativeBridge, PositionMap};
pub use state::{RetileReason, WmState};
pub use sync::{BoxSource, PositionSync};
pub use tree::{Reservation, WmNode};
