//! Core types for the layout tree: WmNode and Reservation.

use serde::{Deserialize, Serialize};
use tessel_common::WindowHandle;

/// A node of the tiling layout as pushed by the native window manager.
///
/// The whole tree is replaced on every layout event, so nodes carry no
/// identity beyond their position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WmNode {
    /// One slot holding at most one window.
    Leaf {
        #[serde(default)]
        active: Option<WindowHandle>,
    },
    /// Several windows layered in one slot. `active`, when set, is one of
    /// `windows`.
    Stack {
        #[serde(default)]
        windows: Vec<WindowHandle>,
        #[serde(default)]
        active: Option<WindowHandle>,
    },
    /// Children laid out left to right.
    Horizontal {
        #[serde(default)]
        children: Vec<WmNode>,
    },
    /// Children laid out top to bottom.
    Vertical {
        #[serde(default)]
        children: Vec<WmNode>,
    },
}

impl WmNode {
    pub fn leaf(active: WindowHandle) -> Self {
        WmNode::Leaf {
            active: Some(active),
        }
    }

    pub fn empty_leaf() -> Self {
        WmNode::Leaf { active: None }
    }

    pub fn stack(windows: Vec<WindowHandle>, active: Option<WindowHandle>) -> Self {
        WmNode::Stack { windows, active }
    }

    pub fn horizontal(children: Vec<WmNode>) -> Self {
        WmNode::Horizontal { children }
    }

    pub fn vertical(children: Vec<WmNode>) -> Self {
        WmNode::Vertical { children }
    }
}

/// A pending placement shown as a placeholder before a window fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reservation {
    Left,
    Right,
    Top,
    Bottom,
    Stack,
    Float,
}

impl Reservation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reservation::Left => "left",
            Reservation::Right => "right",
            Reservation::Top => "top",
            Reservation::Bottom => "bottom",
            Reservation::Stack => "stack",
            Reservation::Float => "float",
        }
    }

    /// Class of the placeholder box, e.g. `reserved-left`.
    pub fn class_name(&self) -> String {
        format!("reserved-{}", self.as_str())
    }
}
