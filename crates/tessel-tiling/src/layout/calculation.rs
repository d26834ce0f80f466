//! Layout calculation: recursive tree-to-box computation.
//!
//! Containers behave like flex rows and columns: their non-empty children
//! share the main axis equally after the gaps between them are taken out.
//! Empty subtrees are not rendered and take no space.

use tessel_common::{BoxRect, WindowHandle};
use tracing::debug;

use crate::tree::{Reservation, WmNode};

use super::reserved::render_reservation;
use super::{
    Direction, LayoutBox, LayoutEngine, PlacedReservation, RenderedLayout, LEAF_CLASS,
    STACK_BAR_CLASS,
};

impl LayoutEngine {
    /// Lay out `root` inside `viewport`, optionally showing a reservation
    /// next to the window it is anchored on.
    pub fn render(
        &self,
        root: Option<&WmNode>,
        viewport: BoxRect,
        reservation: Option<PlacedReservation>,
    ) -> RenderedLayout {
        let mut layout = RenderedLayout::default();
        let Some(root) = root else {
            return layout;
        };

        let area = viewport.inset(self.padding);
        if !root.is_empty() {
            self.layout_node(root, area, reservation, &mut layout.boxes);
        }

        if let Some(placed) = reservation {
            if layout.find_class(&placed.reservation.class_name()).is_none() {
                debug!(
                    anchor = %placed.anchor,
                    in_layout = root.contains(placed.anchor),
                    "reservation anchor has no visible slot, placeholder not shown"
                );
            }
        }
        layout
    }

    fn layout_node(
        &self,
        node: &WmNode,
        bounds: BoxRect,
        reservation: Option<PlacedReservation>,
        out: &mut Vec<LayoutBox>,
    ) {
        match node {
            WmNode::Leaf { active } => {
                if let Some(handle) = active {
                    self.place_window(*handle, bounds, reservation, out);
                }
            }
            WmNode::Stack { windows, active } => {
                if windows.is_empty() {
                    return;
                }
                let mut body = bounds;
                if self.stack_bar_height > 0.0 {
                    let bar = self.stack_bar_height.min(bounds.height());
                    out.push(LayoutBox::untagged(
                        STACK_BAR_CLASS,
                        BoxRect {
                            bottom: bounds.top + bar,
                            ..bounds
                        },
                    ));
                    body.top += bar;
                }
                match active {
                    Some(handle) => {
                        // Any member of the stack anchors on the stack's slot.
                        let reservation = reservation.map(|placed| {
                            if windows.contains(&placed.anchor) {
                                PlacedReservation {
                                    anchor: *handle,
                                    ..placed
                                }
                            } else {
                                placed
                            }
                        });
                        self.place_window(*handle, body, reservation, out)
                    }
                    None => out.push(LayoutBox::untagged(LEAF_CLASS, body)),
                }
            }
            WmNode::Horizontal { children } => {
                self.layout_children(children, Direction::Horizontal, bounds, reservation, out)
            }
            WmNode::Vertical { children } => {
                self.layout_children(children, Direction::Vertical, bounds, reservation, out)
            }
        }
    }

    fn layout_children(
        &self,
        children: &[WmNode],
        direction: Direction,
        bounds: BoxRect,
        reservation: Option<PlacedReservation>,
        out: &mut Vec<LayoutBox>,
    ) {
        let visible: Vec<&WmNode> = children.iter().filter(|c| !c.is_empty()).collect();
        let slots = split_even(bounds, direction, visible.len(), self.gap);
        for (child, slot) in visible.into_iter().zip(slots) {
            self.layout_node(child, slot, reservation, out);
        }
    }

    /// Emit the box for one window, splitting its slot when a reservation
    /// is anchored on it.
    fn place_window(
        &self,
        handle: WindowHandle,
        slot: BoxRect,
        reservation: Option<PlacedReservation>,
        out: &mut Vec<LayoutBox>,
    ) {
        let Some(placed) = reservation.filter(|r| r.anchor == handle) else {
            out.push(LayoutBox::window(handle, slot));
            return;
        };

        let kind = placed.reservation;
        match kind {
            Reservation::Left | Reservation::Top => {
                let (reserved, window) = self.halves(slot, kind);
                out.push(render_reservation(kind, &self.floating, reserved));
                out.push(LayoutBox::window(handle, window));
            }
            Reservation::Right | Reservation::Bottom => {
                let (window, reserved) = self.halves(slot, kind);
                out.push(LayoutBox::window(handle, window));
                out.push(render_reservation(kind, &self.floating, reserved));
            }
            Reservation::Stack | Reservation::Float => {
                out.push(LayoutBox::window(handle, slot));
                out.push(render_reservation(kind, &self.floating, slot));
            }
        }
    }

    fn halves(&self, slot: BoxRect, kind: Reservation) -> (BoxRect, BoxRect) {
        let direction = match kind {
            Reservation::Top | Reservation::Bottom => Direction::Vertical,
            _ => Direction::Horizontal,
        };
        let parts = split_even(slot, direction, 2, self.gap);
        (parts[0], parts[1])
    }
}

/// Divide `bounds` into `count` equal slots along `direction`, with `gap`
/// between neighbours. Space never goes negative.
pub(crate) fn split_even(
    bounds: BoxRect,
    direction: Direction,
    count: usize,
    gap: f64,
) -> Vec<BoxRect> {
    if count == 0 {
        return Vec::new();
    }
    let gaps = gap * (count - 1) as f64;
    let main = match direction {
        Direction::Horizontal => bounds.width(),
        Direction::Vertical => bounds.height(),
    };
    let each = ((main - gaps).max(0.0)) / count as f64;

    (0..count)
        .map(|i| {
            let start = i as f64 * (each + gap);
            match direction {
                Direction::Horizontal => BoxRect {
                    left: bounds.left + start,
                    right: bounds.left + start + each,
                    ..bounds
                },
                Direction::Vertical => BoxRect {
                    top: bounds.top + start,
                    bottom: bounds.top + start + each,
                    ..bounds
                },
            }
        })
        .collect()
}
