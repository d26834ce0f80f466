//! Placeholder boxes for pending placements.

use tessel_common::BoxRect;
use tessel_config::FloatingConfig;

use crate::tree::Reservation;

use super::LayoutBox;

/// Render the placeholder for `reservation` inside `slot`.
///
/// Only floating reservations have a size of their own: the configured
/// floating size, centred in the slot and clamped to it. Every other kind
/// fills the slot the layout gave it.
pub fn render_reservation(
    reservation: Reservation,
    floating: &FloatingConfig,
    slot: BoxRect,
) -> LayoutBox {
    let bounds = match reservation {
        Reservation::Float => centered(slot, floating.width, floating.height),
        Reservation::Left
        | Reservation::Right
        | Reservation::Top
        | Reservation::Bottom
        | Reservation::Stack => slot,
    };
    LayoutBox::untagged(reservation.class_name(), bounds)
}

fn centered(slot: BoxRect, width: f64, height: f64) -> BoxRect {
    let w = width.min(slot.width()).max(0.0);
    let h = height.min(slot.height()).max(0.0);
    BoxRect::new(
        slot.left + (slot.width() - w) / 2.0,
        slot.top + (slot.height() - h) / 2.0,
        w,
        h,
    )
}
