//! A phone-sized conversation with one row of each kind.

use chatpose_foundation::{MessageInfo, RowSlot};
use chatpose_ui::{ConversationSurface, InteractionConfig, SafeZone};
use chatpose_ui_graphics::{EdgeInsets, Rect, Size};

pub const PHONE_VIEWPORT: Size = Size::new(1080.0, 2340.0);

/// Status bar above, gesture bar below.
pub const PHONE_SYSTEM_INSETS: EdgeInsets = EdgeInsets::from_components(0.0, 40.0, 0.0, 24.0);
pub const INPUT_BAR_HEIGHT: f32 = 56.0;

pub const INCOMING_SLOT: RowSlot = RowSlot(0);
pub const OUTGOING_SLOT: RowSlot = RowSlot(1);
/// Incoming message that does not allow replies.
pub const LOCKED_SLOT: RowSlot = RowSlot(2);

pub const INCOMING_ROW: Rect = Rect::new(0.0, 1200.0, 1080.0, 120.0);
pub const OUTGOING_ROW: Rect = Rect::new(0.0, 1400.0, 1080.0, 120.0);
pub const LOCKED_ROW: Rect = Rect::new(0.0, 1600.0, 1080.0, 120.0);

pub const INCOMING_BUBBLE: Rect = Rect::new(0.0, 1200.0, 600.0, 120.0);
pub const OUTGOING_BUBBLE: Rect = Rect::new(580.0, 1400.0, 500.0, 120.0);
pub const LOCKED_BUBBLE: Rect = Rect::new(0.0, 1600.0, 400.0, 120.0);

pub fn phone_safe_zone() -> SafeZone {
    SafeZone::resolve(PHONE_SYSTEM_INSETS, 0.0, INPUT_BAR_HEIGHT)
}

pub fn phone_safe_zone_with_keyboard(keyboard_height: f32) -> SafeZone {
    SafeZone::resolve(PHONE_SYSTEM_INSETS, keyboard_height, INPUT_BAR_HEIGHT)
}

/// Surface for `config` with the three fixture rows bound.
pub fn surface_with(config: InteractionConfig) -> ConversationSurface {
    let mut surface = ConversationSurface::new(config, PHONE_VIEWPORT)
        .unwrap_or_else(|err| panic!("fixture config rejected: {err}"));
    surface.on_safe_zone_changed(phone_safe_zone());
    surface.bind_row(
        INCOMING_SLOT,
        MessageInfo::incoming(1),
        INCOMING_ROW,
        INCOMING_BUBBLE.width,
    );
    surface.bind_row(
        OUTGOING_SLOT,
        MessageInfo::outgoing(2),
        OUTGOING_ROW,
        OUTGOING_BUBBLE.width,
    );
    surface.bind_row(
        LOCKED_SLOT,
        MessageInfo::incoming(3).with_reply_allowed(false),
        LOCKED_ROW,
        LOCKED_BUBBLE.width,
    );
    surface
}

pub fn standard_surface() -> ConversationSurface {
    surface_with(InteractionConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubbles_match_bound_rows() {
        let surface = standard_surface();
        for (slot, bubble) in [
            (INCOMING_SLOT, INCOMING_BUBBLE),
            (OUTGOING_SLOT, OUTGOING_BUBBLE),
            (LOCKED_SLOT, LOCKED_BUBBLE),
        ] {
            assert_eq!(surface.row(slot).map(|row| row.bubble_bounds()), Some(bubble));
        }
    }

    #[test]
    fn safe_zone_reserves_the_input_bar() {
        assert_eq!(phone_safe_zone().bottom(), INPUT_BAR_HEIGHT);
        assert_eq!(phone_safe_zone_with_keyboard(800.0).bottom(), 800.0);
    }
}
