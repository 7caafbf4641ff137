use chatpose_ui_graphics::{EdgeInsets, Rect, Size};

/// Viewport insets an overlay must keep clear of.
///
/// The bottom inset is whichever is tallest of the system chrome, the
/// on-screen keyboard and the fixed input bar; they overlap rather than
/// stack.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SafeZone {
    insets: EdgeInsets,
}

impl SafeZone {
    pub const NONE: SafeZone = SafeZone {
        insets: EdgeInsets::ZERO,
    };

    pub fn from_insets(insets: EdgeInsets) -> Self {
        Self {
            insets: non_negative(insets),
        }
    }

    pub fn resolve(system_insets: EdgeInsets, keyboard_height: f32, input_bar_height: f32) -> Self {
        let bottom = system_insets
            .bottom
            .max(keyboard_height)
            .max(input_bar_height);
        Self::from_insets(EdgeInsets {
            bottom,
            ..system_insets
        })
    }

    pub fn insets(&self) -> EdgeInsets {
        self.insets
    }

    pub fn top(&self) -> f32 {
        self.insets.top
    }

    pub fn bottom(&self) -> f32 {
        self.insets.bottom
    }

    /// Viewport minus these insets and `margin` on every edge.
    pub fn usable_bounds(&self, viewport: Size, margin: f32) -> Rect {
        Rect::from_size(viewport).deflate(self.insets + EdgeInsets::uniform(margin.max(0.0)))
    }
}

fn non_negative(insets: EdgeInsets) -> EdgeInsets {
    EdgeInsets::from_components(
        insets.left.max(0.0),
        insets.top.max(0.0),
        insets.right.max(0.0),
        insets.bottom.max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_replaces_system_bottom_when_taller() {
        let system = EdgeInsets::from_components(0.0, 40.0, 0.0, 24.0);
        let zone = SafeZone::resolve(system, 300.0, 56.0);
        assert_eq!(zone.bottom(), 300.0);
        assert_eq!(zone.top(), 40.0);
    }

    #[test]
    fn input_bar_counts_when_keyboard_is_closed() {
        let system = EdgeInsets::from_components(0.0, 40.0, 0.0, 24.0);
        assert_eq!(SafeZone::resolve(system, 0.0, 56.0).bottom(), 56.0);
    }

    #[test]
    fn usable_bounds_include_margin_on_every_edge() {
        let zone = SafeZone::from_insets(EdgeInsets::from_components(0.0, 40.0, 0.0, 100.0));
        let usable = zone.usable_bounds(Size::new(1080.0, 2000.0), 16.0);
        assert_eq!(usable, Rect::from_ltrb(16.0, 56.0, 1064.0, 1884.0));
    }

    #[test]
    fn negative_insets_are_ignored() {
        let zone = SafeZone::from_insets(EdgeInsets::uniform(-5.0));
        assert_eq!(zone.insets(), EdgeInsets::ZERO);
    }
}
