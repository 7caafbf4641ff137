use chatpose_ui_graphics::Size;

const PANEL_MIN_WIDTH: f32 = 240.0;
const PANEL_PADDING: f32 = 8.0;
const REACTION_SLOT_WIDTH: f32 = 44.0;
const REACTION_ROW_HEIGHT: f32 = 56.0;
const ACTION_ROW_HEIGHT: f32 = 48.0;
const SECTION_GAP: f32 = 8.0;

/// Overlay size used for placement: a conservative estimate until the host
/// has measured the real panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlaySizeEstimate {
    Estimated(Size),
    Measured(Size),
}

impl OverlaySizeEstimate {
    /// First-pass estimate for a panel with one reaction row and one row per
    /// action. Errs towards larger so the first placement rarely has to flip
    /// sides once measured.
    pub fn estimate(reaction_count: usize, action_count: usize) -> Self {
        let reactions_width = reaction_count as f32 * REACTION_SLOT_WIDTH + 2.0 * PANEL_PADDING;
        let mut height = 2.0 * PANEL_PADDING + action_count as f32 * ACTION_ROW_HEIGHT;
        if reaction_count > 0 {
            height += REACTION_ROW_HEIGHT;
            if action_count > 0 {
                height += SECTION_GAP;
            }
        }
        OverlaySizeEstimate::Estimated(Size::new(reactions_width.max(PANEL_MIN_WIDTH), height))
    }

    pub fn measured(size: Size) -> Self {
        OverlaySizeEstimate::Measured(size)
    }

    pub fn size(&self) -> Size {
        match self {
            OverlaySizeEstimate::Estimated(size) | OverlaySizeEstimate::Measured(size) => *size,
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, OverlaySizeEstimate::Measured(_))
    }
}
