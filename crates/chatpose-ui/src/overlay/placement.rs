//! Anchored overlay placement.
//!
//! Given the anchor rectangle of the activated message, the safe zone and the
//! overlay size, the placer picks a side (above is preferred, then below) and
//! clamps the result into the usable bounds. The placer is a pure function of
//! its inputs; it is re-run whenever one of them changes and never
//! interpolates between inputs.

use chatpose_foundation::gesture_constants::{OVERLAY_ANCHOR_SPACING, OVERLAY_SCREEN_MARGIN};
use chatpose_foundation::{ensure_non_negative, ConfigError, MessageAlignment};
use chatpose_ui_graphics::{coerce_in, Rect, Size};

use super::SafeZone;

/// Edge of the anchor the overlay lines up with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlignEdge {
    /// Overlay left edge on the anchor's left edge.
    Start,
    /// Overlay right edge on the anchor's right edge.
    End,
}

impl AlignEdge {
    pub fn for_alignment(alignment: MessageAlignment) -> Self {
        match alignment {
            MessageAlignment::Incoming => AlignEdge::Start,
            MessageAlignment::Outgoing => AlignEdge::End,
        }
    }
}

/// What to do when neither side of the anchor has room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FallbackPolicy {
    /// Pin to the usable top edge and open downwards.
    #[default]
    PinToTop,
    /// Center in the usable band; open towards whichever half of the
    /// viewport holds the anchor's center.
    CenterInBand,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementConfig {
    /// Extra gap kept from every edge of the safe zone.
    pub margin: f32,
    /// Gap between anchor and overlay.
    pub spacing: f32,
    pub fallback: FallbackPolicy,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: OVERLAY_SCREEN_MARGIN,
            spacing: OVERLAY_ANCHOR_SPACING,
            fallback: FallbackPolicy::default(),
        }
    }
}

impl PlacementConfig {
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("placement.margin", self.margin)?;
        ensure_non_negative("placement.spacing", self.spacing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementResult {
    pub x: f32,
    pub y: f32,
    /// Hosts use this to choose the panel's internal layout.
    pub opens_above: bool,
}

impl PlacementResult {
    pub fn rect(&self, overlay_size: Size) -> Rect {
        Rect::new(self.x, self.y, overlay_size.width, overlay_size.height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchoredOverlayPlacer {
    config: PlacementConfig,
}

impl AnchoredOverlayPlacer {
    pub fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    pub fn place(
        &self,
        anchor: Rect,
        safe_zone: &SafeZone,
        overlay_size: Size,
        align_edge: AlignEdge,
        viewport: Size,
    ) -> PlacementResult {
        let usable = safe_zone.usable_bounds(viewport, self.config.margin);
        let spacing = self.config.spacing;
        let height = overlay_size.height;
        let width = overlay_size.width;

        if usable.width < width || usable.height < height {
            log::warn!(
                "overlay {}x{} does not fit usable bounds {}x{}; placing best effort",
                width,
                height,
                usable.width,
                usable.height
            );
        }

        let space_above = anchor.top() - usable.top() - spacing;
        let space_below = usable.bottom() - anchor.bottom() - spacing;

        let (y, opens_above) = if space_above >= height {
            (anchor.top() - spacing - height, true)
        } else if space_below >= height {
            (anchor.bottom() + spacing, false)
        } else {
            match self.config.fallback {
                FallbackPolicy::PinToTop => (usable.top(), false),
                FallbackPolicy::CenterInBand => (
                    usable.top() + (usable.height - height) / 2.0,
                    anchor.center().y > viewport.height / 2.0,
                ),
            }
        };

        let x = match align_edge {
            AlignEdge::Start => anchor.left(),
            AlignEdge::End => anchor.right() - width,
        };

        PlacementResult {
            x: coerce_in(x, usable.left(), usable.right() - width),
            y: coerce_in(y, usable.top(), usable.bottom() - height),
            opens_above,
        }
    }
}
