//! Overlay layer and conversation surface for Chatpose.
//!
//! [`AnchoredOverlayPlacer`] decides where the contextual panel goes,
//! [`OverlayPresentationController`] sequences its entrance and exit, and
//! [`ConversationSurface`] ties both to the per-row swipe state from
//! `chatpose-foundation`.

mod config;
pub mod overlay;
mod surface;

pub use config::InteractionConfig;
pub use overlay::{
    AlignEdge, AnchoredOverlayPlacer, DismissReason, FallbackPolicy, OverlayAction,
    OverlayActivation, OverlayEnvironment, OverlayFrame, OverlayPresentationController,
    OverlaySizeEstimate, PanelActions, PlacementConfig, PlacementResult, PresentationConfig,
    PresentationEvent, PresentationEvents, PresentationPhase, SafeZone,
};
pub use surface::{ConversationSurface, SurfaceEffect, SurfaceEffects};

pub mod prelude {
    pub use crate::config::InteractionConfig;
    pub use crate::overlay::*;
    pub use crate::surface::{ConversationSurface, SurfaceEffect, SurfaceEffects};
    pub use chatpose_foundation::prelude::*;
    pub use chatpose_ui_graphics::prelude::*;
}
