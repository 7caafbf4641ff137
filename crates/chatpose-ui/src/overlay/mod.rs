//! The contextual overlay shown when a message is activated: where it goes
//! and how it comes and goes.

mod action;
mod placement;
mod presentation;
mod safe_zone;
mod size;

pub use action::{DismissReason, OverlayAction, PanelActions};
pub use placement::{
    AlignEdge, AnchoredOverlayPlacer, FallbackPolicy, PlacementConfig, PlacementResult,
};
pub use presentation::{
    OverlayActivation, OverlayEnvironment, OverlayFrame, OverlayPresentationController,
    PresentationConfig, PresentationEvent, PresentationEvents, PresentationPhase,
};
pub use safe_zone::SafeZone;
pub use size::OverlaySizeEstimate;

#[cfg(test)]
#[path = "../tests/placement_tests.rs"]
mod placement_tests;
