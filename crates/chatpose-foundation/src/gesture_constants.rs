//! Shared gesture constants for the conversation list.
//!
//! All distances are logical pixels, already density-scaled by the host.
//! They seed the `Default` impls in [`crate::config`]; hosts that need other
//! values override them there rather than here.

/// Cumulative pointer travel before a press is classified as a swipe or a
/// scroll. Below this the scrollable container keeps first claim on the
/// gesture. Same magnitude as the platform touch slop.
pub const SWIPE_DETECTION_DISTANCE: f32 = 8.0;

/// Horizontal travel must exceed vertical travel by this factor to count as a
/// swipe. Greater than one so ambiguous diagonals fall through to scrolling.
pub const SWIPE_DIRECTION_RATIO: f32 = 1.5;

/// Reply drag distance that arms the reply commit.
pub const REPLY_THRESHOLD: f32 = 60.0;

/// Reply drag is clamped to `REPLY_THRESHOLD * REPLY_MAX_RATIO`.
pub const REPLY_MAX_RATIO: f32 = 1.2;

/// Drag distance that fully reveals the date label.
pub const DATE_REVEAL_MAX_DRAG: f32 = 120.0;

/// Narrowest date label the reveal must make room for.
pub const DATE_LABEL_MIN_WIDTH: f32 = 64.0;

/// Gap kept between a revealed date label and the bubble.
pub const DATE_LABEL_MARGIN: f32 = 8.0;

/// Stationary press duration that activates the contextual overlay.
pub const LONG_PRESS_TIMEOUT_MILLIS: u64 = 500;

/// Gap kept between an overlay and every edge of the safe viewport.
pub const OVERLAY_SCREEN_MARGIN: f32 = 16.0;

/// Gap between an overlay and the message it is anchored to.
pub const OVERLAY_ANCHOR_SPACING: f32 = 12.0;
