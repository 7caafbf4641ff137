//! Swipe-versus-scroll disambiguation for one press.
//!
//! A [`GestureSession`] lives from pointer-down to release or cancel. While
//! the pointer stays within the detection distance of where it went down the
//! session is undetermined and claims nothing, so the scrollable container
//! keeps first claim on the gesture. The first sample that reaches the
//! detection distance classifies the session once:
//!
//! - mostly horizontal travel (`|dx| > |dy| * direction_ratio`) becomes a
//!   swipe, and the swipe kind is picked in the same step;
//! - anything else becomes a vertical scroll and the session goes quiet.
//!
//! # Invariants
//!
//! 1. A session is classified at most once; later samples never change the
//!    verdict.
//! 2. No swipe event is produced for a session classified as a scroll.
//! 3. Every event for a swipe session carries the same [`SwipeKind`].

use chatpose_ui_graphics::Point;

use crate::config::GestureConfig;
use crate::input::PointerId;
use crate::message::MessageInfo;

/// Which swipe channel a horizontal swipe drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeKind {
    Reply,
    DateReveal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureIntent {
    Undetermined,
    HorizontalSwipe(SwipeKind),
    VerticalScroll,
}

/// Per-press state: cumulative travel since pointer-down and the verdict.
#[derive(Clone, Debug)]
pub struct GestureSession {
    pointer_id: PointerId,
    message: MessageInfo,
    down_position: Point,
    last_position: Point,
    cumulative: Point,
    intent: GestureIntent,
    sample_count: u64,
}

impl GestureSession {
    /// Opens a session for a press on the row showing `message`. Alignment and
    /// reply eligibility are captured now and hold for the whole press.
    pub fn new(pointer_id: PointerId, message: MessageInfo, down_position: Point) -> Self {
        Self {
            pointer_id,
            message,
            down_position,
            last_position: down_position,
            cumulative: Point::ZERO,
            intent: GestureIntent::Undetermined,
            sample_count: 0,
        }
    }

    pub fn pointer_id(&self) -> PointerId {
        self.pointer_id
    }

    pub fn message(&self) -> &MessageInfo {
        &self.message
    }

    pub fn down_position(&self) -> Point {
        self.down_position
    }

    pub fn cumulative(&self) -> Point {
        self.cumulative
    }

    pub fn distance(&self) -> f32 {
        self.cumulative.distance()
    }

    pub fn intent(&self) -> GestureIntent {
        self.intent
    }

    pub fn is_undetermined(&self) -> bool {
        self.intent == GestureIntent::Undetermined
    }

    pub fn swipe_kind(&self) -> Option<SwipeKind> {
        match self.intent {
            GestureIntent::HorizontalSwipe(kind) => Some(kind),
            _ => None,
        }
    }

    /// Samples for a swipe session belong to the swipe, not the scroller.
    pub fn consumes_input(&self) -> bool {
        self.swipe_kind().is_some()
    }

    /// Number of deltas applied so far.
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Converts an absolute pointer position into the delta since the
    /// previous sample.
    pub fn delta_to(&mut self, position: Point) -> Point {
        let delta = position - self.last_position;
        self.last_position = position;
        delta
    }
}

/// What the classifier tells the row after a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClassificationEvent {
    /// The session became a vertical scroll. Emitted once.
    ScrollClaimed,
    /// The session became a swipe. `delta_x` is the whole horizontal travel
    /// since pointer-down, so the channel starts where the finger is.
    SwipeStarted { kind: SwipeKind, delta_x: f32 },
    SwipeMoved { kind: SwipeKind, delta_x: f32 },
    SwipeReleased { kind: SwipeKind },
    SwipeCancelled { kind: SwipeKind },
}

impl ClassificationEvent {
    pub fn swipe_kind(&self) -> Option<SwipeKind> {
        match *self {
            ClassificationEvent::ScrollClaimed => None,
            ClassificationEvent::SwipeStarted { kind, .. }
            | ClassificationEvent::SwipeMoved { kind, .. }
            | ClassificationEvent::SwipeReleased { kind }
            | ClassificationEvent::SwipeCancelled { kind } => Some(kind),
        }
    }

    /// Whether the sample that produced this event should be marked consumed.
    pub fn consumes_input(&self) -> bool {
        self.swipe_kind().is_some()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Applies one movement delta to `session`.
    pub fn on_sample_update(
        &self,
        session: &mut GestureSession,
        delta: Point,
    ) -> Option<ClassificationEvent> {
        session.cumulative += delta;
        session.sample_count += 1;

        match session.intent {
            GestureIntent::VerticalScroll => None,
            GestureIntent::HorizontalSwipe(kind) => Some(ClassificationEvent::SwipeMoved {
                kind,
                delta_x: delta.x,
            }),
            GestureIntent::Undetermined => {
                if session.distance() < self.config.detection_distance {
                    return None;
                }
                let intent = self.classify(session.cumulative, &session.message);
                session.intent = intent;
                log::debug!(
                    "gesture on {} classified as {:?} after ({:.1}, {:.1})",
                    session.message.id,
                    intent,
                    session.cumulative.x,
                    session.cumulative.y
                );
                match intent {
                    GestureIntent::HorizontalSwipe(kind) => {
                        Some(ClassificationEvent::SwipeStarted {
                            kind,
                            delta_x: session.cumulative.x,
                        })
                    }
                    _ => Some(ClassificationEvent::ScrollClaimed),
                }
            }
        }
    }

    pub fn on_release(&self, session: &GestureSession) -> Option<ClassificationEvent> {
        session
            .swipe_kind()
            .map(|kind| ClassificationEvent::SwipeReleased { kind })
    }

    pub fn on_cancel(&self, session: &GestureSession) -> Option<ClassificationEvent> {
        session
            .swipe_kind()
            .map(|kind| ClassificationEvent::SwipeCancelled { kind })
    }

    fn classify(&self, cumulative: Point, message: &MessageInfo) -> GestureIntent {
        if cumulative.x.abs() <= cumulative.y.abs() * self.config.direction_ratio {
            return GestureIntent::VerticalScroll;
        }
        let kind = if message.reply_allowed && message.alignment.is_toward_center(cumulative.x) {
            SwipeKind::Reply
        } else {
            SwipeKind::DateReveal
        };
        GestureIntent::HorizontalSwipe(kind)
    }
}
