//! Swipe-to-reply channel.

use chatpose_animation::{AnimatedFloat, TrackStatus};
use chatpose_ui_graphics::coerce_in;

use super::{SwipeChannel, SwipeEffect, SwipeEffects};
use crate::config::ReplyConfig;
use crate::gestures::SwipeKind;
use crate::message::{MessageAlignment, MessageId};

/// Horizontal reply offset of one row.
///
/// The value lives in `[0, max]` for incoming messages and `[-max, 0]` for
/// outgoing ones, `max` being `threshold * max_ratio`. Crossing the threshold
/// outward arms the commit; crossing back disarms it, so one press can arm
/// and disarm any number of times. Releasing while armed commits exactly once.
#[derive(Clone, Debug)]
pub struct ReplyChannel {
    message_id: MessageId,
    alignment: MessageAlignment,
    config: ReplyConfig,
    value: AnimatedFloat,
    has_crossed_threshold: bool,
    dragging: bool,
}

impl ReplyChannel {
    pub fn new(message_id: MessageId, alignment: MessageAlignment, config: ReplyConfig) -> Self {
        Self {
            message_id,
            alignment,
            config,
            value: AnimatedFloat::new(0.0),
            has_crossed_threshold: false,
            dragging: false,
        }
    }

    /// Identity captured when the channel was bound; the one a commit reports.
    pub fn message_id(&self) -> MessageId {
        self.message_id
    }

    pub fn threshold(&self) -> f32 {
        self.config.threshold
    }

    pub fn range(&self) -> (f32, f32) {
        let max = self.config.max_drag();
        match self.alignment {
            MessageAlignment::Incoming => (0.0, max),
            MessageAlignment::Outgoing => (-max, 0.0),
        }
    }

    pub fn value(&self) -> f32 {
        let (min, max) = self.range();
        coerce_in(self.value.value(), min, max)
    }

    /// `|value| / threshold`, clamped to `[0, 1]`.
    pub fn reveal_progress(&self) -> f32 {
        (self.value().abs() / self.config.threshold).clamp(0.0, 1.0)
    }

    pub fn is_fully_exposed(&self) -> bool {
        self.value().abs() >= self.config.threshold
    }

    /// The host shows the reply affordance whenever the row is displaced.
    pub fn shows_indicator(&self) -> bool {
        self.value() != 0.0
    }

    pub fn has_crossed_threshold(&self) -> bool {
        self.has_crossed_threshold
    }

    fn settle_to_rest(&mut self) {
        if self.value() == 0.0 {
            self.value.snap_to(0.0);
        } else {
            self.value.animate_to(0.0, self.config.settle);
        }
    }
}

impl SwipeChannel for ReplyChannel {
    fn kind(&self) -> SwipeKind {
        SwipeKind::Reply
    }

    fn current(&self) -> f32 {
        self.value()
    }

    fn begin_drag(&mut self) {
        if self.value.stop() {
            log::trace!("reply settle on {} interrupted by new press", self.message_id);
        }
        let current = self.value();
        self.value.snap_to(current);
        self.dragging = true;
    }

    fn drag(&mut self, delta_x: f32) -> SwipeEffects {
        let mut effects = SwipeEffects::new();
        if !self.dragging {
            self.begin_drag();
        }
        let (min, max) = self.range();
        let next = coerce_in(self.value() + delta_x, min, max);
        self.value.snap_to(next);

        let crossed = next.abs() >= self.config.threshold;
        if crossed && !self.has_crossed_threshold {
            self.has_crossed_threshold = true;
            log::debug!("reply on {} armed at {:.1}", self.message_id, next);
            effects.push(SwipeEffect::CommitEligible {
                message_id: self.message_id,
            });
        } else if !crossed && self.has_crossed_threshold {
            self.has_crossed_threshold = false;
            log::debug!("reply on {} disarmed at {:.1}", self.message_id, next);
        }
        effects
    }

    fn release(&mut self) -> SwipeEffects {
        let mut effects = SwipeEffects::new();
        self.dragging = false;
        if self.has_crossed_threshold {
            self.has_crossed_threshold = false;
            log::debug!("reply committed on {}", self.message_id);
            effects.push(SwipeEffect::ReplyCommitted {
                message_id: self.message_id,
            });
        }
        self.settle_to_rest();
        effects
    }

    fn cancel(&mut self) -> SwipeEffects {
        self.dragging = false;
        self.has_crossed_threshold = false;
        self.settle_to_rest();
        SwipeEffects::new()
    }

    fn advance(&mut self, frame_time_nanos: u64) -> SwipeEffects {
        let mut effects = SwipeEffects::new();
        if self.value.advance(frame_time_nanos) == TrackStatus::Finished {
            effects.push(SwipeEffect::Settled {
                message_id: self.message_id,
                kind: SwipeKind::Reply,
            });
        }
        effects
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn is_animating(&self) -> bool {
        self.value.is_running()
    }

    fn reset(&mut self) {
        self.value.snap_to(0.0);
        self.has_crossed_threshold = false;
        self.dragging = false;
    }
}
