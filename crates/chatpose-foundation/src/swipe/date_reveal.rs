//! Swipe-to-reveal-date channel.

use chatpose_animation::{AnimatedFloat, TrackStatus};

use super::{SwipeChannel, SwipeEffect, SwipeEffects};
use crate::config::DateRevealConfig;
use crate::gestures::SwipeKind;
use crate::message::{MessageAlignment, MessageId};

/// Reveal progress of the per-message date label, in `[0, 1]`.
///
/// Dragging toward the empty side of the row (toward the screen center)
/// increases progress. Nothing is committed on release; release and cancel
/// both settle back to zero.
///
/// On a row that allows replies, toward-center motion is classified as a
/// reply, so this channel only ever sees motion toward the anchored edge
/// and stays at zero. The label shows only on rows with replies disabled.
#[derive(Clone, Debug)]
pub struct DateRevealChannel {
    message_id: MessageId,
    alignment: MessageAlignment,
    config: DateRevealConfig,
    progress: AnimatedFloat,
    dragging: bool,
}

impl DateRevealChannel {
    pub fn new(
        message_id: MessageId,
        alignment: MessageAlignment,
        config: DateRevealConfig,
    ) -> Self {
        Self {
            message_id,
            alignment,
            config,
            progress: AnimatedFloat::new(0.0),
            dragging: false,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress.value().clamp(0.0, 1.0)
    }

    /// Space the label is short of beside a bubble of `bubble_width` in a row
    /// of `row_width`. Zero when the row already has room.
    pub fn clearance_deficit(&self, row_width: f32, bubble_width: f32) -> f32 {
        let available = row_width - bubble_width;
        (self.config.required_space() - available).max(0.0)
    }

    /// Horizontal bubble offset that keeps the revealed label clear of the
    /// bubble. The bubble moves toward its anchored edge, away from the label,
    /// and only by `deficit * progress`.
    pub fn clearance_offset(&self, row_width: f32, bubble_width: f32) -> f32 {
        let deficit = self.clearance_deficit(row_width, bubble_width);
        if deficit == 0.0 {
            return 0.0;
        }
        -self.alignment.toward_center_sign() * deficit * self.progress()
    }

    fn settle_to_rest(&mut self) {
        if self.progress() == 0.0 {
            self.progress.snap_to(0.0);
        } else {
            self.progress.animate_to(0.0, self.config.settle);
        }
    }
}

impl SwipeChannel for DateRevealChannel {
    fn kind(&self) -> SwipeKind {
        SwipeKind::DateReveal
    }

    fn current(&self) -> f32 {
        self.progress()
    }

    fn begin_drag(&mut self) {
        self.progress.stop();
        let current = self.progress();
        self.progress.snap_to(current);
        self.dragging = true;
    }

    fn drag(&mut self, delta_x: f32) -> SwipeEffects {
        if !self.dragging {
            self.begin_drag();
        }
        let step = self.alignment.toward_center_sign() * delta_x / self.config.max_drag;
        let next = (self.progress() + step).clamp(0.0, 1.0);
        self.progress.snap_to(next);
        SwipeEffects::new()
    }

    fn release(&mut self) -> SwipeEffects {
        self.dragging = false;
        self.settle_to_rest();
        SwipeEffects::new()
    }

    fn cancel(&mut self) -> SwipeEffects {
        self.release()
    }

    fn advance(&mut self, frame_time_nanos: u64) -> SwipeEffects {
        let mut effects = SwipeEffects::new();
        if self.progress.advance(frame_time_nanos) == TrackStatus::Finished {
            effects.push(SwipeEffect::Settled {
                message_id: self.message_id,
                kind: SwipeKind::DateReveal,
            });
        }
        effects
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn is_animating(&self) -> bool {
        self.progress.is_running()
    }

    fn reset(&mut self) {
        self.progress.snap_to(0.0);
        self.dragging = false;
    }
}
