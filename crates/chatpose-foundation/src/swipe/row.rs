use chatpose_ui_graphics::Rect;

use crate::message::MessageAlignment;

use super::{DateRevealChannel, ReplyChannel, SwipeChannel, SwipeEffects};
use crate::config::SwipeConfig;
use crate::gestures::{ClassificationEvent, SwipeKind};
use crate::message::{MessageId, MessageInfo};

/// Interaction state of one visible message row: its two swipe channels plus
/// the geometry the date reveal needs.
#[derive(Clone, Debug)]
pub struct MessageRow {
    info: MessageInfo,
    /// Row rectangle in the conversation container's coordinate space.
    bounds: Rect,
    bubble_width: f32,
    reply: ReplyChannel,
    date_reveal: DateRevealChannel,
}

impl MessageRow {
    pub fn new(info: MessageInfo, bounds: Rect, bubble_width: f32, config: &SwipeConfig) -> Self {
        Self {
            info,
            bounds,
            bubble_width,
            reply: ReplyChannel::new(info.id, info.alignment, config.reply),
            date_reveal: DateRevealChannel::new(info.id, info.alignment, config.date_reveal),
        }
    }

    pub fn info(&self) -> &MessageInfo {
        &self.info
    }

    pub fn message_id(&self) -> MessageId {
        self.info.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn bubble_width(&self) -> f32 {
        self.bubble_width
    }

    /// Bubble rectangle at rest: `bubble_width` wide, hugging the edge the
    /// message is anchored to.
    pub fn bubble_bounds(&self) -> Rect {
        let width = self.bubble_width.min(self.bounds.width).max(0.0);
        let x = match self.info.alignment {
            MessageAlignment::Incoming => self.bounds.left(),
            MessageAlignment::Outgoing => self.bounds.right() - width,
        };
        Rect::new(x, self.bounds.y, width, self.bounds.height)
    }

    pub fn reply(&self) -> &ReplyChannel {
        &self.reply
    }

    pub fn date_reveal(&self) -> &DateRevealChannel {
        &self.date_reveal
    }

    /// Layout refresh for the same message. Channel state is kept.
    pub(crate) fn update(&mut self, info: MessageInfo, bounds: Rect, bubble_width: f32) {
        self.info.reply_allowed = info.reply_allowed;
        self.bounds = bounds;
        self.bubble_width = bubble_width;
    }

    pub fn channel_mut(&mut self, kind: SwipeKind) -> &mut dyn SwipeChannel {
        match kind {
            SwipeKind::Reply => &mut self.reply,
            SwipeKind::DateReveal => &mut self.date_reveal,
        }
    }

    /// Routes one classifier event to the channel it names.
    pub fn apply(&mut self, event: ClassificationEvent) -> SwipeEffects {
        match event {
            ClassificationEvent::ScrollClaimed => SwipeEffects::new(),
            ClassificationEvent::SwipeStarted { kind, delta_x } => {
                let channel = self.channel_mut(kind);
                channel.begin_drag();
                channel.drag(delta_x)
            }
            ClassificationEvent::SwipeMoved { kind, delta_x } => self.channel_mut(kind).drag(delta_x),
            ClassificationEvent::SwipeReleased { kind } => self.channel_mut(kind).release(),
            ClassificationEvent::SwipeCancelled { kind } => self.channel_mut(kind).cancel(),
        }
    }

    /// Implicit cancel for a press that vanished without release: any
    /// channel still mid-drag settles back to rest.
    pub fn cancel_interaction(&mut self) -> SwipeEffects {
        let mut effects = SwipeEffects::new();
        if self.reply.is_dragging() {
            effects.extend(self.reply.cancel());
        }
        if self.date_reveal.is_dragging() {
            effects.extend(self.date_reveal.cancel());
        }
        effects
    }

    /// Total horizontal translation for the message content: the reply offset
    /// plus whatever clearance the date reveal needs.
    pub fn combined_offset(&self) -> f32 {
        self.reply.value()
            + self
                .date_reveal
                .clearance_offset(self.bounds.width, self.bubble_width)
    }

    pub fn advance(&mut self, frame_time_nanos: u64) -> SwipeEffects {
        let mut effects = self.reply.advance(frame_time_nanos);
        effects.extend(self.date_reveal.advance(frame_time_nanos));
        effects
    }

    pub fn is_animating(&self) -> bool {
        self.reply.is_animating() || self.date_reveal.is_animating()
    }

    pub fn is_at_rest(&self) -> bool {
        self.reply.is_at_rest() && self.date_reveal.is_at_rest()
    }

    pub(crate) fn reset(&mut self) {
        self.reply.reset();
        self.date_reveal.reset();
    }
}
