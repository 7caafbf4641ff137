//! Bounded, continuously-updated swipe channels and the rows that own them.
//!
//! Each message row owns one [`ReplyChannel`] and one [`DateRevealChannel`].
//! The classifier routes horizontal deltas to exactly one of them per press;
//! the channel clamps, detects threshold crossings and settles back to rest
//! on release or cancel.

pub mod arena;
pub mod date_reveal;
pub mod reply;
pub mod row;

pub use arena::{BindOutcome, RowArena, RowSlot};
pub use date_reveal::DateRevealChannel;
pub use reply::ReplyChannel;
pub use row::MessageRow;

use smallvec::SmallVec;

use crate::gestures::SwipeKind;
use crate::message::MessageId;

/// Discrete outputs of a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeEffect {
    /// The reply drag crossed its threshold outward. One-shot per crossing;
    /// hosts use it for haptic feedback.
    CommitEligible { message_id: MessageId },
    /// A reply swipe was released past its threshold.
    ReplyCommitted { message_id: MessageId },
    /// A channel finished animating back to rest.
    Settled { message_id: MessageId, kind: SwipeKind },
}

pub type SwipeEffects = SmallVec<[SwipeEffect; 2]>;

/// Common driving surface of the reply and date-reveal channels.
///
/// Calls arrive in sample order. `begin_drag` always precedes the first
/// `drag` of a press and cancels whatever settle animation the previous press
/// left running.
pub trait SwipeChannel {
    fn kind(&self) -> SwipeKind;

    /// Current published value. Always inside the channel's range.
    fn current(&self) -> f32;

    /// Stops any in-flight settle animation, keeping the current value.
    fn begin_drag(&mut self);

    fn drag(&mut self, delta_x: f32) -> SwipeEffects;

    fn release(&mut self) -> SwipeEffects;

    fn cancel(&mut self) -> SwipeEffects;

    /// Advances the settle animation. Reports `Settled` on the frame the
    /// channel comes to rest.
    fn advance(&mut self, frame_time_nanos: u64) -> SwipeEffects;

    fn is_dragging(&self) -> bool;

    fn is_animating(&self) -> bool;

    /// At rest: zero and neither dragging nor animating.
    fn is_at_rest(&self) -> bool {
        !self.is_dragging() && !self.is_animating() && self.current() == 0.0
    }

    /// Drops straight to rest with no animation (row recycling).
    fn reset(&mut self);
}

#[cfg(test)]
#[path = "../tests/swipe_tests.rs"]
mod tests;
