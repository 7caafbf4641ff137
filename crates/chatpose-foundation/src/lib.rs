//! Foundation for Chatpose: pointer input, gesture classification, swipe
//! channels and per-row interaction state for a chat message list.

pub mod config;
pub mod error;
pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod message;
pub mod reactions;
pub mod swipe;

// Re-export commonly used items
pub use config::{DateRevealConfig, GestureConfig, ReplyConfig, SwipeConfig};
pub use error::{ensure_non_negative, ensure_positive, ConfigError};
pub use gestures::{
    ClassificationEvent, GestureClassifier, GestureIntent, GestureSession, SwipeKind,
};
pub use input::{PointerEventKind, PointerId, PointerSample};
pub use message::{MessageAlignment, MessageId, MessageInfo};
pub use reactions::{
    RawReaction, RawReactionCode, ReactionKind, ResolvedReaction, ResolvedReactions, Sender,
};
pub use swipe::{
    BindOutcome, DateRevealChannel, MessageRow, ReplyChannel, RowArena, RowSlot, SwipeChannel,
    SwipeEffect, SwipeEffects,
};

pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::ConfigError;
    pub use crate::gesture_constants::*;
    pub use crate::gestures::*;
    pub use crate::input::*;
    pub use crate::message::*;
    pub use crate::reactions::{ReactionKind, ResolvedReactions, Sender};
    pub use crate::swipe::*;
}
