//! Animation system for Chatpose
//!
//! Animations here are plain values advanced by the host's frame clock.
//! Nothing registers callbacks or suspends: the owner of a track calls
//! [`AnimatedFloat::advance`] with the current frame time and reacts to the
//! returned [`TrackStatus`].

mod animation;
mod track;

pub use animation::*;
pub use track::*;

pub mod prelude {
    pub use crate::animation::{AnimationSpec, AnimationType, Easing, SpringSpec};
    pub use crate::track::{AnimatedFloat, TrackStatus};
}
