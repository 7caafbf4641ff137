//! Pure geometry for the Chatpose interaction layer
//!
//! Every coordinate handled by the gesture and overlay crates lives in one
//! shared space: the scrollable conversation container's coordinate space.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{coerce_in, EdgeInsets, Point, Rect, Size};
}
