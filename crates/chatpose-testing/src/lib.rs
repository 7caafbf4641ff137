//! Testing utilities for Chatpose.
//!
//! [`SurfaceRobot`] scripts pointer input and frame ticks against a
//! [`ConversationSurface`](chatpose_ui::ConversationSurface) on a virtual
//! clock. [`FrameDriver`] pumps anything that advances by frame time.

pub mod fixtures;
pub mod robot;
pub mod robot_assertions;
pub mod testing;

pub use fixtures::*;
pub use robot::*;
pub use robot_assertions::*;
pub use testing::*;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::robot::*;
    pub use crate::robot_assertions::*;
    pub use crate::testing::*;
}
