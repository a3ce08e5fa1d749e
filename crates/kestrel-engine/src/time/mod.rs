//! Frame timing.
//!
//! One `FrameClock` per frame loop; call `tick()` once per frame and hand the
//! resulting `FrameTime` to effects and elements.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
