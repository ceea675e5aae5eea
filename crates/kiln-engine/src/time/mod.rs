//! Frame timing.
//!
//! One [`FrameClock`] per loop; call [`FrameClock::tick`] once per frame to
//! obtain the [`FrameTime`] snapshot handed to the update hook.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
