//! Keyboard input.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The window runtime translates platform events into [`InputEvent`]s via
//! [`platform`], buffers them, and drains the buffer once per frame.

mod names;
mod state;
mod types;

pub mod platform;

pub use names::MAX_KEY_NAME_LEN;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
