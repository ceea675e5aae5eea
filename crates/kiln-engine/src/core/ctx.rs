use crate::input::InputState;
use crate::time::FrameTime;

/// Per-frame context passed to [`App::update`](super::App::update).
pub struct UpdateCtx<'a> {
    /// Timing snapshot taken at the top of this frame.
    pub time: FrameTime,

    /// Keyboard state as of this frame's event drain.
    pub input: &'a InputState,
}

impl UpdateCtx<'_> {
    /// Seconds elapsed since the previous frame.
    pub fn dt(&self) -> f32 {
        self.time.dt
    }

    /// Returns whether the key named `name` is currently held.
    ///
    /// Case-insensitive; empty or unrecognized names report not-pressed.
    pub fn is_key_down(&self, name: &str) -> bool {
        self.input.key_down_by_name(name)
    }
}
