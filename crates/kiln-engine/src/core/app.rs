use crate::paint::Color;
use crate::render::RenderFrame;

use super::ctx::UpdateCtx;

/// Application contract driven by the frame loop.
///
/// The runtime holds the implementor behind this trait and calls the hooks
/// in a fixed per-frame order: key hooks while events are drained, then
/// [`update`](App::update), then [`render`](App::render), then present.
pub trait App {
    /// Called once per frame with the elapsed time and keyboard state.
    fn update(&mut self, ctx: &mut UpdateCtx<'_>);

    /// Called once per frame after `update`.
    ///
    /// The default implementation clears the frame to a fixed background
    /// color.
    fn render(&mut self, frame: &mut RenderFrame<'_>) {
        frame.clear(Color::CORNFLOWER_BLUE);
    }

    /// Called for each key press drained this frame, with the key's
    /// canonical name. Auto-repeat presses are included.
    fn on_key_down(&mut self, key: &str) {
        let _ = key;
    }

    /// Called for each key release drained this frame.
    fn on_key_up(&mut self, key: &str) {
        let _ = key;
    }
}
