use crate::input::{InputEvent, InputState, KeyState};
use crate::time::{FrameClock, FrameTime};

use super::app::App;

/// Lifecycle of the frame loop.
///
/// `Running` is entered only through [`FrameDriver::start`] after the window
/// and surface exist; `Stopped` is entered only when a quit event is drained
/// and is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RunState {
    Uninitialized,
    Running,
    Stopped,
}

/// Owns the loop's run state and the first two frame phases: timing and
/// event dispatch.
///
/// The driver is deliberately window-free; the runtime feeds it the events
/// it buffered since the last frame, and sequences update/render/present
/// around it. That keeps the loop contract testable without a display.
#[derive(Debug)]
pub struct FrameDriver {
    state: RunState,
    clock: FrameClock,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            state: RunState::Uninitialized,
            clock: FrameClock::new(),
        }
    }

    /// Marks the loop running and rebaselines the clock, so the first
    /// frame's `dt` measures from initialization.
    ///
    /// Only valid from `Uninitialized`; a stopped loop never restarts.
    pub fn start(&mut self) {
        if self.state == RunState::Uninitialized {
            self.clock.reset();
            self.state = RunState::Running;
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Phase 1: advances the clock and returns this frame's timing.
    pub fn begin_frame(&mut self) -> FrameTime {
        self.clock.tick()
    }

    /// Phase 2: consumes this frame's events in arrival order.
    ///
    /// Each key event mutates `input` before the corresponding hook runs, so
    /// the hook (and the update phase after it) observes the new state. A
    /// quit event stops the loop but does not cut the drain short: the
    /// remaining events and the frame's later phases still run, and the
    /// runtime only exits at the frame boundary.
    pub fn dispatch<A>(
        &mut self,
        app: &mut A,
        input: &mut InputState,
        events: impl IntoIterator<Item = InputEvent>,
    ) where
        A: App + ?Sized,
    {
        for ev in events {
            input.apply_event(ev);

            match ev {
                InputEvent::Quit => {
                    self.state = RunState::Stopped;
                }
                InputEvent::Key { key, state } => match state {
                    KeyState::Pressed => app.on_key_down(key.name()),
                    KeyState::Released => app.on_key_up(key.name()),
                },
                InputEvent::Focused(_) => {}
            }
        }
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UpdateCtx;
    use crate::input::Key;

    #[derive(Default)]
    struct Probe {
        updates: u32,
        keys: Vec<String>,
    }

    impl App for Probe {
        fn update(&mut self, _ctx: &mut UpdateCtx<'_>) {
            self.updates += 1;
        }

        fn on_key_down(&mut self, key: &str) {
            self.keys.push(format!("down {key}"));
        }

        fn on_key_up(&mut self, key: &str) {
            self.keys.push(format!("up {key}"));
        }
    }

    fn pressed(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed }
    }

    fn released(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Released }
    }

    /// Runs frames the way the runtime does, feeding `frames[i]` as the
    /// event batch of frame `i`. Returns the number of completed frames.
    fn run_frames(app: &mut Probe, frames: &[Vec<InputEvent>]) -> u32 {
        let mut driver = FrameDriver::new();
        let mut input = InputState::default();
        driver.start();

        let mut completed = 0;
        let mut batches = frames.iter();
        while driver.is_running() {
            let ft = driver.begin_frame();
            let events = batches.next().cloned().unwrap_or_default();
            driver.dispatch(app, &mut input, events);
            app.update(&mut UpdateCtx { time: ft, input: &input });
            // Render and present have no observable effect here; a
            // completed iteration stands for the full phase sequence.
            completed += 1;
        }
        completed
    }

    // ── state machine ─────────────────────────────────────────────────────

    #[test]
    fn starts_uninitialized() {
        assert_eq!(FrameDriver::new().state(), RunState::Uninitialized);
    }

    #[test]
    fn start_enters_running_exactly_once() {
        let mut driver = FrameDriver::new();
        driver.start();
        assert_eq!(driver.state(), RunState::Running);

        driver.start();
        assert_eq!(driver.state(), RunState::Running);
    }

    #[test]
    fn quit_is_terminal() {
        let mut driver = FrameDriver::new();
        let mut input = InputState::default();
        let mut app = Probe::default();
        driver.start();

        driver.dispatch(&mut app, &mut input, [InputEvent::Quit]);
        assert_eq!(driver.state(), RunState::Stopped);

        // A stopped loop never reenters Running.
        driver.start();
        assert_eq!(driver.state(), RunState::Stopped);
    }

    // ── frame loop contract ───────────────────────────────────────────────

    #[test]
    fn quit_on_frame_three_completes_three_frames() {
        let mut app = Probe::default();
        let frames = vec![
            vec![],
            vec![pressed(Key::W)],
            vec![InputEvent::Quit],
        ];

        let completed = run_frames(&mut app, &frames);
        assert_eq!(completed, 3);
        assert_eq!(app.updates, 3);
    }

    #[test]
    fn quit_does_not_cut_the_event_drain_short() {
        let mut driver = FrameDriver::new();
        let mut input = InputState::default();
        let mut app = Probe::default();
        driver.start();

        driver.dispatch(
            &mut app,
            &mut input,
            [pressed(Key::A), InputEvent::Quit, pressed(Key::B)],
        );

        // The key after the quit event is still dispatched this frame.
        assert_eq!(app.keys, ["down A", "down B"]);
        assert_eq!(driver.state(), RunState::Stopped);
    }

    #[test]
    fn events_dispatch_in_fifo_order() {
        let mut driver = FrameDriver::new();
        let mut input = InputState::default();
        let mut app = Probe::default();
        driver.start();

        driver.dispatch(
            &mut app,
            &mut input,
            [
                pressed(Key::Left),
                pressed(Key::Space),
                released(Key::Left),
            ],
        );

        assert_eq!(app.keys, ["down LEFT", "down SPACE", "up LEFT"]);
    }

    #[test]
    fn key_state_is_updated_by_the_drain() {
        let mut driver = FrameDriver::new();
        let mut input = InputState::default();
        let mut app = Probe::default();
        driver.start();

        driver.dispatch(&mut app, &mut input, [pressed(Key::D)]);
        assert!(input.key_down(Key::D));

        driver.dispatch(&mut app, &mut input, [released(Key::D)]);
        assert!(!input.key_down(Key::D));
    }

    #[test]
    fn dt_is_non_negative_across_frames() {
        let mut driver = FrameDriver::new();
        driver.start();
        for _ in 0..50 {
            assert!(driver.begin_frame().dt >= 0.0);
        }
    }
}
