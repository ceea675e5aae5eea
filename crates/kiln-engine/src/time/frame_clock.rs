use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds elapsed since the previous tick (or since the baseline for
    /// the first frame). Never negative.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Monotonic frame clock.
///
/// `dt` is the raw elapsed time between consecutive ticks, clamped only at
/// the top end so a debugger pause or a minimized window cannot feed the
/// update hook a multi-second step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(Duration::from_millis(250))
    }

    /// Creates a clock with a custom stall clamp.
    pub fn with_max_dt(dt_max: Duration) -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_max,
        }
    }

    /// Rebaselines the clock so the next `dt` measures from now.
    ///
    /// Called when the loop enters its running state, so the first frame's
    /// delta covers initialization time rather than clock construction.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut dt = now.saturating_duration_since(self.last);
        if dt > self.dt_max {
            dt = self.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_is_never_negative() {
        let mut clock = FrameClock::new();
        for _ in 0..100 {
            assert!(clock.tick().dt >= 0.0);
        }
    }

    #[test]
    fn first_tick_after_reset_is_small() {
        let mut clock = FrameClock::new();
        clock.reset();
        let ft = clock.tick();
        assert!(ft.dt < 1.0);
    }

    #[test]
    fn frame_index_increments() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn baseline_advances_monotonically() {
        let mut clock = FrameClock::new();
        let a = clock.tick().now;
        let b = clock.tick().now;
        let c = clock.tick().now;
        assert!(a <= b && b <= c);
    }

    #[test]
    fn dt_is_clamped_to_max() {
        let mut clock = FrameClock::with_max_dt(Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(25));
        let ft = clock.tick();
        assert!(ft.dt <= 0.011);
    }
}
