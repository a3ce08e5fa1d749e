use std::time::{Duration, Instant};

/// Timing for one tick of the frame loop.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Tick counter, starting at zero.
    pub frame_index: u64,
}

impl FrameTime {
    /// Elapsed time of this tick in whole milliseconds.
    ///
    /// Sprite-sheet animation counts frames in milliseconds.
    #[inline]
    pub fn dt_millis(&self) -> u32 {
        (self.dt * 1000.0).round() as u32
    }
}

/// Produces `FrameTime` values for a frame loop.
///
/// Delta time is clamped so a debugger pause or a minimized window does not
/// make effects jump.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the baseline, e.g. after the window regains focus.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

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
    fn first_tick_is_frame_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
    }

    #[test]
    fn dt_is_clamped_to_max() {
        let mut clock = FrameClock::with_clamps(Duration::from_micros(1), Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(5));
        let ft = clock.tick();
        assert!(ft.dt <= 0.001 + f32::EPSILON);
    }

    #[test]
    fn dt_millis_rounds() {
        let ft = FrameTime { dt: 0.0166, now: Instant::now(), frame_index: 0 };
        assert_eq!(ft.dt_millis(), 17);
    }
}
