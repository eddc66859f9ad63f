use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the clock was started.
    ///
    /// Derived from the start instant on every tick, never accumulated from
    /// deltas, so it does not drift.
    pub elapsed: f32,

    /// Time elapsed since the previous frame tick, in seconds (clamped).
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Frames per second implied by the clamped delta.
    pub fn fps(&self) -> f32 {
        if self.dt > 0.0 { 1.0 / self.dt } else { 0.0 }
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The clock starts when it is created. One clock per render loop.
///
/// Delta time is clamped to avoid pathological values when the application is paused
/// by the debugger, minimized, or stalls. Elapsed time is not clamped.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min: Duration::from_micros(100), // 0.0001s
            dt_max: Duration::from_millis(250), // 0.25s
        }
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            dt_min,
            dt_max,
            ..Self::new()
        }
    }

    /// Seconds elapsed between the clock start and `at`.
    pub fn elapsed_at(&self, at: Instant) -> f32 {
        at.saturating_duration_since(self.start).as_secs_f32()
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// `now` earlier than the previous tick yields the minimum delta.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now.max(self.last);

        let ft = FrameTime {
            elapsed: self.elapsed_at(now),
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
    fn elapsed_is_measured_from_start() {
        let clock = FrameClock::new();
        let later = clock.start + Duration::from_millis(1500);
        assert!((clock.elapsed_at(later) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn elapsed_does_not_depend_on_tick_count() {
        let mut many = FrameClock::new();
        let mut one = many.clone();
        let end = many.start + Duration::from_secs(2);

        for ms in (16..2000).step_by(16) {
            many.tick_at(many.start + Duration::from_millis(ms));
        }
        let a = many.tick_at(end);
        let b = one.tick_at(end);

        assert_eq!(a.elapsed, b.elapsed);
    }

    #[test]
    fn frame_index_increments_per_tick() {
        let mut clock = FrameClock::new();
        let t0 = clock.start;
        assert_eq!(clock.tick_at(t0).frame_index, 0);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(16)).frame_index, 1);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(32)).frame_index, 2);
    }

    #[test]
    fn delta_is_clamped() {
        let mut clock = FrameClock::with_clamps(
            Duration::from_millis(1),
            Duration::from_millis(100),
        );
        let t0 = clock.start;

        let stalled = clock.tick_at(t0 + Duration::from_secs(5));
        assert!((stalled.dt - 0.1).abs() < 1e-6);
        assert!((stalled.elapsed - 5.0).abs() < 1e-6);

        let tight = clock.tick_at(t0 + Duration::from_secs(5));
        assert!((tight.dt - 0.001).abs() < 1e-6);
    }

    #[test]
    fn fps_from_delta() {
        let mut clock = FrameClock::new();
        let t0 = clock.start;
        let ft = clock.tick_at(t0 + Duration::from_millis(20));
        assert!((ft.fps() - 50.0).abs() < 0.01);
    }
}
