//! Frame pacing for host loops.

use web_time::{Duration, Instant};

/// Frame pacing for hosts that drive a [`FrameQueue`] themselves.
///
/// [`FrameQueue`]: crate::animation::FrameQueue
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps,
            min_frame_duration: frame_interval(target_fps),
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Target frames per second (0 = unlimited).
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Time left before the next frame is due, `Duration::ZERO` if it is due
    /// already.
    pub fn time_until_next_frame(&self, now: Instant) -> Duration {
        let since = now.saturating_duration_since(self.last_frame);
        self.min_frame_duration.saturating_sub(since)
    }

    /// Whether enough time has passed since the last frame to paint again.
    pub fn should_render(&self, now: Instant) -> bool {
        self.target_fps == 0 || self.time_until_next_frame(now).is_zero()
    }

    /// Call after painting to update timing.
    pub fn end_frame(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

/// Nominal spacing between frames at `fps` (zero when unlimited).
pub fn frame_interval(fps: u32) -> Duration {
    if fps > 0 {
        Duration::from_secs_f64(1.0 / f64::from(fps))
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render(Instant::now()));
        assert_eq!(frame_interval(0), Duration::ZERO);
    }

    #[test]
    fn test_waits_for_frame_interval() {
        let mut timing = FrameTiming::new(50);
        let start = Instant::now();
        timing.end_frame(start);

        assert!(!timing.should_render(start + Duration::from_millis(5)));
        assert_eq!(
            timing.time_until_next_frame(start + Duration::from_millis(5)),
            Duration::from_millis(15)
        );
        assert!(timing.should_render(start + Duration::from_millis(20)));
    }

    #[test]
    fn test_smoothed_fps_moves_toward_measured_rate() {
        let mut timing = FrameTiming::new(0);
        // A one-second first frame pulls the estimate below its 60 fps seed
        let start = Instant::now() + Duration::from_secs(1);
        timing.end_frame(start);
        let before = timing.fps();
        assert!(before < 60.0);
        // 10ms frames = 100 fps, above the 60 fps starting estimate
        let mut now = start;
        for _ in 0..10 {
            now += Duration::from_millis(10);
            timing.end_frame(now);
        }
        assert!(timing.fps() > before);
    }
}
