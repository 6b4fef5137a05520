use std::time::{Duration, Instant};

use tracing::info;

/// Counters for one render pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameProfile {
    pub camera_rays: usize,     // one per pixel
    pub sphere_tests: usize,    // discriminant evaluations
    pub sphere_hits: usize,     // pixels shaded from a sphere
    pub background_hits: usize, // pixels painted with the sky gradient
}

impl FrameProfile {
    pub fn new(
        camera_rays: usize,
        sphere_tests: usize,
        sphere_hits: usize,
        background_hits: usize,
    ) -> Self {
        FrameProfile {
            camera_rays,
            sphere_tests,
            sphere_hits,
            background_hits,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        FrameProfile::new(
            self.camera_rays + other.camera_rays,
            self.sphere_tests + other.sphere_tests,
            self.sphere_hits + other.sphere_hits,
            self.background_hits + other.background_hits,
        )
    }

    pub fn pretty_print(&self, elapsed: f32) {
        let &FrameProfile {
            camera_rays,
            sphere_tests,
            sphere_hits,
            background_hits,
        } = self;
        info!(
            "{} camera rays at {} per second",
            camera_rays,
            camera_rays as f32 / elapsed
        );
        info!(
            "{} sphere tests at {} per second, {} per ray",
            sphere_tests,
            sphere_tests as f32 / elapsed,
            sphere_tests as f32 / camera_rays.max(1) as f32
        );
        info!(
            "{} sphere hits, {} background pixels",
            sphere_hits, background_hits
        );
    }
}

/// Frame rate bookkeeping for an interactive session.
///
/// Counts frames over one second windows and remembers how long the last
/// frame took to compose.
#[derive(Debug)]
pub struct FrameTimer {
    window_start: Instant,
    frames_in_window: u32,
    pub fps: u32,
    pub last_frame_duration: Duration,
}

impl FrameTimer {
    pub fn new(now: Instant) -> Self {
        FrameTimer {
            window_start: now,
            frames_in_window: 0,
            fps: 0,
            last_frame_duration: Duration::ZERO,
        }
    }

    /// Records a finished frame. Returns true when a one second window just
    /// closed and `fps` was updated.
    pub fn frame_finished(&mut self, started: Instant, now: Instant) -> bool {
        self.last_frame_duration = now.saturating_duration_since(started);
        self.frames_in_window += 1;
        if now.saturating_duration_since(self.window_start) >= Duration::from_secs(1) {
            self.fps = self.frames_in_window;
            self.frames_in_window = 0;
            self.window_start += Duration::from_secs(1);
            return true;
        }
        false
    }

    pub fn last_frame_ms(&self) -> f64 {
        self.last_frame_duration.as_secs_f64() * 1000.0
    }
}
