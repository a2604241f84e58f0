//! The frame clock driving the per-frame step.

use std::time::Duration;

use bevy_ecs::resource::Resource;

use crate::formatter;

/// Frame counter and elapsed wall-clock time, as seen by the animation.
///
/// The first advanced frame is frame 1. While paused the clock is not advanced,
/// so time-based behaviour such as the auto-jump timer pauses with it.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameClock {
    pub frame: u64,
    pub elapsed_ms: f64,
}

impl FrameClock {
    pub fn new(frame: u64, elapsed_ms: f64) -> Self {
        Self { frame, elapsed_ms }
    }

    /// Moves to the next frame, `dt` after the previous one.
    pub fn advance(&mut self, dt: Duration) {
        self.frame += 1;
        self.elapsed_ms += dt.as_secs_f64() * 1000.0;
        formatter::set_frame_count(self.frame);
    }
}
