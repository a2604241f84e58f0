//! This module contains all the constants used by the scene.

use std::time::Duration;

use glam::{UVec2, Vec2};
use sdl2::pixels::Color;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the canvas, in logical units.
pub const CANVAS_SIZE: UVec2 = UVec2::new(393, 852);

/// The window title.
pub const WINDOW_TITLE: &str = "Jumping Ghost";

/// Physics and timing of the ghost.
pub mod ghost {
    /// Gravity added to the vertical velocity every airborne frame, before damping.
    pub const GRAVITY: f32 = 0.9;
    /// Damping applied to gravity; the effective acceleration is `GRAVITY * GRAVITY_DAMPING`.
    pub const GRAVITY_DAMPING: f32 = 0.98;
    /// Vertical velocity given by a jump from the ground.
    pub const JUMP_IMPULSE: f32 = -15.0;
    /// A mid-air jump only adds thrust while the upward velocity is weaker than this.
    pub const MID_AIR_THRESHOLD: f32 = -5.0;
    /// Milliseconds between automatic jumps.
    pub const AUTO_JUMP_INTERVAL_MS: f64 = 1500.0;
    /// How far above the bottom of the canvas the ghost rests.
    pub const GROUND_CLEARANCE: f32 = 110.0;
    /// Amplitude of the idle hover, in logical units.
    pub const HOVER_AMPLITUDE: f32 = 2.0;
    /// Range the per-ghost hover speed is drawn from.
    pub const HOVER_SPEED_RANGE: std::ops::Range<f32> = 0.8..1.3;
    /// Velocity at which the stretch reaches its maximum.
    pub const MAX_STRETCH_SPEED: f32 = 25.0;
    /// Maximum vertical stretch while airborne.
    pub const STRETCH: f32 = 0.35;
    /// Stretch multiplier while falling.
    pub const FALL_STRETCH_RATIO: f32 = 0.6;
    /// Every n-th grounded frame pulses a small squash.
    pub const SQUASH_PERIOD: u64 = 8;
    /// Amplitude of the grounded squash pulse.
    pub const SQUASH_AMPLITUDE: f32 = 0.08;
    /// Per-frame easing of the scale back toward neutral.
    pub const SCALE_EASING: f32 = 0.12;
    /// Jump height at which the drop shadow is fully shrunk.
    pub const SHADOW_FADE_HEIGHT: f32 = 200.0;
}

/// Geometry of the ghost, in its local frame.
pub mod shape {
    use glam::Vec2;

    pub const BODY_SIZE: Vec2 = Vec2::new(140.0, 120.0);
    /// Vertical offset of the eyes from the body origin.
    pub const EYE_OFFSET_Y: f32 = -12.0;
    /// Horizontal distance of each eye from the centre line.
    pub const EYE_DISTANCE: f32 = 26.0;
    pub const EYE_RADIUS: f32 = 12.0;
    /// Fraction of the eye radius the pupil may travel before clamping.
    pub const PUPIL_REACH: f32 = 0.6;
    /// Damping applied to the clamped pupil travel.
    pub const PUPIL_DAMPING: f32 = 0.45;
    /// Number of segments in the wavy tail.
    pub const TAIL_COUNT: u32 = 6;
    /// How far the head arc is raised above the body origin.
    pub const HEAD_LIFT: f32 = 10.0;
    /// How far the tail hangs below the top of the tail region.
    pub const TAIL_DROP: f32 = 28.0;
    pub const TAIL_WAVE: f32 = 10.0;
    /// The body is drawn this far above its scaling pivot, as a fraction of the body height.
    pub const PIVOT_RATIO: f32 = 0.25;
    pub const SCLERA_STROKE: f32 = 2.0;
    /// Angular step of the head arc, in degrees.
    pub const HEAD_ARC_STEP: usize = 6;
    /// The pointer is measured from this far above the ghost position.
    pub const GAZE_ORIGIN_OFFSET: f32 = 10.0;
    /// Where the drop shadow sits relative to the ghost position.
    pub const SHADOW_OFFSET: Vec2 = Vec2::new(0.0, 72.0);
    pub const SHADOW_HEIGHT: f32 = 18.0;
}

/// Ambient sparkle particles.
pub mod sparkle {
    pub const COUNT: usize = 12;
    /// Distance kept from the left, right and top edges of the canvas.
    pub const EDGE_MARGIN: f32 = 40.0;
    /// Distance kept from the bottom edge, so sparkles stay above the ground band.
    pub const BOTTOM_MARGIN: f32 = 140.0;
    pub const SIZE_RANGE: std::ops::Range<f32> = 2.0..6.0;
    pub const PHASE_MAX: f32 = 1000.0;
    /// Radians of twinkle phase per elapsed millisecond.
    pub const TWINKLE_RATE: f64 = 0.002;
    pub const MIN_ALPHA: f32 = 40.0;
    pub const MAX_ALPHA: f32 = 180.0;
    /// Rotation wobble amplitude, in degrees.
    pub const WOBBLE_DEGREES: f32 = 8.0;
    /// Radius of the star points, as a multiple of the particle size.
    pub const OUTER_RADIUS: f32 = 1.2;
    /// Offset of the star's inner vertices, as a multiple of the particle size.
    pub const INNER_OFFSET: f32 = 0.35;
}

/// Backdrop layout.
pub mod scene {
    /// Height of the translucent ground band.
    pub const GROUND_HEIGHT: f32 = 80.0;
    pub const CAPTION: &str = "Jumping Ghost";
    /// Caption distance from the top-right corner.
    pub const CAPTION_MARGIN: f32 = 12.0;
}

/// The colours of the scene.
pub mod palette {
    use sdl2::pixels::Color;

    pub const CLEAR: Color = Color::RGB(15, 23, 36);
    /// Gradient colour at the top row.
    pub const SKY_TOP: [f32; 3] = [8.0, 12.0, 24.0];
    /// Per-channel change from the top row to the bottom row.
    pub const SKY_SPAN: [f32; 3] = [40.0, 45.0, 40.0];
    pub const GROUND: Color = Color::RGBA(20, 28, 42, 150);
    pub const CAPTION: Color = Color::RGBA(255, 255, 255, 120);
    pub const BODY: Color = Color::RGBA(255, 255, 255, 240);
    pub const FACE: Color = Color::RGBA(245, 245, 255, 200);
    pub const CHIN: Color = Color::RGBA(230, 230, 240, 100);
    pub const SCLERA: Color = Color::RGB(255, 255, 255);
    pub const SCLERA_RIM: Color = Color::RGB(220, 220, 220);
    pub const PUPIL: Color = Color::RGB(20, 20, 20);
    pub const HIGHLIGHT: Color = Color::RGB(255, 255, 255);
    pub const MOUTH: Color = Color::RGBA(40, 60, 70, 180);
    /// Sparkle tint; the alpha is computed per frame.
    pub const SPARKLE: Color = Color::RGB(255, 240, 255);
}

/// Where the ghost rests, derived from the canvas size.
pub const GHOST_HOME: Vec2 = Vec2::new(
    CANVAS_SIZE.x as f32 / 2.0,
    CANVAS_SIZE.y as f32 - ghost::GROUND_CLEARANCE,
);

/// Returns the gradient colour of a background row.
pub fn sky_color(row: u32) -> Color {
    let t = row as f32 / CANVAS_SIZE.y as f32;
    let channel = |i: usize| (palette::SKY_TOP[i] + palette::SKY_SPAN[i] * t) as u8;
    Color::RGB(channel(0), channel(1), channel(2))
}
