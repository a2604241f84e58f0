//! The ghost: its motion state machine, squash-stretch and rendering.
//!
//! The ghost is a single `Copy` record. Every change goes through a by-value
//! transition (`jump`, `land`, `tick`) that returns the next state, so the
//! per-frame systems only ever replace the record as a whole.

use std::f32::consts::PI;

use bevy_ecs::component::Component;
use glam::Vec2;
use rand::Rng;
use sdl2::pixels::Color;
use smallvec::SmallVec;
use strum_macros::IntoStaticStr;
use tracing::{debug, trace};

use crate::clock::FrameClock;
use crate::constants::{ghost, palette, shape, GHOST_HOME};
use crate::draw::{DrawResult, Pen, Surface};

/// Sine of an angle given in degrees.
///
/// Frame-driven phases grow without bound, so they are reduced in f64 first.
fn sin_deg(degrees: f64) -> f32 {
    (degrees % 360.0).to_radians().sin() as f32
}

/// Vertical motion of the ghost.
///
/// A grounded ghost has no velocity at all, rather than a velocity that happens to be zero.
#[derive(Debug, Clone, Copy, PartialEq, IntoStaticStr)]
pub enum Motion {
    Grounded,
    Airborne { velocity: f32 },
}

impl Motion {
    pub fn velocity(self) -> f32 {
        match self {
            Motion::Grounded => 0.0,
            Motion::Airborne { velocity } => velocity,
        }
    }

    pub fn is_grounded(self) -> bool {
        matches!(self, Motion::Grounded)
    }

    /// Applies a jump request.
    ///
    /// From the ground this launches with the full impulse. In the air, half the impulse is
    /// added only while the upward velocity is weaker than the mid-air threshold, so repeated
    /// requests cannot accelerate the ghost without bound.
    #[must_use]
    pub fn jump(self) -> Motion {
        match self {
            Motion::Grounded => Motion::Airborne {
                velocity: ghost::JUMP_IMPULSE,
            },
            Motion::Airborne { velocity } if velocity > ghost::MID_AIR_THRESHOLD => Motion::Airborne {
                velocity: velocity + ghost::JUMP_IMPULSE * 0.5,
            },
            airborne => airborne,
        }
    }
}

/// The ghost's complete state.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ghost {
    /// Horizontal position; the ghost never moves sideways.
    pub x: f32,
    /// Resting height the ghost hovers around and lands on.
    pub base_y: f32,
    pub y: f32,
    pub motion: Motion,
    /// Squash-stretch factors; their product trends toward 1.
    pub scale: Vec2,
    /// Elapsed time of the last automatic jump, in milliseconds.
    pub last_auto_jump_ms: f64,
    /// Idle hover speed, fixed for the ghost's lifetime.
    pub hover_speed: f32,
}

impl Ghost {
    /// Creates a grounded ghost resting at `home`.
    pub fn new(home: Vec2, hover_speed: f32, now_ms: f64) -> Self {
        Self {
            x: home.x,
            base_y: home.y,
            y: home.y,
            motion: Motion::Grounded,
            scale: Vec2::ONE,
            last_auto_jump_ms: now_ms,
            hover_speed,
        }
    }

    /// Creates the scene's ghost at its home position with a random hover speed.
    pub fn spawn<R: Rng>(rng: &mut R, now_ms: f64) -> Self {
        Self::new(GHOST_HOME, rng.random_range(ghost::HOVER_SPEED_RANGE), now_ms)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn velocity(&self) -> f32 {
        self.motion.velocity()
    }

    pub fn is_grounded(&self) -> bool {
        self.motion.is_grounded()
    }

    /// Applies a jump request; see [`Motion::jump`].
    #[must_use]
    pub fn jump(self) -> Self {
        let motion = self.motion.jump();
        if motion == self.motion {
            trace!(velocity = self.velocity(), "Jump request ignored while rising");
        } else {
            debug!(from = ?self.motion, to = ?motion, "Ghost jumped");
        }
        Self { motion, ..self }
    }

    /// Puts the ghost back on its resting height.
    #[must_use]
    pub fn land(self) -> Self {
        debug!(velocity = self.velocity(), "Ghost landed");
        Self {
            y: self.base_y,
            motion: Motion::Grounded,
            ..self
        }
    }

    /// Advances the ghost by one frame: motion, then squash-stretch, then the auto-jump timer.
    #[must_use]
    pub fn tick(self, clock: &FrameClock) -> Self {
        let moved = self.integrate(clock.frame);
        let shaped = Self {
            scale: moved.squash_stretch(clock.frame),
            ..moved
        };
        shaped.auto_jump(clock.elapsed_ms)
    }

    /// In-place form of [`Ghost::tick`].
    pub fn update(&mut self, clock: &FrameClock) {
        *self = self.tick(clock);
    }

    /// Offset of the idle hover from the resting height at the given frame, within ±2.
    pub fn hover_offset(&self, frame: u64) -> f32 {
        sin_deg(frame as f64 * self.hover_speed as f64 * 0.8) * ghost::HOVER_AMPLITUDE
    }

    fn integrate(self, frame: u64) -> Self {
        match self.motion {
            Motion::Grounded => Self {
                y: self.base_y + self.hover_offset(frame),
                ..self
            },
            Motion::Airborne { velocity } => {
                let velocity = velocity + ghost::GRAVITY * ghost::GRAVITY_DAMPING;
                let next = Self {
                    y: self.y + velocity,
                    motion: Motion::Airborne { velocity },
                    ..self
                };

                if next.y >= next.base_y {
                    next.land()
                } else {
                    next
                }
            }
        }
    }

    fn squash_stretch(&self, frame: u64) -> Vec2 {
        match self.motion {
            Motion::Airborne { velocity } => {
                let speed_factor = (velocity.abs() / ghost::MAX_STRETCH_SPEED).clamp(0.0, 1.0);
                let direction = if velocity < 0.0 { 1.0 } else { ghost::FALL_STRETCH_RATIO };
                let stretch = 1.0 + ghost::STRETCH * speed_factor * direction;
                Vec2::new(1.0 / stretch, stretch)
            }
            Motion::Grounded if frame % ghost::SQUASH_PERIOD == 0 => {
                let squash = 1.0 - ghost::SQUASH_AMPLITUDE * sin_deg(frame as f64 * 10.0);
                Vec2::new(1.0 / squash, squash)
            }
            Motion::Grounded => self.scale + (Vec2::ONE - self.scale) * ghost::SCALE_EASING,
        }
    }

    /// The auto-jump timer restarts every period, but only launches a grounded ghost.
    fn auto_jump(self, now_ms: f64) -> Self {
        if now_ms - self.last_auto_jump_ms <= ghost::AUTO_JUMP_INTERVAL_MS {
            return self;
        }

        let next = Self {
            last_auto_jump_ms: now_ms,
            ..self
        };
        if next.is_grounded() {
            next.jump()
        } else {
            next
        }
    }

    /// Height above the resting position, normalized to 0 (grounded) ..= 1 (200 units up).
    pub fn height_factor(&self) -> f32 {
        ((self.base_y - self.y) / ghost::SHADOW_FADE_HEIGHT).clamp(0.0, 1.0)
    }

    /// Size and opacity of the drop shadow; it shrinks and fades as the ghost rises.
    pub fn shadow(&self) -> (Vec2, u8) {
        let height = self.height_factor();
        let size = Vec2::new(
            shape::BODY_SIZE.x * (1.0 + 0.25 * height),
            shape::SHADOW_HEIGHT * (1.0 - 0.8 * height),
        );
        let alpha = 90.0 * (1.0 - height) + 40.0;
        (size, alpha.round() as u8)
    }

    /// Maps a canvas pointer into the ghost's local frame, undoing the current squash-stretch.
    pub fn gaze_target(&self, pointer: Vec2) -> Vec2 {
        let origin = Vec2::new(self.x, self.y - shape::GAZE_ORIGIN_OFFSET);
        (pointer - origin) / self.scale
    }

    pub fn eye_centers() -> [Vec2; 2] {
        [
            Vec2::new(-shape::EYE_DISTANCE, shape::EYE_OFFSET_Y),
            Vec2::new(shape::EYE_DISTANCE, shape::EYE_OFFSET_Y),
        ]
    }

    /// Pupil displacement from the eye centre when looking at `gaze`.
    ///
    /// Each axis is clamped to `0.6 * EYE_RADIUS` and then damped by 0.45.
    pub fn pupil_offset(eye: Vec2, gaze: Vec2) -> Vec2 {
        let reach = shape::EYE_RADIUS * shape::PUPIL_REACH;
        (gaze - eye).clamp(Vec2::splat(-reach), Vec2::splat(reach)) * shape::PUPIL_DAMPING
    }

    /// Closed silhouette of the body: a half-ellipse head followed by a wavy tail, right to left.
    pub fn body_outline() -> SmallVec<[Vec2; 40]> {
        let half = shape::BODY_SIZE * 0.5;

        let head = (180..=360).step_by(shape::HEAD_ARC_STEP).map(|degrees| {
            let angle = (degrees as f32).to_radians();
            Vec2::new(half.x * angle.cos(), half.y * angle.sin() - shape::HEAD_LIFT)
        });

        let tail_top = shape::BODY_SIZE.y / 6.0 + shape::TAIL_DROP;
        let tail = (0..=shape::TAIL_COUNT).map(move |i| {
            let t = i as f32 / shape::TAIL_COUNT as f32;
            let wave = sin_deg((t * PI * shape::TAIL_COUNT as f32) as f64) * shape::TAIL_WAVE;
            Vec2::new(half.x - shape::BODY_SIZE.x * t, tail_top + wave)
        });

        head.chain(tail).collect()
    }

    /// Draws the ghost, with its eyes following `pointer` (canvas coordinates).
    pub fn display<S: Surface + ?Sized>(&self, pen: &mut Pen<S>, pointer: Vec2) -> DrawResult {
        let depth = pen.depth();
        pen.save();
        pen.translate(self.position());
        let result = self.draw_layers(pen, pointer);
        pen.restore_to(depth);
        result
    }

    fn draw_layers<S: Surface + ?Sized>(&self, pen: &mut Pen<S>, pointer: Vec2) -> DrawResult {
        let (shadow_size, shadow_alpha) = self.shadow();
        pen.fill_ellipse(shape::SHADOW_OFFSET, shadow_size, Color::RGBA(0, 0, 0, shadow_alpha))?;

        pen.save();
        pen.scale(self.scale);
        pen.translate(Vec2::new(0.0, -shape::BODY_SIZE.y * shape::PIVOT_RATIO));

        pen.fill_polygon(&Self::body_outline(), palette::BODY)?;
        pen.fill_ellipse(Vec2::new(0.0, -6.0), shape::BODY_SIZE * Vec2::new(0.9, 0.75), palette::FACE)?;
        pen.fill_ellipse(Vec2::new(0.0, 10.0), shape::BODY_SIZE * Vec2::new(0.65, 0.18), palette::CHIN)?;

        let gaze = self.gaze_target(pointer);
        for eye in Self::eye_centers() {
            Self::draw_eye(pen, eye, gaze)?;
        }

        pen.fill_ellipse(Vec2::new(0.0, 6.0), Vec2::new(22.0, 10.0), palette::MOUTH)?;
        pen.restore();
        Ok(())
    }

    fn draw_eye<S: Surface + ?Sized>(pen: &mut Pen<S>, center: Vec2, gaze: Vec2) -> DrawResult {
        let radius = shape::EYE_RADIUS;
        let sclera = Vec2::new(radius * 2.0, radius * 2.2);
        pen.fill_ellipse(center, sclera, palette::SCLERA)?;
        pen.stroke_ellipse(center, sclera, palette::SCLERA_RIM, shape::SCLERA_STROKE)?;

        let pupil = center + Self::pupil_offset(center, gaze);
        pen.fill_ellipse(pupil, Vec2::splat(radius * 0.9), palette::PUPIL)?;

        let highlight = pupil - Vec2::new(radius * 0.22, radius * 0.28);
        pen.fill_ellipse(highlight, Vec2::splat(radius * 0.28), palette::HIGHLIGHT)
    }
}
