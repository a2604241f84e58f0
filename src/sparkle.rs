//! Ambient twinkling sparkles.

use std::f64::consts::TAU;

use bevy_ecs::resource::Resource;
use glam::Vec2;
use rand::Rng;
use sdl2::pixels::Color;

use crate::constants::{palette, sparkle};
use crate::draw::{shape, DrawResult, Pen, Surface};

/// A single particle. Its appearance is a pure function of elapsed time; it never moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub position: Vec2,
    pub size: f32,
    pub phase: f32,
}

impl Sparkle {
    /// Twinkle angle in radians, within `[0, 2π)`.
    pub fn twinkle(&self, elapsed_ms: f64) -> f32 {
        (elapsed_ms * sparkle::TWINKLE_RATE + self.phase as f64).rem_euclid(TAU) as f32
    }

    /// Brightness oscillating between the minimum and maximum alpha.
    pub fn alpha(&self, elapsed_ms: f64) -> u8 {
        let t = self.twinkle(elapsed_ms);
        let level = (t.sin() + 1.0) * 0.5;
        (sparkle::MIN_ALPHA + (sparkle::MAX_ALPHA - sparkle::MIN_ALPHA) * level).round() as u8
    }

    /// Rotation wobble in degrees.
    pub fn rotation(&self, elapsed_ms: f64) -> f32 {
        (self.twinkle(elapsed_ms) * 2.0).sin() * sparkle::WOBBLE_DEGREES
    }

    /// Star outline around the particle's own origin.
    pub fn outline(&self) -> [Vec2; 8] {
        shape::star(self.size * sparkle::OUTER_RADIUS, self.size * sparkle::INNER_OFFSET)
    }

    fn display<S: Surface + ?Sized>(&self, pen: &mut Pen<S>, elapsed_ms: f64) -> DrawResult {
        let color = Color::RGBA(
            palette::SPARKLE.r,
            palette::SPARKLE.g,
            palette::SPARKLE.b,
            self.alpha(elapsed_ms),
        );

        pen.save();
        pen.translate(self.position);
        pen.rotate_degrees(self.rotation(elapsed_ms));
        let result = pen.fill_polygon(&self.outline(), color);
        pen.restore();
        result
    }
}

/// The fixed set of sparkles, laid out once when the scene is built.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SparkleField {
    sparkles: [Sparkle; sparkle::COUNT],
}

impl SparkleField {
    /// Scatters the sparkles over `canvas`, away from its edges and above the ground band.
    pub fn new<R: Rng>(rng: &mut R, canvas: Vec2) -> Self {
        let sparkles = std::array::from_fn(|_| Sparkle {
            position: Vec2::new(
                rng.random_range(sparkle::EDGE_MARGIN..canvas.x - sparkle::EDGE_MARGIN),
                rng.random_range(sparkle::EDGE_MARGIN..canvas.y - sparkle::BOTTOM_MARGIN),
            ),
            size: rng.random_range(sparkle::SIZE_RANGE),
            phase: rng.random_range(0.0..sparkle::PHASE_MAX),
        });

        Self { sparkles }
    }

    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sparkle> {
        self.sparkles.iter()
    }

    /// Draws every sparkle for the given moment.
    pub fn display<S: Surface + ?Sized>(&self, pen: &mut Pen<S>, elapsed_ms: f64) -> DrawResult {
        for particle in &self.sparkles {
            particle.display(pen, elapsed_ms)?;
        }
        Ok(())
    }
}
