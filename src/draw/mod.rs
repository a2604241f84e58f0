//! Primitive drawing services the scene is painted with.
//!
//! A [`Surface`] accepts polygons, segments and text already in canvas space.
//! The [`Pen`] sits in front of it and owns the transform stack, so scene code can
//! translate, scale and rotate with save/restore semantics and draw ellipses and
//! rectangles as if the surface supported them natively.

use glam::{Affine2, Vec2};
use sdl2::pixels::Color;
use smallvec::SmallVec;

use crate::error::DrawError;

pub mod record;
pub mod sdl;
pub mod shape;

pub type DrawResult = Result<(), DrawError>;

/// Horizontal anchoring of text relative to its position. Text always hangs from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A target that can rasterize primitives. All coordinates are in canvas space.
pub trait Surface {
    /// Fills the whole surface with a single colour.
    fn clear_with(&mut self, color: Color) -> DrawResult;

    /// Fills a closed polygon, blending by the colour's alpha.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color) -> DrawResult;

    /// Outlines a closed polygon with the given stroke weight.
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, weight: f32) -> DrawResult;

    fn draw_segment(&mut self, from: Vec2, to: Vec2, color: Color) -> DrawResult;

    fn draw_text(&mut self, anchor: Vec2, text: &str, align: TextAlign, color: Color) -> DrawResult;
}

/// Transform-stack front end for a [`Surface`].
pub struct Pen<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
    transform: Affine2,
    saved: SmallVec<[Affine2; 4]>,
}

impl<'s, S: Surface + ?Sized> Pen<'s, S> {
    pub fn new(surface: &'s mut S) -> Self {
        Self {
            surface,
            transform: Affine2::IDENTITY,
            saved: SmallVec::new(),
        }
    }

    /// The current local-to-canvas transform.
    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    /// Number of transforms currently saved.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn save(&mut self) {
        self.saved.push(self.transform);
    }

    /// Returns to the most recently saved transform. Unbalanced calls reset to identity.
    pub fn restore(&mut self) {
        self.transform = self.saved.pop().unwrap_or(Affine2::IDENTITY);
    }

    /// Restores saved transforms until only `depth` remain.
    pub fn restore_to(&mut self, depth: usize) {
        while self.saved.len() > depth {
            self.restore();
        }
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    pub fn scale(&mut self, factor: Vec2) {
        self.transform = self.transform * Affine2::from_scale(factor);
    }

    pub fn rotate_degrees(&mut self, degrees: f32) {
        self.transform = self.transform * Affine2::from_angle(degrees.to_radians());
    }

    /// Maps a local point to canvas space.
    pub fn project(&self, point: Vec2) -> Vec2 {
        self.transform.transform_point2(point)
    }

    pub fn clear(&mut self, color: Color) -> DrawResult {
        self.surface.clear_with(color)
    }

    pub fn fill_polygon(&mut self, points: &[Vec2], color: Color) -> DrawResult {
        let projected = self.project_all(points)?;
        self.surface.fill_polygon(&projected, color)
    }

    pub fn stroke_polygon(&mut self, points: &[Vec2], color: Color, weight: f32) -> DrawResult {
        let projected = self.project_all(points)?;
        let weight = weight * self.stroke_scale();
        self.surface.stroke_polygon(&projected, color, weight)
    }

    /// Fills an axis-aligned ellipse given its centre and full width/height.
    pub fn fill_ellipse(&mut self, center: Vec2, size: Vec2, color: Color) -> DrawResult {
        self.fill_polygon(&shape::ellipse(center, size), color)
    }

    pub fn stroke_ellipse(&mut self, center: Vec2, size: Vec2, color: Color, weight: f32) -> DrawResult {
        self.stroke_polygon(&shape::ellipse(center, size), color, weight)
    }

    /// Fills a rectangle given its top-left corner and size.
    pub fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) -> DrawResult {
        self.fill_polygon(&shape::rect(origin, size), color)
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color) -> DrawResult {
        let (from, to) = (self.project(from), self.project(to));
        self.surface.draw_segment(from, to, color)
    }

    /// Draws text at a local anchor. Only the anchor is transformed; glyphs keep their native size.
    pub fn text(&mut self, anchor: Vec2, text: &str, align: TextAlign, color: Color) -> DrawResult {
        let anchor = self.project(anchor);
        self.surface.draw_text(anchor, text, align, color)
    }

    fn project_all(&self, points: &[Vec2]) -> Result<SmallVec<[Vec2; 64]>, DrawError> {
        if points.len() < 3 {
            return Err(DrawError::DegeneratePolygon(points.len()));
        }
        Ok(points.iter().map(|p| self.project(*p)).collect())
    }

    fn stroke_scale(&self) -> f32 {
        let m = self.transform.matrix2;
        (m.x_axis.length() + m.y_axis.length()) * 0.5
    }
}
