//! Tessellation of curved and compound shapes into polygons.

use std::f32::consts::TAU;

use glam::Vec2;
use smallvec::SmallVec;

/// Number of vertices used to approximate an ellipse.
pub const ELLIPSE_SEGMENTS: usize = 40;

pub type Outline = SmallVec<[Vec2; 48]>;

/// Approximates an axis-aligned ellipse with a closed polygon.
///
/// `size` is the full width and height, matching how the scene describes ellipses.
pub fn ellipse(center: Vec2, size: Vec2) -> Outline {
    let radii = size * 0.5;
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = TAU * i as f32 / ELLIPSE_SEGMENTS as f32;
            center + radii * Vec2::from_angle(angle)
        })
        .collect()
}

/// The four corners of a rectangle, clockwise from the top-left.
pub fn rect(origin: Vec2, size: Vec2) -> Outline {
    [
        origin,
        origin + Vec2::new(size.x, 0.0),
        origin + size,
        origin + Vec2::new(0.0, size.y),
    ]
    .into_iter()
    .collect()
}

/// An eight-pointed star centred on the origin: long points on the axes, short ones on the diagonals.
pub fn star(outer: f32, inner: f32) -> [Vec2; 8] {
    [
        Vec2::new(0.0, -outer),
        Vec2::new(inner, -inner),
        Vec2::new(outer, 0.0),
        Vec2::new(inner, inner),
        Vec2::new(0.0, outer),
        Vec2::new(-inner, inner),
        Vec2::new(-outer, 0.0),
        Vec2::new(-inner, -inner),
    ]
}
