//! SDL2 backend, rasterizing through SDL2_gfx.

use glam::Vec2;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas, RenderTarget};
use smallvec::SmallVec;

use super::{DrawResult, Surface, TextAlign};
use crate::error::DrawError;

/// Width and height of a glyph in the built-in SDL2_gfx font.
pub const GLYPH_SIZE: i32 = 8;

/// Below this weight an outline is drawn antialiased and one pixel wide.
const HAIRLINE_WEIGHT: f32 = 1.5;

type Vertices = SmallVec<[i16; 64]>;

fn to_vertices(points: &[Vec2]) -> (Vertices, Vertices) {
    points.iter().map(|p| (to_coord(p.x), to_coord(p.y))).unzip()
}

fn to_coord(value: f32) -> i16 {
    // `as` saturates at the i16 bounds
    value.round() as i16
}

/// Left edge of a run of text for the given alignment.
pub fn text_origin_x(anchor_x: f32, text: &str, align: TextAlign) -> f32 {
    let width = (text.chars().count() as i32 * GLYPH_SIZE) as f32;
    match align {
        TextAlign::Left => anchor_x,
        TextAlign::Center => anchor_x - width / 2.0,
        TextAlign::Right => anchor_x - width,
    }
}

impl<T: RenderTarget> Surface for Canvas<T> {
    fn clear_with(&mut self, color: Color) -> DrawResult {
        self.set_blend_mode(BlendMode::None);
        self.set_draw_color(color);
        self.clear();
        self.set_blend_mode(BlendMode::Blend);
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) -> DrawResult {
        let (vx, vy) = to_vertices(points);
        self.filled_polygon(&vx, &vy, color).map_err(DrawError::Primitive)
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, weight: f32) -> DrawResult {
        if weight < HAIRLINE_WEIGHT {
            let (vx, vy) = to_vertices(points);
            return self.aa_polygon(&vx, &vy, color).map_err(DrawError::Primitive);
        }

        let width = weight.round().clamp(1.0, u8::MAX as f32) as u8;
        for (i, from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.thick_line(to_coord(from.x), to_coord(from.y), to_coord(to.x), to_coord(to.y), width, color)
                .map_err(DrawError::Primitive)?;
        }
        Ok(())
    }

    fn draw_segment(&mut self, from: Vec2, to: Vec2, color: Color) -> DrawResult {
        let (x1, y1, x2, y2) = (to_coord(from.x), to_coord(from.y), to_coord(to.x), to_coord(to.y));
        let result = if y1 == y2 {
            self.hline(x1, x2, y1, color)
        } else {
            self.line(x1, y1, x2, y2, color)
        };
        result.map_err(DrawError::Primitive)
    }

    fn draw_text(&mut self, anchor: Vec2, text: &str, align: TextAlign, color: Color) -> DrawResult {
        let x = text_origin_x(anchor.x, text, align);
        self.string(to_coord(x), to_coord(anchor.y), text, color)
            .map_err(DrawError::Primitive)
    }
}
