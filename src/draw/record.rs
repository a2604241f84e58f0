//! A headless surface that records every primitive it receives.

use glam::Vec2;
use sdl2::pixels::Color;

use super::{DrawResult, Surface, TextAlign};

/// One primitive as received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    FillPolygon { points: Vec<Vec2>, color: Color },
    StrokePolygon { points: Vec<Vec2>, color: Color, weight: f32 },
    Segment { from: Vec2, to: Vec2, color: Color },
    Text { anchor: Vec2, text: String, align: TextAlign, color: Color },
}

impl DrawCall {
    pub fn color(&self) -> Color {
        match self {
            DrawCall::Clear(color) => *color,
            DrawCall::FillPolygon { color, .. }
            | DrawCall::StrokePolygon { color, .. }
            | DrawCall::Segment { color, .. }
            | DrawCall::Text { color, .. } => *color,
        }
    }
}

/// Collects draw calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Filled polygons in draw order.
    pub fn fills(&self) -> impl Iterator<Item = (&[Vec2], Color)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::FillPolygon { points, color } => Some((points.as_slice(), *color)),
            _ => None,
        })
    }

    pub fn segments(&self) -> usize {
        self.calls.iter().filter(|call| matches!(call, DrawCall::Segment { .. })).count()
    }
}

impl Surface for RecordingSurface {
    fn clear_with(&mut self, color: Color) -> DrawResult {
        self.calls.push(DrawCall::Clear(color));
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) -> DrawResult {
        self.calls.push(DrawCall::FillPolygon {
            points: points.to_vec(),
            color,
        });
        Ok(())
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, weight: f32) -> DrawResult {
        self.calls.push(DrawCall::StrokePolygon {
            points: points.to_vec(),
            color,
            weight,
        });
        Ok(())
    }

    fn draw_segment(&mut self, from: Vec2, to: Vec2, color: Color) -> DrawResult {
        self.calls.push(DrawCall::Segment { from, to, color });
        Ok(())
    }

    fn draw_text(&mut self, anchor: Vec2, text: &str, align: TextAlign, color: Color) -> DrawResult {
        self.calls.push(DrawCall::Text {
            anchor,
            text: text.to_string(),
            align,
            color,
        });
        Ok(())
    }
}
