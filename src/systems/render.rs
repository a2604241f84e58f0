//! Scene rendering.
//!
//! The whole canvas is repainted every frame in painter's order:
//! background, ground band, sparkles, ghost, caption.

use bevy_ecs::{
    event::{EventReader, EventWriter},
    system::{NonSendMut, Query, Res},
};
use glam::Vec2;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::warn;

use crate::{
    clock::FrameClock,
    constants::{palette, scene, sky_color, CANVAS_SIZE},
    draw::{DrawResult, Pen, Surface, TextAlign},
    error::GameError,
    ghost::Ghost,
    sparkle::SparkleField,
    systems::input::CursorPosition,
};

/// Paints the gradient sky, one row at a time, and the translucent ground band.
pub fn draw_backdrop<S: Surface + ?Sized>(pen: &mut Pen<S>) -> DrawResult {
    let size = CANVAS_SIZE.as_vec2();
    pen.clear(palette::CLEAR)?;

    for row in 0..CANVAS_SIZE.y {
        let y = row as f32;
        pen.line(Vec2::new(0.0, y), Vec2::new(size.x, y), sky_color(row))?;
    }

    pen.fill_rect(
        Vec2::new(0.0, size.y - scene::GROUND_HEIGHT),
        Vec2::new(size.x, scene::GROUND_HEIGHT),
        palette::GROUND,
    )
}

pub fn draw_caption<S: Surface + ?Sized>(pen: &mut Pen<S>) -> DrawResult {
    let anchor = Vec2::new(CANVAS_SIZE.x as f32 - scene::CAPTION_MARGIN, scene::CAPTION_MARGIN);
    pen.text(anchor, scene::CAPTION, TextAlign::Right, palette::CAPTION)
}

/// Draws one complete frame of the scene onto `surface`.
pub fn draw_scene<'a, S: Surface + ?Sized>(
    surface: &mut S,
    clock: &FrameClock,
    sparkles: &SparkleField,
    ghosts: impl IntoIterator<Item = &'a Ghost>,
    pointer: Vec2,
) -> DrawResult {
    let mut pen = Pen::new(surface);

    draw_backdrop(&mut pen)?;
    sparkles.display(&mut pen, clock.elapsed_ms)?;
    for ghost in ghosts {
        ghost.display(&mut pen, pointer)?;
    }
    draw_caption(&mut pen)
}

/// Repaints the window and presents it.
pub fn render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    clock: Res<FrameClock>,
    cursor: Res<CursorPosition>,
    sparkles: Res<SparkleField>,
    ghosts: Query<&Ghost>,
    mut errors: EventWriter<GameError>,
) {
    if let Err(e) = draw_scene(&mut *canvas, &clock, &sparkles, ghosts.iter(), cursor.0) {
        errors.write(e.into());
    }

    canvas.present();
}

/// Logs errors reported by other systems during the frame.
pub fn error_report_system(mut errors: EventReader<GameError>) {
    for error in errors.read() {
        warn!(%error, "Frame error");
    }
}
