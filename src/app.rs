use std::time::{Duration, Instant};

use sdl2::Sdl;
use tracing::{debug, info, trace, warn};

use crate::config::LaunchOptions;
use crate::constants::{CANVAS_SIZE, LOOP_TIME, WINDOW_TITLE};
use crate::error::{GameError, GameResult};
use crate::game::Game;
use crate::platform;
use crate::systems::WindowFocus;

/// Main application wrapper that manages SDL initialization, the window, and the frame loop.
pub struct App {
    pub game: Game,
    last_tick: Instant,
    // Keep SDL alive for the app lifetime so the video subsystem is not shut down
    _sdl_context: Sdl,
}

impl App {
    /// Initializes SDL, creates the window and canvas, and builds the scene.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails.
    pub fn new(options: &LaunchOptions) -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;

        debug!("Initializing SDL2 subsystems");
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        trace!(width = CANVAS_SIZE.x, height = CANVAS_SIZE.y, "Creating window");
        let window = video_subsystem
            .window(WINDOW_TITLE, CANVAS_SIZE.x, CANVAS_SIZE.y)
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        canvas
            .set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let game = Game::new(canvas, event_pump, options)?;

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            last_tick: Instant::now(),
            _sdl_context: sdl_context,
        })
    }

    /// Executes a single frame and sleeps off whatever is left of the frame budget.
    ///
    /// The sleep is precise while the window has focus and coarse otherwise.
    ///
    /// # Returns
    ///
    /// `true` if the loop should continue, `false` once exit was requested.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let dt = self.last_tick.elapsed();
        self.last_tick = start;

        if self.game.tick(dt) {
            return false;
        }

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(elapsed);
            if time != Duration::ZERO {
                let focused = self.game.world.resource::<WindowFocus>().0;
                platform::sleep(time, focused);
            }
        } else {
            warn!(elapsed = ?elapsed, budget = ?LOOP_TIME, "Frame loop is behind schedule");
        }

        true
    }
}
