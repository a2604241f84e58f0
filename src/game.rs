//! This module builds the scene and runs it one frame at a time.

use std::time::{Duration, Instant};

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use sdl2::event::EventType;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;
use tracing::{debug, info, warn};

use crate::clock::FrameClock;
use crate::config::LaunchOptions;
use crate::constants::{CANVAS_SIZE, LOOP_TIME};
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::ghost::Ghost;
use crate::platform;
use crate::sparkle::SparkleField;
use crate::systems::{
    self, error_report_system, input_system, render_system, Bindings, CursorPosition, FrameSet, GlobalState, PauseState,
    WindowFocus,
};

/// Scene state built on the Bevy ECS.
///
/// The `World` holds the ghost, the sparkle field, the clock and the shared input
/// state, plus the SDL canvas and event pump as non-send resources. The `Schedule`
/// runs input, update and draw in that order once per frame.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Builds the scene around the SDL canvas and event pump, and wires up the frame schedule.
    pub fn new(canvas: Canvas<Window>, mut event_pump: EventPump, options: &LaunchOptions) -> GameResult<Game> {
        info!(seed = ?options.seed, "Building scene");

        debug!("Disabling unnecessary SDL events");
        Self::disable_sdl_events(&mut event_pump);

        let mut world = Self::create_world(options);
        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(event_pump);

        let mut schedule = Schedule::default();
        Self::configure_schedule(&mut schedule);

        Ok(Game { world, schedule })
    }

    /// Creates the world with every resource and entity the systems expect, but no SDL handles.
    pub fn create_world(options: &LaunchOptions) -> World {
        let mut world = World::default();
        EventRegistry::register_event::<GameError>(&mut world);
        EventRegistry::register_event::<GameEvent>(&mut world);

        let mut rng = platform::rng(options.seed);
        let clock = FrameClock::default();

        let sparkles = SparkleField::new(&mut rng, CANVAS_SIZE.as_vec2());
        debug!(count = sparkles.len(), "Scattered sparkles");
        world.insert_resource(sparkles);

        let ghost = Ghost::spawn(&mut rng, clock.elapsed_ms);
        debug!(x = ghost.x, base_y = ghost.base_y, hover_speed = ghost.hover_speed, "Spawned ghost");
        world.spawn(ghost);

        world.insert_resource(clock);
        world.insert_resource(CursorPosition::default());
        world.insert_resource(WindowFocus::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(GlobalState::default());
        world.insert_resource(PauseState { paused: options.paused });

        world
    }

    fn disable_sdl_events(event_pump: &mut EventPump) {
        for event_type in [
            EventType::JoyAxisMotion,
            EventType::JoyBallMotion,
            EventType::JoyHatMotion,
            EventType::JoyButtonDown,
            EventType::JoyButtonUp,
            EventType::ControllerAxisMotion,
            EventType::ControllerButtonDown,
            EventType::ControllerButtonUp,
            EventType::TextEditing,
            EventType::TextInput,
            EventType::DropFile,
        ] {
            event_pump.disable_event(event_type);
        }
    }

    fn configure_schedule(schedule: &mut Schedule) {
        systems::add_simulation_systems(schedule);
        schedule.add_systems((
            input_system.in_set(FrameSet::Input).before(systems::command_system),
            (render_system, error_report_system).chain().in_set(FrameSet::Draw),
        ));
    }

    /// Executes one frame: advances the clock (unless paused) and runs the schedule.
    ///
    /// # Returns
    ///
    /// `true` if the scene should terminate (exit command received), `false` to continue
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.world.resource::<PauseState>().active() {
            self.world.resource_mut::<FrameClock>().advance(dt);
        }

        let start = Instant::now();
        self.schedule.run(&mut self.world);
        let total_duration = start.elapsed();

        // Events are double-buffered; swap so each one is dropped after two frames
        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<GameError>>().update();

        // Anything past 120% of the frame budget is worth a warning
        let frame_budget = LOOP_TIME.mul_f32(1.2);
        if total_duration > frame_budget {
            warn!(
                total = format!("{:.3?}", total_duration),
                frame = self.world.resource::<FrameClock>().frame,
                budget = format!("{:.1?}", frame_budget),
                "Frame took longer than expected"
            );
        }

        self.world.resource::<GlobalState>().exit
    }
}
