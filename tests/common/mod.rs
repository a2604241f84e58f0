#![allow(dead_code)]

use bevy_ecs::{entity::Entity, event::Events, world::World};
use jumping_ghost::{
    clock::FrameClock,
    config::LaunchOptions,
    constants::GHOST_HOME,
    events::GameEvent,
    game::Game,
    ghost::{Ghost, Motion},
};

pub const TEST_SEED: u64 = 42;

/// A grounded ghost at the home position with a neutral hover speed.
pub fn grounded_ghost() -> Ghost {
    Ghost::new(GHOST_HOME, 1.0, 0.0)
}

/// A ghost in mid-air, `height` units above its resting height.
pub fn airborne_ghost(height: f32, velocity: f32) -> Ghost {
    Ghost {
        y: GHOST_HOME.y - height,
        motion: Motion::Airborne { velocity },
        ..grounded_ghost()
    }
}

/// The clock as it reads on `frame`, at a steady 60 frames per second.
pub fn clock_at(frame: u64) -> FrameClock {
    FrameClock::new(frame, frame as f64 * 1000.0 / 60.0)
}

/// Creates a world with every resource the simulation systems expect, seeded for reproducibility.
pub fn create_test_world() -> World {
    Game::create_world(&LaunchOptions {
        seed: Some(TEST_SEED),
        ..Default::default()
    })
}

pub fn create_paused_world() -> World {
    Game::create_world(&LaunchOptions {
        seed: Some(TEST_SEED),
        paused: true,
        ..Default::default()
    })
}

pub fn ghost_entity(world: &mut World) -> Entity {
    world
        .query::<(Entity, &Ghost)>()
        .single(world)
        .map(|(entity, _)| entity)
        .expect("the scene has exactly one ghost")
}

pub fn ghost(world: &mut World) -> Ghost {
    *world.query::<&Ghost>().single(world).expect("the scene has exactly one ghost")
}

pub fn set_ghost(world: &mut World, ghost: Ghost) {
    let entity = ghost_entity(world);
    *world.get_mut::<Ghost>(entity).expect("ghost component") = ghost;
}

/// Sends a game event to the world
pub fn send_game_event(world: &mut World, event: impl Into<GameEvent>) {
    let mut events = world.resource_mut::<Events<GameEvent>>();
    events.send(event.into());
}
