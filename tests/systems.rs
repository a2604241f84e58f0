use bevy_ecs::{schedule::Schedule, system::RunSystemOnce};
use glam::Vec2;
use jumping_ghost::{
    clock::FrameClock,
    constants::{CANVAS_SIZE, GHOST_HOME},
    events::GameCommand,
    ghost::Motion,
    sparkle::SparkleField,
    systems::{
        add_simulation_systems, command_system, ghost_update_system, CursorPosition, GlobalState, PauseState, WindowFocus,
    },
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{airborne_ghost, create_paused_world, create_test_world, ghost, send_game_event, set_ghost};

fn create_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    add_simulation_systems(&mut schedule);
    schedule
}

#[test]
fn test_world_starts_with_scene_resources() {
    let mut world = create_test_world();

    assert_eq!(world.resource::<SparkleField>().len(), 12);
    assert_eq!(*world.resource::<FrameClock>(), FrameClock::default());
    assert_eq!(world.resource::<CursorPosition>().0, Vec2::ZERO);
    assert_that(&world.resource::<WindowFocus>().0).is_true();
    assert_that(&world.resource::<GlobalState>().exit).is_false();
    assert_that(&world.resource::<PauseState>().active()).is_false();

    let ghost = ghost(&mut world);
    assert_eq!(ghost.position(), GHOST_HOME);
    assert_eq!(ghost.motion, Motion::Grounded);
}

#[test]
fn test_seeded_worlds_match() {
    let mut first = create_test_world();
    let mut second = create_test_world();

    assert_eq!(first.resource::<SparkleField>(), second.resource::<SparkleField>());
    assert_eq!(ghost(&mut first).hover_speed, ghost(&mut second).hover_speed);
}

#[test]
fn test_jump_command_launches_ghost() {
    let mut world = create_test_world();
    send_game_event(&mut world, GameCommand::Jump);

    world.run_system_once(command_system).expect("System should run successfully");

    assert_eq!(ghost(&mut world).motion, Motion::Airborne { velocity: -15.0 });
}

#[test]
fn test_jump_command_mid_air_applies_damping() {
    let mut world = create_test_world();
    set_ghost(&mut world, airborne_ghost(80.0, -2.0));
    send_game_event(&mut world, GameCommand::Jump);

    world.run_system_once(command_system).expect("System should run successfully");

    assert_eq!(ghost(&mut world).velocity(), -9.5);
}

#[test]
fn test_jump_ignored_while_paused() {
    let mut world = create_paused_world();
    send_game_event(&mut world, GameCommand::Jump);

    world.run_system_once(command_system).expect("System should run successfully");

    assert_that(&ghost(&mut world).is_grounded()).is_true();
}

#[test]
fn test_pause_command_toggles() {
    let mut world = create_test_world();

    send_game_event(&mut world, GameCommand::TogglePause);
    world.run_system_once(command_system).expect("System should run successfully");
    assert_that(&world.resource::<PauseState>().paused).is_true();

    send_game_event(&mut world, GameCommand::TogglePause);
    world.run_system_once(command_system).expect("System should run successfully");
    assert_that(&world.resource::<PauseState>().paused).is_false();
}

#[test]
fn test_exit_command_sets_exit_flag() {
    let mut world = create_test_world();
    send_game_event(&mut world, GameCommand::Exit);

    world.run_system_once(command_system).expect("System should run successfully");

    assert_that(&world.resource::<GlobalState>().exit).is_true();
}

#[test]
fn test_ghost_update_system_follows_clock() {
    let mut world = create_test_world();
    set_ghost(&mut world, airborne_ghost(0.0, -15.0));
    world.insert_resource(FrameClock::new(1, 16.0));

    world.run_system_once(ghost_update_system).expect("System should run successfully");

    let ghost = ghost(&mut world);
    assert_that(&(ghost.velocity() - -14.118).abs()).is_less_than(1e-4);
    assert_that(&ghost.y).is_less_than(GHOST_HOME.y);
}

#[test]
fn test_schedule_advances_unpaused_ghost() {
    let mut world = create_test_world();
    let mut schedule = create_schedule();
    let before = ghost(&mut world);

    world.insert_resource(FrameClock::new(3, 50.0));
    schedule.run(&mut world);

    let after = ghost(&mut world);
    assert_that(&(after.y - (before.base_y + after.hover_offset(3))).abs()).is_less_than(1e-4);
    assert_ne!(after.y, before.y);
}

#[test]
fn test_paused_schedule_freezes_ghost() {
    let mut world = create_paused_world();
    let mut schedule = create_schedule();
    set_ghost(&mut world, airborne_ghost(60.0, -6.0));
    let before = ghost(&mut world);

    for frame in 1..=30 {
        world.insert_resource(FrameClock::new(frame, frame as f64 * 100.0));
        schedule.run(&mut world);
    }

    assert_eq!(ghost(&mut world), before);
}

#[test]
fn test_unpausing_resumes_motion() {
    let mut world = create_paused_world();
    let mut schedule = create_schedule();
    set_ghost(&mut world, airborne_ghost(60.0, -6.0));

    send_game_event(&mut world, GameCommand::TogglePause);
    world.insert_resource(FrameClock::new(1, 16.0));
    schedule.run(&mut world);

    let ghost = ghost(&mut world);
    assert_that(&world.resource::<PauseState>().active()).is_false();
    assert_that(&(ghost.velocity() - (-6.0 + 0.882)).abs()).is_less_than(1e-4);
}

#[test]
fn test_cursor_is_clamped_into_canvas() {
    let mut cursor = CursorPosition::default();

    cursor.set_clamped(Vec2::new(-20.0, 400.0));
    assert_eq!(cursor.0, Vec2::new(0.0, 400.0));

    cursor.set_clamped(Vec2::new(500.0, 9_000.0));
    assert_eq!(cursor.0, CANVAS_SIZE.as_vec2());
}
