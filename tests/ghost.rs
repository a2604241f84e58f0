use glam::Vec2;
use jumping_ghost::{
    clock::FrameClock,
    constants::{shape, CANVAS_SIZE, GHOST_HOME},
    ghost::{Ghost, Motion},
};
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, SeedableRng};
use speculoos::prelude::*;

mod common;

use common::{airborne_ghost, clock_at, grounded_ghost};

const PUPIL_BOUND: f32 = shape::EYE_RADIUS * shape::PUPIL_REACH * shape::PUPIL_DAMPING;

#[test]
fn test_spawn_rests_at_home() {
    let mut rng = StdRng::seed_from_u64(3);
    let ghost = Ghost::spawn(&mut rng, 0.0);

    assert_eq!(ghost.position(), GHOST_HOME);
    assert_eq!(ghost.motion, Motion::Grounded);
    assert_eq!(ghost.scale, Vec2::ONE);
    assert_that(&ghost.hover_speed).is_greater_than_or_equal_to(0.8);
    assert_that(&ghost.hover_speed).is_less_than(1.3);
}

#[test]
fn test_grounded_ghost_hovers_with_zero_velocity() {
    let mut ghost = grounded_ghost();

    for frame in 1..=400 {
        ghost.update(&clock_at(frame));

        assert_that(&ghost.is_grounded()).is_true();
        assert_eq!(ghost.velocity(), 0.0);
        let hover = ghost.y - ghost.base_y;
        assert_that(&hover).is_greater_than_or_equal_to(-2.0);
        assert_that(&hover).is_less_than_or_equal_to(2.0);
        assert_that(&(hover - ghost.hover_offset(frame)).abs()).is_less_than(1e-4);
    }
}

#[test]
fn test_hover_uses_degrees() {
    let ghost = Ghost::new(GHOST_HOME, 1.25, 0.0);
    // 90 frames * 1.25 * 0.8 = 90 degrees, the crest of the hover
    assert_that(&(ghost.hover_offset(90) - 2.0).abs()).is_less_than(1e-5);
    assert_that(&ghost.hover_offset(0).abs()).is_less_than(1e-6);
}

#[test]
fn test_jump_from_ground() {
    let ghost = grounded_ghost().jump();

    assert_eq!(ghost.motion, Motion::Airborne { velocity: -15.0 });
    assert_eq!(ghost.y, ghost.base_y);
}

#[test]
fn test_mid_air_jump_while_rising_fast_is_ignored() {
    let ghost = airborne_ghost(50.0, -15.0);
    assert_eq!(ghost.jump(), ghost);

    let ghost = airborne_ghost(50.0, -5.0);
    assert_eq!(ghost.jump().velocity(), -5.0);
}

#[test]
fn test_mid_air_jump_adds_half_impulse() {
    let slow = airborne_ghost(50.0, -4.0).jump();
    assert_eq!(slow.velocity(), -11.5);

    let falling = airborne_ghost(50.0, 3.0).jump();
    assert_eq!(falling.velocity(), -4.5);
}

#[test]
fn test_repeated_jumps_cannot_exceed_threshold_band() {
    let mut ghost = airborne_ghost(50.0, 2.0);
    for _ in 0..20 {
        ghost = ghost.jump();
    }

    // 2.0 -> -5.5, then further requests are ignored
    assert_eq!(ghost.velocity(), -5.5);
}

#[test]
fn test_gravity_is_damped() {
    let ghost = airborne_ghost(100.0, -10.0).tick(&clock_at(1));

    assert_that(&(ghost.velocity() - (-10.0 + 0.882)).abs()).is_less_than(1e-5);
    assert_that(&(ghost.y - (GHOST_HOME.y - 100.0 - 9.118)).abs()).is_less_than(1e-3);
}

#[test]
fn test_landing_snaps_to_rest_on_same_update() {
    let ghost = airborne_ghost(0.5, 1.0).tick(&clock_at(1));

    assert_eq!(ghost.motion, Motion::Grounded);
    assert_eq!(ghost.y, ghost.base_y);
    assert_eq!(ghost.velocity(), 0.0);
}

#[test]
fn test_land_resets_motion() {
    let ghost = airborne_ghost(30.0, 4.0).land();

    assert_eq!(ghost.motion, Motion::Grounded);
    assert_eq!(ghost.y, GHOST_HOME.y);
}

#[test]
fn test_auto_jump_waits_for_interval() {
    let ghost = grounded_ghost();

    let at_interval = ghost.tick(&FrameClock::new(1, 1500.0));
    assert_that(&at_interval.is_grounded()).is_true();
    assert_eq!(at_interval.last_auto_jump_ms, 0.0);

    let past_interval = ghost.tick(&FrameClock::new(1, 1500.5));
    assert_eq!(past_interval.motion, Motion::Airborne { velocity: -15.0 });
    assert_eq!(past_interval.last_auto_jump_ms, 1500.5);
}

#[test]
fn test_auto_jump_timer_resets_while_airborne() {
    let ghost = airborne_ghost(100.0, -10.0).tick(&FrameClock::new(1, 2000.0));

    assert_eq!(ghost.last_auto_jump_ms, 2000.0);
    // Only gravity changed the velocity
    assert_that(&(ghost.velocity() - -9.118).abs()).is_less_than(1e-4);
}

#[test]
fn test_full_jump_returns_to_ground() {
    let mut ghost = grounded_ghost().jump();
    let mut peak: f32 = 0.0;
    let mut landed_on = None;

    for frame in 1..=60 {
        ghost.update(&clock_at(frame));
        assert_that(&ghost.y).is_less_than_or_equal_to(ghost.base_y + 2.0);
        peak = peak.max(ghost.base_y - ghost.y);

        if ghost.is_grounded() {
            landed_on = Some(frame);
            break;
        }
    }

    assert_eq!(landed_on, Some(34));
    assert_eq!(ghost.y, ghost.base_y);
    assert_that(&(peak - 120.054).abs()).is_less_than(0.05);
}

#[test]
fn test_airborne_stretch() {
    let rising = airborne_ghost(50.0, -15.0).tick(&clock_at(1));
    assert_that(&rising.scale.y).is_greater_than(1.0);
    assert_that(&rising.scale.x).is_less_than(1.0);
    assert_that(&(rising.scale.x * rising.scale.y - 1.0).abs()).is_less_than(1e-5);

    // Falling at the same speed stretches less
    let falling = airborne_ghost(150.0, 13.236).tick(&clock_at(1));
    assert_that(&falling.scale.y).is_greater_than(1.0);
    assert_that(&falling.scale.y).is_less_than(rising.scale.y);
}

#[test]
fn test_stretch_saturates() {
    let ghost = airborne_ghost(300.0, -40.0).tick(&clock_at(1));
    assert_that(&(ghost.scale.y - 1.35).abs()).is_less_than(1e-5);
}

#[test]
fn test_grounded_squash_pulse() {
    let ghost = grounded_ghost().tick(&clock_at(8));
    let squash = 1.0 - 0.08 * 80f32.to_radians().sin();

    assert_that(&(ghost.scale.y - squash).abs()).is_less_than(1e-5);
    assert_that(&(ghost.scale.x * ghost.scale.y - 1.0).abs()).is_less_than(1e-5);
}

#[test]
fn test_scale_eases_back_to_neutral() {
    let mut ghost = Ghost {
        scale: Vec2::new(0.8, 1.25),
        ..grounded_ghost()
    };

    ghost.update(&clock_at(1));
    assert_that(&(ghost.scale.y - (1.25 - 0.25 * 0.12)).abs()).is_less_than(1e-5);

    for frame in 2..8 {
        ghost.update(&clock_at(frame));
    }
    assert_that(&(ghost.scale.y - 1.0)).is_less_than(0.25);
    assert_that(&(ghost.scale.y - 1.0)).is_greater_than(0.0);
}

#[test]
fn test_pupils_stay_within_bound() {
    let ghosts = [grounded_ghost(), airborne_ghost(150.0, -8.0).tick(&clock_at(3))];
    let size = CANVAS_SIZE.as_vec2();
    let pointers = [
        Vec2::ZERO,
        size,
        Vec2::new(size.x, 0.0),
        Vec2::new(0.0, size.y),
        Vec2::new(-10_000.0, 10_000.0),
        GHOST_HOME,
    ];

    for ghost in ghosts {
        for pointer in pointers {
            let gaze = ghost.gaze_target(pointer);
            for eye in Ghost::eye_centers() {
                let offset = Ghost::pupil_offset(eye, gaze);
                assert_that(&offset.x.abs()).is_less_than_or_equal_to(PUPIL_BOUND + 1e-5);
                assert_that(&offset.y.abs()).is_less_than_or_equal_to(PUPIL_BOUND + 1e-5);
            }
        }
    }
}

#[test]
fn test_pupil_follows_nearby_pointer() {
    let eye = Vec2::new(26.0, -12.0);
    let offset = Ghost::pupil_offset(eye, eye + Vec2::new(2.0, -4.0));

    assert_that(&(offset - Vec2::new(0.9, -1.8)).length()).is_less_than(1e-5);
}

#[test]
fn test_shadow_shrinks_and_fades_with_height() {
    let (grounded_size, grounded_alpha) = grounded_ghost().shadow();
    assert_eq!(grounded_size, Vec2::new(140.0, 18.0));
    assert_eq!(grounded_alpha, 130);

    let (high_size, high_alpha) = airborne_ghost(250.0, 0.0).shadow();
    assert_eq!(high_alpha, 40);
    assert_that(&(high_size.x - 175.0).abs()).is_less_than(1e-4);
    assert_that(&(high_size.y - 3.6).abs()).is_less_than(1e-4);
}

#[test]
fn test_body_outline_is_head_then_tail() {
    let outline = Ghost::body_outline();

    // 31 head points from 180 to 360 degrees, 7 tail points
    assert_eq!(outline.len(), 38);
    assert_that(&(outline[0] - Vec2::new(-70.0, -10.0)).length()).is_less_than(1e-3);
    assert_that(&(outline[30] - Vec2::new(70.0, -10.0)).length()).is_less_than(1e-3);
    assert_that(&(outline[31].x - 70.0).abs()).is_less_than(1e-4);
    assert_that(&(outline[37].x - -70.0).abs()).is_less_than(1e-4);
    // The head's apex sits at the top of the body
    assert_that(&(outline[15].y - -70.0).abs()).is_less_than(1e-3);
}
