//! The ECS systems run once per frame, and the resources they share.

pub mod control;
pub mod ghost;
pub mod input;
pub mod render;

pub use self::control::*;
pub use self::ghost::*;
pub use self::input::*;
pub use self::render::*;

use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::Res;

/// Ordering of the per-frame work.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FrameSet {
    /// Polling input and applying commands
    Input,
    /// Advancing the animation; skipped while paused
    Update,
    /// Drawing and presenting the frame
    Draw,
}

/// Adds the systems that do not touch SDL: command handling and the ghost update.
///
/// The input and render systems need the window's event pump and canvas, so
/// [`crate::game::Game`] adds them separately.
pub fn add_simulation_systems(schedule: &mut Schedule) {
    schedule
        .add_systems((
            control::command_system.in_set(FrameSet::Input),
            ghost::ghost_update_system.in_set(FrameSet::Update),
        ))
        .configure_sets(
            (
                FrameSet::Input,
                FrameSet::Update.run_if(|pause: Res<PauseState>| !pause.active()),
                FrameSet::Draw,
            )
                .chain(),
        );
}
