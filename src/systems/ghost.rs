use bevy_ecs::system::{Query, Res};
use tracing::trace;

use crate::{clock::FrameClock, ghost::Ghost};

/// Advances every ghost by one frame of the clock.
pub fn ghost_update_system(clock: Res<FrameClock>, mut ghosts: Query<&mut Ghost>) {
    for mut ghost in ghosts.iter_mut() {
        let was_grounded = ghost.is_grounded();
        ghost.update(&clock);

        if was_grounded != ghost.is_grounded() {
            trace!(
                frame = clock.frame,
                motion = <&'static str>::from(ghost.motion),
                y = ghost.y,
                "Ghost motion changed"
            );
        }
    }
}
