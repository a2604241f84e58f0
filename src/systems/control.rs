use bevy_ecs::{
    event::EventReader,
    resource::Resource,
    system::{Query, ResMut},
};
use tracing::{info, trace};

use crate::{
    events::{GameCommand, GameEvent},
    ghost::Ghost,
};

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GlobalState {
    pub exit: bool,
}

/// Whether the animation is frozen. Drawing continues while paused.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PauseState {
    pub paused: bool,
}

impl PauseState {
    pub fn active(&self) -> bool {
        self.paused
    }
}

/// Applies queued commands: jump requests, pausing and exit.
pub fn command_system(
    mut events: EventReader<GameEvent>,
    mut state: ResMut<GlobalState>,
    mut pause: ResMut<PauseState>,
    mut ghosts: Query<&mut Ghost>,
) {
    for event in events.read() {
        let GameEvent::Command(command) = *event;
        match command {
            GameCommand::Jump => {
                // A frozen ghost ignores jumps instead of queueing them
                if pause.active() {
                    trace!("Jump ignored while paused");
                    continue;
                }
                for mut ghost in ghosts.iter_mut() {
                    *ghost = ghost.jump();
                }
            }
            GameCommand::TogglePause => {
                pause.paused = !pause.paused;
                info!("{}", if pause.paused { "Paused" } else { "Unpaused" });
            }
            GameCommand::Exit => {
                info!("Exit requested. Exiting...");
                state.exit = true;
            }
        }
    }
}
