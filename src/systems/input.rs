use std::collections::HashMap;

use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use glam::Vec2;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
    mouse::MouseButton,
    EventPump,
};
use tracing::{debug, trace};

use crate::{
    constants::CANVAS_SIZE,
    events::{GameCommand, GameEvent},
};

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        key_bindings.insert(Keycode::Space, GameCommand::Jump);
        key_bindings.insert(Keycode::Up, GameCommand::Jump);
        key_bindings.insert(Keycode::W, GameCommand::Jump);

        key_bindings.insert(Keycode::P, GameCommand::TogglePause);
        key_bindings.insert(Keycode::Escape, GameCommand::Exit);
        key_bindings.insert(Keycode::Q, GameCommand::Exit);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn command(&self, key: Keycode) -> Option<GameCommand> {
        self.key_bindings.get(&key).copied()
    }
}

/// Last known pointer position in logical canvas units.
///
/// Starts at the canvas origin until the pointer first moves.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct CursorPosition(pub Vec2);

impl CursorPosition {
    /// Stores a pointer position, clamped into the canvas.
    pub fn set_clamped(&mut self, position: Vec2) {
        self.0 = position.clamp(Vec2::ZERO, CANVAS_SIZE.as_vec2());
    }
}

/// Whether the window has input focus, used to pick how the frame limiter sleeps.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFocus(pub bool);

impl Default for WindowFocus {
    fn default() -> Self {
        Self(true)
    }
}

/// Drains the SDL event pump, turning input into commands and pointer updates.
pub fn input_system(
    bindings: Res<Bindings>,
    mut writer: EventWriter<GameEvent>,
    mut pump: NonSendMut<EventPump>,
    mut cursor: ResMut<CursorPosition>,
    mut focus: ResMut<WindowFocus>,
) {
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                writer.write(GameCommand::Exit.into());
            }
            Event::MouseMotion { x, y, .. } => {
                cursor.set_clamped(Vec2::new(x as f32, y as f32));
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                ..
            } => {
                writer.write(GameCommand::Jump.into());
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(command) = bindings.command(key) {
                    trace!(?key, command = <&'static str>::from(command), "Key bound to command");
                    writer.write(command.into());
                }
            }
            Event::Window { win_event, .. } => match win_event {
                WindowEvent::FocusGained => {
                    debug!("Window focus gained");
                    focus.0 = true;
                }
                WindowEvent::FocusLost => {
                    debug!("Window focus lost");
                    focus.0 = false;
                }
                _ => {}
            },
            _ => {}
        }
    }
}
