//! Translates raw window events into game commands.

use std::collections::HashMap;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::entity::direction::Direction;

/// The subset of window events the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
}

impl InputEvent {
    /// Converts an SDL event, dropping everything that is neither a quit nor a fresh key press.
    ///
    /// Auto-repeated key presses are dropped as well.
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => Some(InputEvent::KeyDown(*key)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MovePlayer(Direction),
    Exit,
}

#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        key_bindings.insert(Keycode::Up, GameCommand::MovePlayer(Direction::Up));
        key_bindings.insert(Keycode::Down, GameCommand::MovePlayer(Direction::Down));
        key_bindings.insert(Keycode::Left, GameCommand::MovePlayer(Direction::Left));
        key_bindings.insert(Keycode::Right, GameCommand::MovePlayer(Direction::Right));

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn command(&self, event: InputEvent) -> Option<GameCommand> {
        match event {
            InputEvent::Quit => Some(GameCommand::Exit),
            InputEvent::KeyDown(key) => self.key_bindings.get(&key).copied(),
        }
    }
}
