//! This module contains the main game logic and state.

use smallvec::SmallVec;
use tracing::info;

use crate::asset::Sound;
use crate::input::{Bindings, GameCommand, InputEvent};

pub mod clock;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use state::{GameState, Phase, Tick};

/// The `Game` struct ties the simulation to its controls.
///
/// It owns the [`GameState`], the key bindings and the clock used for the death pause,
/// and knows nothing about windows or audio devices.
pub struct Game {
    pub state: GameState,
    bindings: Bindings,
    clock: Box<dyn Clock>,
    exit: bool,
}

impl Game {
    pub fn new(state: GameState, clock: Box<dyn Clock>) -> Self {
        Self {
            state,
            bindings: Bindings::default(),
            clock,
            exit: false,
        }
    }

    /// Input is only read while the ship is inside the bounds; events arriving during the
    /// death frame stay queued until the next one.
    pub fn accepts_input(&self) -> bool {
        self.state.in_bounds()
    }

    /// Applies a batch of input events and returns the sound cues they triggered.
    pub fn handle_input(&mut self, events: impl IntoIterator<Item = InputEvent>) -> SmallVec<[Sound; 4]> {
        let mut cues = SmallVec::new();
        for event in events {
            match self.bindings.command(event) {
                Some(GameCommand::MovePlayer(direction)) => cues.push(self.state.steer(direction)),
                Some(GameCommand::Exit) => {
                    info!("Exit requested");
                    self.exit = true;
                }
                None => {}
            }
        }
        cues
    }

    /// Advances the game by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Tick {
        self.state.update(dt, self.clock.as_mut())
    }

    pub fn exit_requested(&self) -> bool {
        self.exit
    }
}
