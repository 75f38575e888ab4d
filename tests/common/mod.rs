#![allow(dead_code)]

use astronaut_rescue::asset::Image;
use astronaut_rescue::entity::collision::Collidable;
use astronaut_rescue::error::GameResult;
use astronaut_rescue::game::{GameState, ManualClock};
use astronaut_rescue::render::Surface;
use glam::Vec2;
use sdl2::pixels::Color;

/// A single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Image { image: Image, position: Vec2, angle: f64 },
    Text { text: String, position: Vec2 },
    Present,
}

/// A surface that remembers every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_image(&mut self, image: Image, position: Vec2, angle: f64) -> GameResult<()> {
        self.commands.push(DrawCommand::Image { image, position, angle });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Vec2) -> GameResult<()> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
        });
        Ok(())
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
    }
}

/// A seeded game with the astronaut parked far from the ship's starting lane.
pub fn quiet_state() -> GameState {
    let mut state = GameState::with_seed(1);
    state.collectible.place(Vec2::new(60.0, 60.0));
    state
}

/// Finds a seed whose placement after the first reset does not overlap the ship's spawn.
pub fn seed_with_clear_respawn() -> u64 {
    (0..)
        .find(|&seed| {
            let mut twin = GameState::with_seed(seed);
            twin.reset();
            !twin.player.is_colliding_with(&twin.collectible)
        })
        .expect("some seed leaves the spawn clear")
}

pub fn clock() -> ManualClock {
    ManualClock::default()
}
