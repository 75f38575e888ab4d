use glam::Vec2;
use rand::Rng;

use crate::asset::Image;
use crate::constants::{ASTRONAUT_SIZE, COLLECTIBLE_SPIN_RATE, COLLECTIBLE_START, SPAWN_X_RANGE, SPAWN_Y_RANGE};
use crate::entity::collision::{Aabb, Collidable};
use crate::entity::Entity;
use crate::error::GameResult;
use crate::render::Surface;

/// The drifting astronaut the player picks up.
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub position: Vec2,
    /// Spin in degrees; grows without bound, only its visual effect wraps.
    pub angle: f64,
    bounds: Aabb,
}

impl Default for Collectible {
    fn default() -> Self {
        Self::new(COLLECTIBLE_START)
    }
}

impl Collectible {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            angle: 0.0,
            bounds: Aabb::new(position, ASTRONAUT_SIZE.as_vec2()),
        }
    }

    /// Moves to `position` and refreshes the bounding box.
    pub fn place(&mut self, position: Vec2) {
        self.position = position;
        self.bounds = Aabb::new(position, ASTRONAUT_SIZE.as_vec2());
    }

    /// Drops the astronaut somewhere inside the spawn area with a fresh random spin.
    pub fn randomize_position<R: Rng>(&mut self, rng: &mut R) {
        let x = rng.random_range(SPAWN_X_RANGE.0..=SPAWN_X_RANGE.1);
        let y = rng.random_range(SPAWN_Y_RANGE.0..=SPAWN_Y_RANGE.1);
        self.place(Vec2::new(x as f32, y as f32));
        self.angle = rng.random_range(0..=360) as f64;
    }
}

impl Entity for Collectible {
    fn update(&mut self, dt: f32) {
        self.angle += COLLECTIBLE_SPIN_RATE * dt as f64;
    }

    fn render(&self, surface: &mut dyn Surface) -> GameResult<()> {
        // The spin is counter-clockwise; surfaces rotate clockwise.
        surface.draw_image(Image::Astronaut, self.position, -self.angle)
    }
}

impl Collidable for Collectible {
    fn bounding_box(&self) -> Aabb {
        self.bounds
    }
}
