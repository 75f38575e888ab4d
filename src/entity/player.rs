use glam::Vec2;

use crate::asset::Image;
use crate::constants::{CANVAS_SIZE, PLAYER_BASE_SPEED, PLAYER_START, SHIP_SIZE};
use crate::entity::collision::{Aabb, Collidable};
use crate::entity::direction::Direction;
use crate::entity::Entity;
use crate::error::GameResult;
use crate::render::Surface;

/// The ship steered by the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2,
    /// Speed in pixels per second.
    pub velocity: f32,
    pub direction: Direction,
    /// Angle the ship faces, one of 0, 90, 180 or 270.
    pub angle: f64,
    /// Accumulated rotation applied to the sprite.
    pub sprite_rotation: f64,
    pub moving: bool,
    bounds: Aabb,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_START)
    }
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: PLAYER_BASE_SPEED,
            direction: Direction::Up,
            angle: 0.0,
            sprite_rotation: 0.0,
            moving: false,
            bounds: Aabb::new(position, SHIP_SIZE.as_vec2()),
        }
    }

    pub fn size(&self) -> Vec2 {
        SHIP_SIZE.as_vec2()
    }

    /// Turns the ship to face `new_angle`.
    ///
    /// The sprite is rotated by the difference from the previous angle, so rotation
    /// builds up over the life of the ship rather than snapping to a canonical pose.
    pub fn set_angle(&mut self, new_angle: f64) {
        let rotation = new_angle - self.angle;
        self.angle = new_angle;
        self.sprite_rotation += rotation;
    }

    /// Moves the ship along its current direction and keeps it on the canvas.
    pub fn advance(&mut self, dt: f32) {
        self.position += self.direction.as_vec2() * self.velocity * dt;

        let max = CANVAS_SIZE.as_vec2() - self.size();
        self.position = self.position.clamp(Vec2::ZERO, max);
    }
}

impl Entity for Player {
    fn update(&mut self, dt: f32) {
        if self.moving {
            self.advance(dt);
        }
        self.bounds = Aabb::new(self.position, self.size());
    }

    fn render(&self, surface: &mut dyn Surface) -> GameResult<()> {
        surface.draw_image(Image::Ship, self.position, self.sprite_rotation)
    }
}

impl Collidable for Player {
    fn bounding_box(&self) -> Aabb {
        self.bounds
    }
}
