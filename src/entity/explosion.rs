use glam::Vec2;

use crate::asset::Image;
use crate::constants::EXPLOSION_PARKED;
use crate::entity::Entity;
use crate::error::GameResult;
use crate::render::Surface;

/// Marks where the ship was destroyed. Parked off-screen until then.
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    pub position: Vec2,
}

impl Default for Explosion {
    fn default() -> Self {
        Self {
            position: EXPLOSION_PARKED,
        }
    }
}

impl Entity for Explosion {
    fn render(&self, surface: &mut dyn Surface) -> GameResult<()> {
        surface.draw_image(Image::Explosion, self.position, 0.0)
    }
}
