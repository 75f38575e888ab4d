//! Game objects and their per-frame behavior.

use crate::error::GameResult;
use crate::render::Surface;

pub mod collectible;
pub mod collision;
pub mod direction;
pub mod explosion;
pub mod player;
pub mod text;

pub use collectible::Collectible;
pub use explosion::Explosion;
pub use player::Player;
pub use text::TextOverlay;

/// Shared capabilities of everything that appears on screen.
pub trait Entity {
    /// Advances the entity by `dt` seconds.
    fn update(&mut self, _dt: f32) {}

    /// Draws the entity. Must not change any state.
    fn render(&self, surface: &mut dyn Surface) -> GameResult<()>;
}
