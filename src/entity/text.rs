use glam::Vec2;

use crate::entity::Entity;
use crate::error::GameResult;
use crate::render::Surface;

/// A line of text drawn over the playfield.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    pub position: Vec2,
    pub text: String,
    pub visible: bool,
}

impl TextOverlay {
    pub fn new(position: Vec2, text: impl Into<String>, visible: bool) -> Self {
        Self {
            position,
            text: text.into(),
            visible,
        }
    }
}

impl Entity for TextOverlay {
    fn render(&self, surface: &mut dyn Surface) -> GameResult<()> {
        if self.visible && !self.text.is_empty() {
            surface.draw_text(&self.text, self.position)?;
        }
        Ok(())
    }
}
