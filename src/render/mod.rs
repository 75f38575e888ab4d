//! Drawing abstraction shared by every entity.
//!
//! Entities never touch SDL directly; they issue calls against a [`Surface`], which the
//! game backs with an SDL2 canvas and which tests back with a recorder.

use glam::Vec2;
use sdl2::pixels::Color;

use crate::asset::Image;
use crate::error::GameResult;

pub mod canvas;

pub use canvas::CanvasSurface;

/// Something that can be drawn onto, one full frame at a time.
pub trait Surface {
    /// Fills the whole frame with a single color.
    fn clear(&mut self, color: Color);

    /// Draws `image` with its top-left corner at `position`, rotated clockwise by `angle`
    /// degrees about its center.
    fn draw_image(&mut self, image: Image, position: Vec2, angle: f64) -> GameResult<()>;

    /// Draws a line of white text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Vec2) -> GameResult<()>;

    /// Shows the finished frame.
    fn present(&mut self);
}
