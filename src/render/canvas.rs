//! SDL2 canvas backend for [`Surface`].

use std::collections::HashMap;
use std::path::Path;

use glam::{UVec2, Vec2};
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};
use strum::IntoEnumIterator;
use tracing::{debug, trace};

use crate::asset::{Asset, Image};
use crate::constants::FONT_SIZE;
use crate::error::{GameError, GameResult, TextureError};
use crate::render::Surface;

/// Rendered strings kept around before the cache is flushed.
const TEXT_CACHE_LIMIT: usize = 16;

struct LoadedImage {
    texture: Texture,
    size: UVec2,
}

/// Draws onto the game window.
///
/// Owns every image texture, the overlay font, and a cache of rendered text so the score
/// readout is only rasterized when it changes.
pub struct CanvasSurface {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    images: HashMap<Image, LoadedImage>,
    font: Font<'static, 'static>,
    text_cache: HashMap<String, LoadedImage>,
}

impl CanvasSurface {
    /// Loads every [`Image`] and the overlay font from `asset_root`.
    pub fn new(canvas: Canvas<Window>, ttf: &'static Sdl2TtfContext, asset_root: &Path) -> GameResult<Self> {
        let texture_creator = canvas.texture_creator();

        let mut images = HashMap::new();
        for image in Image::iter() {
            let path = Asset::from(image).locate(asset_root)?;
            let texture = texture_creator
                .load_texture(&path)
                .map_err(|e| TextureError::LoadFailed(format!("{}: {e}", path.display())))?;
            let query = texture.query();
            let size = image.scaled_size().unwrap_or(UVec2::new(query.width, query.height));
            debug!(?image, width = size.x, height = size.y, "Loaded image");
            images.insert(image, LoadedImage { texture, size });
        }

        let font_path = Asset::Font.locate(asset_root)?;
        let font = ttf
            .load_font(&font_path, FONT_SIZE)
            .map_err(|e| TextureError::LoadFailed(format!("{}: {e}", font_path.display())))?;

        Ok(Self {
            canvas,
            texture_creator,
            images,
            font,
            text_cache: HashMap::new(),
        })
    }

    fn rasterize(&mut self, text: &str) -> GameResult<()> {
        if self.text_cache.len() >= TEXT_CACHE_LIMIT {
            trace!(entries = self.text_cache.len(), "Flushing text cache");
            for (_, entry) in self.text_cache.drain() {
                // SAFETY: the texture creator and renderer outlive every cached texture.
                unsafe { entry.texture.destroy() };
            }
        }

        let surface = self
            .font
            .render(text)
            .blended(Color::WHITE)
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
        let texture = self
            .texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
        let size = UVec2::new(surface.width(), surface.height());
        self.text_cache.insert(text.to_string(), LoadedImage { texture, size });
        Ok(())
    }
}

impl Drop for CanvasSurface {
    fn drop(&mut self) {
        let textures = self.images.drain().map(|(_, loaded)| loaded.texture).chain(self.text_cache.drain().map(|(_, loaded)| loaded.texture));
        for texture in textures {
            // SAFETY: the renderer is still alive; it is dropped after this runs.
            unsafe { texture.destroy() };
        }
    }
}

fn dest_rect(position: Vec2, size: UVec2) -> Rect {
    Rect::new(position.x as i32, position.y as i32, size.x, size.y)
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    fn draw_image(&mut self, image: Image, position: Vec2, angle: f64) -> GameResult<()> {
        let loaded = self
            .images
            .get(&image)
            .ok_or_else(|| TextureError::NotLoaded(format!("{image:?}")))?;
        self.canvas
            .copy_ex(&loaded.texture, None, dest_rect(position, loaded.size), angle, None, false, false)
            .map_err(|e| GameError::Texture(TextureError::RenderFailed(e)))
    }

    fn draw_text(&mut self, text: &str, position: Vec2) -> GameResult<()> {
        if !self.text_cache.contains_key(text) {
            self.rasterize(text)?;
        }

        let rendered = self
            .text_cache
            .get(text)
            .ok_or_else(|| TextureError::NotLoaded(text.to_string()))?;
        self.canvas
            .copy(&rendered.texture, None, dest_rect(position, rendered.size))
            .map_err(|e| GameError::Texture(TextureError::RenderFailed(e)))
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
