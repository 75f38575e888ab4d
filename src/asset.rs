//! Logical asset names and their on-disk locations.
//!
//! Assets are read from an asset root directory at startup; the core only ever refers to
//! them by the names defined here.

use std::path::{Path, PathBuf};

use glam::UVec2;
use strum_macros::EnumIter;

use crate::constants::{ASTRONAUT_SIZE, SHIP_SIZE};
use crate::error::AssetError;

/// The images drawn by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Image {
    Ship,
    Astronaut,
    Background,
    Explosion,
}

impl Image {
    /// The fixed size this image is scaled to, or `None` to draw it at its native size.
    pub fn scaled_size(self) -> Option<UVec2> {
        match self {
            Image::Ship => Some(SHIP_SIZE),
            Image::Astronaut => Some(ASTRONAUT_SIZE),
            Image::Background | Image::Explosion => None,
        }
    }
}

/// Sound effects, both looping and one-shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Sound {
    Engine,
    Collect,
    DirectionChange,
    Explosion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Image(Image),
    Sound(Sound),
    BackgroundMusic,
    Font,
}

impl Asset {
    /// Path of the asset relative to the asset root.
    pub fn path(&self) -> &'static str {
        match self {
            Asset::Image(Image::Ship) => "gfx/ship.png",
            Asset::Image(Image::Astronaut) => "gfx/astronaut.png",
            Asset::Image(Image::Background) => "gfx/background.png",
            Asset::Image(Image::Explosion) => "gfx/explosion.png",
            Asset::Sound(Sound::Engine) => "sfx/ship.wav",
            Asset::Sound(Sound::Collect) => "sfx/collect.mp3",
            Asset::Sound(Sound::DirectionChange) => "sfx/ship_change-direction.mp3",
            Asset::Sound(Sound::Explosion) => "sfx/explosion.mp3",
            Asset::BackgroundMusic => "sfx/background.wav",
            Asset::Font => "fonts/font.ttf",
        }
    }

    /// Resolves the asset against `root`, failing if the file is missing.
    pub fn locate(&self, root: &Path) -> Result<PathBuf, AssetError> {
        let path = root.join(self.path());
        if path.is_file() {
            Ok(path)
        } else {
            Err(AssetError::NotFound(path))
        }
    }
}

impl From<Image> for Asset {
    fn from(image: Image) -> Self {
        Asset::Image(image)
    }
}

impl From<Sound> for Asset {
    fn from(sound: Sound) -> Self {
        Asset::Sound(sound)
    }
}
