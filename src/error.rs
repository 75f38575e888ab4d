//! Centralized error types for the game.
//!
//! Every failure here is a startup failure (a missing asset, no audio device, no window);
//! the frame loop itself only logs drawing errors and carries on.

use std::path::PathBuf;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Platform-specific errors.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

/// Errors related to texture and font operations.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadFailed(String),

    #[error("Texture was never loaded: {0}")]
    NotLoaded(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

/// Errors raised while bringing up the mixer or loading sounds.
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    #[error("Failed to open audio device: {0}")]
    Open(String),

    #[error("Failed to load {name}: {reason}")]
    Load { name: String, reason: String },

    #[error("Failed to start playback: {0}")]
    Play(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
