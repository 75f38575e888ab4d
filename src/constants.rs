//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{UVec2, Vec2};

/// The title of the game window.
pub const WINDOW_TITLE: &str = "Astronaut Rescue";

/// The size of the canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(1280, 720);

/// The size the ship sprite is scaled to, in pixels.
pub const SHIP_SIZE: UVec2 = UVec2::new(50, 50);
/// The size the astronaut sprite is scaled to, in pixels.
pub const ASTRONAUT_SIZE: UVec2 = UVec2::new(25, 25);

/// Where the player spawns at the start of every life.
pub const PLAYER_START: Vec2 = Vec2::new(640.0, 360.0);
/// The player's speed at the start of every life, in pixels per second.
pub const PLAYER_BASE_SPEED: f32 = 200.0;
/// Speed added to the player for every astronaut collected.
pub const PLAYER_SPEED_STEP: f32 = 30.0;

/// Distance from the screen edge that the player must stay beyond to remain alive.
pub const BOUNDS_INSET: f32 = 1.0;

/// Points awarded for every astronaut collected.
pub const COLLECT_SCORE: u32 = 100;

/// Inclusive x range in which astronauts are spawned.
pub const SPAWN_X_RANGE: (u32, u32) = (50, 1250);
/// Inclusive y range in which astronauts are spawned.
pub const SPAWN_Y_RANGE: (u32, u32) = (50, 670);
/// Where the astronaut sits before its first placement.
pub const COLLECTIBLE_START: Vec2 = Vec2::new(100.0, 100.0);
/// How fast the astronaut spins, in degrees per second.
pub const COLLECTIBLE_SPIN_RATE: f64 = 5.0;

/// Where the explosion is parked while nobody has died.
pub const EXPLOSION_PARKED: Vec2 = Vec2::new(-50.0, -50.0);

/// Position of the score readout.
pub const SCORE_TEXT_POSITION: Vec2 = Vec2::new(10.0, 10.0);
/// Position of the death message.
pub const DEATH_TEXT_POSITION: Vec2 = Vec2::new(600.0, 350.0);
/// Content of the death message.
pub const DEATH_MESSAGE: &str = "You died!";
/// Point size of the overlay font.
pub const FONT_SIZE: u16 = 36;

/// How long the game stalls on the death screen before restarting.
pub const DEATH_PAUSE: Duration = Duration::from_secs(2);

/// Volume levels, as fractions of the mixer's maximum.
pub mod volume {
    pub const BACKGROUND: f32 = 0.3;
    pub const ENGINE: f32 = 0.10;
    pub const COLLECT: f32 = 0.07;
    pub const DIRECTION_CHANGE: f32 = 0.03;
    pub const EXPLOSION: f32 = 0.1;
}
