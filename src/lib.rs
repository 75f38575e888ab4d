//! Astronaut Rescue game library crate.

pub mod app;
pub mod asset;
pub mod audio;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod game;
pub mod input;
pub mod platform;
pub mod render;
pub mod runtime;
