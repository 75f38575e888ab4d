use astronaut_rescue::asset::Sound;
use astronaut_rescue::entity::direction::Direction;
use astronaut_rescue::entity::Player;
use astronaut_rescue::game::{Game, ManualClock};
use astronaut_rescue::input::InputEvent;
use glam::Vec2;
use pretty_assertions::assert_eq;
use sdl2::keyboard::Keycode;
use speculoos::prelude::*;

mod common;

use common::quiet_state;

fn game() -> Game {
    Game::new(quiet_state(), Box::new(ManualClock::default()))
}

#[test]
fn test_arrow_keys_steer_and_cue() {
    let mut game = game();
    let cues = game.handle_input([InputEvent::KeyDown(Keycode::Left), InputEvent::KeyDown(Keycode::Down)]);

    assert_eq!(cues.to_vec(), vec![Sound::DirectionChange, Sound::DirectionChange]);
    assert_eq!(game.state.player.direction, Direction::Down);
    assert!(game.state.player.moving);
    assert!(!game.exit_requested());
}

#[test]
fn test_unbound_keys_do_nothing() {
    let mut game = game();
    let cues = game.handle_input([InputEvent::KeyDown(Keycode::W), InputEvent::KeyDown(Keycode::Space)]);

    assert_that(&cues.to_vec()).is_empty();
    assert!(!game.state.player.moving);
}

#[test]
fn test_quit_requests_exit() {
    let mut game = game();
    game.handle_input([InputEvent::Quit]);
    assert!(game.exit_requested());
}

#[test]
fn test_events_after_quit_still_apply() {
    let mut game = game();
    game.handle_input([InputEvent::Quit, InputEvent::KeyDown(Keycode::Right)]);
    assert!(game.exit_requested());
    assert_eq!(game.state.player.direction, Direction::Right);
}

#[test]
fn test_input_paused_during_death_frame() {
    let mut game = game();
    assert!(game.accepts_input());

    game.state.player = Player::new(Vec2::new(1240.0, 300.0));
    game.tick(0.016);
    assert!(!game.accepts_input());

    let tick = game.tick(0.016);
    assert!(tick.reset);
    assert!(game.accepts_input());
}

#[test]
fn test_tick_reports_move() {
    let mut game = game();
    game.handle_input([InputEvent::KeyDown(Keycode::Down)]);
    game.tick(0.5);
    assert_eq!(game.state.player.position, Vec2::new(640.0, 460.0));
}
