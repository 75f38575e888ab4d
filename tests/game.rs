use std::time::Duration;

use astronaut_rescue::asset::Sound;
use astronaut_rescue::entity::direction::Direction;
use astronaut_rescue::entity::Player;
use astronaut_rescue::game::{GameState, Phase};
use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

mod common;

use common::{clock, quiet_state, seed_with_clear_respawn};

fn assert_spawn_area(position: Vec2) {
    assert_that(&position.x).is_greater_than_or_equal_to(50.0);
    assert_that(&position.x).is_less_than_or_equal_to(1250.0);
    assert_that(&position.y).is_greater_than_or_equal_to(50.0);
    assert_that(&position.y).is_less_than_or_equal_to(670.0);
}

#[test]
fn test_initial_state() {
    let state = GameState::with_seed(3);
    assert_eq!(state.score, 0);
    assert_eq!(state.player.position, Vec2::new(640.0, 360.0));
    assert_eq!(state.player.velocity, 200.0);
    assert!(!state.player.moving);
    assert!(state.in_bounds());
    assert_eq!(state.phase(), Phase::Playing);
    assert!(state.score_text.visible);
    assert!(!state.death_text.visible);
    assert_eq!(state.explosion.position, Vec2::new(-50.0, -50.0));
    assert_spawn_area(state.collectible.position);
}

#[test]
fn test_moving_up_scenario() {
    let mut state = quiet_state();
    let mut clock = clock();

    assert_eq!(state.steer(Direction::Up), Sound::DirectionChange);
    let tick = state.update(0.1, &mut clock);

    assert_eq!(state.player.position, Vec2::new(640.0, 340.0));
    assert_eq!(state.score, 0);
    assert_that(&tick.cues.to_vec()).is_empty();
    assert_eq!(state.score_text.text, "Score: 0");
}

#[test]
fn test_each_direction_moves_one_axis_by_velocity_times_dt() {
    for direction in Direction::iter() {
        let mut state = quiet_state();
        state.steer(direction);
        state.update(0.25, &mut clock());

        let expected = Vec2::new(640.0, 360.0) + direction.as_vec2() * 200.0 * 0.25;
        assert_eq!(state.player.position, expected, "{direction:?}");
    }
}

#[test]
fn test_zero_dt_does_not_move() {
    let mut state = quiet_state();
    state.steer(Direction::Left);
    state.update(0.0, &mut clock());
    assert_eq!(state.player.position, Vec2::new(640.0, 360.0));
}

#[test]
fn test_movement_is_clamped_to_canvas() {
    let mut state = quiet_state();
    state.steer(Direction::Right);
    state.update(10.0, &mut clock());
    assert_eq!(state.player.position, Vec2::new(1230.0, 360.0));
}

#[test]
fn test_steer_sets_facing() {
    let mut state = quiet_state();
    state.steer(Direction::Right);
    assert_eq!(state.player.direction, Direction::Right);
    assert_eq!(state.player.angle, 90.0);
    assert!(state.player.moving);

    state.steer(Direction::Left);
    assert_eq!(state.player.angle, 270.0);
    assert_eq!(state.player.sprite_rotation, 270.0);
}

#[test]
fn test_collecting_scenario() {
    let mut state = GameState::with_seed(11);
    state.collectible.place(state.player.position);
    let before = state.collectible.position;

    let tick = state.update(0.016, &mut clock());

    assert_eq!(state.score, 100);
    assert_eq!(state.player.velocity, 230.0);
    assert_eq!(tick.cues.to_vec(), vec![Sound::Collect]);
    assert_eq!(state.score_text.text, "Score: 100");
    assert_spawn_area(state.collectible.position);
    assert_ne!(state.collectible.position, before);
}

#[test]
fn test_repeated_collections_accumulate() {
    let mut state = GameState::with_seed(5);
    for round in 1..=4u32 {
        state.collectible.place(state.player.position + Vec2::new(10.0, 10.0));
        state.update(0.0, &mut clock());
        assert_eq!(state.score, 100 * round);
        assert_eq!(state.player.velocity, 200.0 + 30.0 * round as f32);
    }
}

#[test]
fn test_touching_edge_is_not_a_collision() {
    let mut state = quiet_state();
    state.collectible.place(state.player.position + Vec2::new(50.0, 0.0));
    state.update(0.0, &mut clock());
    assert_eq!(state.score, 0);
}

#[test]
fn test_collectible_spins_while_playing() {
    let mut state = quiet_state();
    let angle = state.collectible.angle;
    state.update(2.0, &mut clock());
    assert_eq!(state.collectible.angle, angle + 10.0);
}

#[test]
fn test_death_transition_and_reset() {
    let mut state = GameState::with_seed(seed_with_clear_respawn());
    state.collectible.place(Vec2::new(60.0, 60.0));
    let mut clock = clock();

    // Fly into the top wall; the clamp parks the ship at y = 0.
    state.steer(Direction::Up);
    state.update(5.0, &mut clock);
    assert_eq!(state.player.position, Vec2::new(640.0, 0.0));
    assert!(state.in_bounds());
    assert!(!state.death_text.visible);

    // The next frame finds the ship outside the inset bounds.
    let tick = state.update(0.016, &mut clock);
    assert!(!state.in_bounds());
    assert_eq!(state.phase(), Phase::Dying);
    assert!(state.death_text.visible);
    assert_eq!(state.explosion.position, Vec2::new(640.0, 0.0));
    assert!(!state.player.moving);
    assert_eq!(tick.cues.to_vec(), vec![Sound::Explosion]);
    assert!(!tick.reset);
    assert_that(&clock.paused).is_empty();

    // The frame after that pauses for two seconds and starts over.
    let tick = state.update(0.016, &mut clock);
    assert!(tick.reset);
    assert_eq!(clock.total(), Duration::from_secs(2));
    assert_eq!(state.score, 0);
    assert_eq!(state.player.position, Vec2::new(640.0, 360.0));
    assert_eq!(state.player.velocity, 200.0);
    assert!(!state.death_text.visible);
    assert_eq!(state.explosion.position, Vec2::new(-50.0, -50.0));
    assert_eq!(state.phase(), Phase::Playing);
    assert!(state.in_bounds());
    assert_spawn_area(state.collectible.position);
}

#[test]
fn test_death_frame_skips_movement_and_collection() {
    let mut state = quiet_state();
    state.player = Player::new(Vec2::new(0.0, 300.0));
    state.player.moving = true;
    state.collectible.place(Vec2::new(10.0, 300.0));

    state.update(1.0, &mut clock());

    assert_eq!(state.player.position, Vec2::new(0.0, 300.0));
    assert_eq!(state.score, 0);
    assert_eq!(state.phase(), Phase::Dying);
}

#[test]
fn test_reset_discards_progress() {
    let mut state = GameState::with_seed(9);
    state.collectible.place(state.player.position);
    state.update(0.0, &mut clock());
    state.steer(Direction::Down);
    assert_eq!(state.score, 100);

    state.reset();

    assert_eq!(state.score, 0);
    assert_eq!(state.player.velocity, 200.0);
    assert_eq!(state.player.direction, Direction::Up);
    assert_eq!(state.player.angle, 0.0);
    assert!(!state.player.moving);
    assert_eq!(state.score_text.text, "");
    assert_spawn_area(state.collectible.position);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let a = GameState::with_seed(1234);
    let b = GameState::with_seed(1234);
    assert_eq!(a.collectible.position, b.collectible.position);
    assert_eq!(a.collectible.angle, b.collectible.angle);
}
