use rand::rngs::SmallRng;
use rand::SeedableRng;
use sdl2::pixels::Color;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    asset::{Image, Sound},
    constants::{
        BOUNDS_INSET, CANVAS_SIZE, COLLECT_SCORE, DEATH_MESSAGE, DEATH_PAUSE, DEATH_TEXT_POSITION, PLAYER_SPEED_STEP,
        SCORE_TEXT_POSITION,
    },
    entity::{
        collision::Collidable, direction::Direction, Collectible, Entity, Explosion, Player, TextOverlay,
    },
    error::GameResult,
    game::clock::Clock,
    platform,
    render::Surface,
};

/// The high-level phase of play.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The ship is flying and the player is in control.
    #[default]
    Playing,
    /// The ship has left the bounds; the next update pauses and restarts.
    Dying,
}

/// What happened during a single call to [`GameState::update`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Sound cues to fire, in the order they occurred.
    pub cues: SmallVec<[Sound; 4]>,
    /// True if the death pause ran and the state was rebuilt this frame.
    pub reset: bool,
}

/// The `GameState` struct holds all the essential data for the game.
///
/// It owns every entity, the score and the phase. Nothing else holds a reference to an
/// entity; the game loop mutates the state once per frame through [`GameState::update`]
/// and [`GameState::steer`].
pub struct GameState {
    pub score: u32,
    pub player: Player,
    pub collectible: Collectible,
    pub explosion: Explosion,
    pub score_text: TextOverlay,
    pub death_text: TextOverlay,
    in_bounds: bool,
    phase: Phase,
    rng: SmallRng,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game with the astronaut placed by an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_rng(&mut platform::rng()))
    }

    /// Creates a new game whose astronaut placements are fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        let mut state = Self {
            score: 0,
            player: Player::default(),
            collectible: Collectible::default(),
            explosion: Explosion::default(),
            score_text: TextOverlay::new(SCORE_TEXT_POSITION, "", true),
            death_text: TextOverlay::new(DEATH_TEXT_POSITION, DEATH_MESSAGE, false),
            in_bounds: true,
            phase: Phase::Playing,
            rng,
        };
        state.collectible.randomize_position(&mut state.rng);
        state
    }

    /// Puts every entity back to its starting state and zeroes the score.
    ///
    /// The random generator carries on from where it was, so successive lives see
    /// different placements.
    pub fn reset(&mut self) {
        self.score = 0;
        self.player = Player::default();
        self.collectible = Collectible::default();
        self.collectible.randomize_position(&mut self.rng);
        self.explosion = Explosion::default();
        self.score_text = TextOverlay::new(SCORE_TEXT_POSITION, "", true);
        self.death_text = TextOverlay::new(DEATH_TEXT_POSITION, DEATH_MESSAGE, false);
        self.in_bounds = true;
        self.phase = Phase::Playing;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the ship was inside the inset bounds at the last update.
    pub fn in_bounds(&self) -> bool {
        self.in_bounds
    }

    /// Points the ship in `direction` and sets it moving.
    ///
    /// Returns the cue to play for the change of heading.
    pub fn steer(&mut self, direction: Direction) -> Sound {
        trace!(?direction, "Steering");
        self.player.direction = direction;
        self.player.set_angle(direction.facing_angle());
        self.player.moving = true;
        Sound::DirectionChange
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// A death is detected on one frame, and the pause and reset happen at the start of the
    /// following frame, after which that frame carries on against the fresh state.
    pub fn update(&mut self, dt: f32, clock: &mut dyn Clock) -> Tick {
        let mut tick = Tick::default();

        if self.phase == Phase::Dying {
            debug!(score = self.score, pause = ?DEATH_PAUSE, "Restarting after death");
            clock.pause(DEATH_PAUSE);
            self.reset();
            tick.reset = true;
        }

        self.in_bounds = self.player.bounding_box().is_inside(CANVAS_SIZE.as_vec2(), BOUNDS_INSET);
        if self.in_bounds {
            self.player.update(dt);
            self.collectible.update(dt);

            if self.player.is_colliding_with(&self.collectible) {
                self.collect();
                tick.cues.push(Sound::Collect);
            }
        }

        self.score_text.text = format!("Score: {}", self.score);

        if !self.in_bounds {
            debug!(position = ?self.player.position, score = self.score, "Ship left the bounds");
            self.explosion.position = self.player.position;
            self.death_text.visible = true;
            self.phase = Phase::Dying;
            self.player.moving = false;
            tick.cues.push(Sound::Explosion);
        }

        tick
    }

    fn collect(&mut self) {
        self.collectible.randomize_position(&mut self.rng);
        self.player.velocity += PLAYER_SPEED_STEP;
        self.score += COLLECT_SCORE;
        debug!(
            score = self.score,
            velocity = self.player.velocity,
            next = ?self.collectible.position,
            "Astronaut collected"
        );
    }

    /// Draws the whole frame, back to front.
    pub fn render(&self, surface: &mut dyn Surface) -> GameResult<()> {
        surface.clear(Color::BLACK);
        surface.draw_image(Image::Background, glam::Vec2::ZERO, 0.0)?;

        let layers: [&dyn Entity; 5] = [
            &self.collectible,
            &self.player,
            &self.score_text,
            &self.death_text,
            &self.explosion,
        ];
        for entity in layers {
            entity.render(surface)?;
        }

        surface.present();
        Ok(())
    }
}
