use std::time::Instant;

use tracing::{error, info, trace};

use crate::audio::Audio;
use crate::config::Options;
use crate::error::GameResult;
use crate::formatter;
use crate::game::{Game, GameState, SystemClock};
use crate::render::CanvasSurface;
use crate::runtime::Runtime;

/// The game loop: polls input, advances the game, plays cues and draws, once per frame.
///
/// The loop is uncapped; movement is scaled by the measured time between frames.
pub struct App {
    pub game: Game,
    surface: CanvasSurface,
    audio: Audio,
    runtime: Runtime,
    last_tick: Instant,
}

impl App {
    /// Builds the window, loads every asset and starts the looping audio.
    ///
    /// # Errors
    ///
    /// Fails if the window cannot be created or any asset is missing or unreadable.
    pub fn new(runtime: Runtime, options: &Options) -> GameResult<Self> {
        let canvas = runtime.create_canvas()?;

        info!(asset_root = %options.asset_root.display(), "Loading assets");
        let surface = CanvasSurface::new(canvas, runtime.ttf(), &options.asset_root)?;

        let mut audio = Audio::new(&options.asset_root)?;
        audio.set_mute(options.muted);
        audio.start_loops()?;
        info!(muted = audio.is_muted(), "Audio started");

        let state = match options.seed {
            Some(seed) => GameState::with_seed(seed),
            None => GameState::new(),
        };
        let game = Game::new(state, Box::new(SystemClock));

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            surface,
            audio,
            runtime,
            last_tick: Instant::now(),
        })
    }

    /// Executes a single frame.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if a quit was requested.
    pub fn run(&mut self) -> bool {
        if self.game.accepts_input() {
            let events = self.runtime.poll_events();
            for cue in self.game.handle_input(events) {
                self.audio.play(cue);
            }
            if self.game.exit_requested() {
                return false;
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        formatter::increment_frame();

        let tick = self.game.tick(dt);
        for cue in tick.cues {
            self.audio.play(cue);
        }
        if tick.reset {
            // Keep the death pause out of the next frame's delta.
            trace!("Restarting frame timer after reset");
            self.last_tick = Instant::now();
        }

        if let Err(e) = self.game.state.render(&mut self.surface) {
            error!("Failed to draw frame: {e}");
        }

        true
    }

    /// Releases the window, audio and finally SDL itself.
    pub fn shutdown(self) {
        let App {
            surface, audio, runtime, ..
        } = self;
        drop(surface);
        drop(audio);
        runtime.shutdown();
    }
}
