//! Process-wide SDL2 context.

use sdl2::image::{InitFlag, Sdl2ImageContext};
use sdl2::render::Canvas;
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::Window;
use sdl2::{AudioSubsystem, EventPump, Sdl, VideoSubsystem};
use tracing::{debug, info, trace};

use crate::constants::{CANVAS_SIZE, WINDOW_TITLE};
use crate::error::{GameError, GameResult};
use crate::input::InputEvent;

/// Everything SDL needs kept alive for the duration of the program.
///
/// Acquired once with [`Runtime::init`] and released with [`Runtime::shutdown`]; the game
/// loop borrows it rather than reaching for SDL globals.
pub struct Runtime {
    _sdl_context: Sdl,
    video: VideoSubsystem,
    _audio_subsystem: AudioSubsystem,
    _image_context: Sdl2ImageContext,
    ttf: &'static Sdl2TtfContext,
    event_pump: EventPump,
}

impl Runtime {
    /// Initializes SDL and the video, audio, image and font subsystems.
    pub fn init() -> GameResult<Self> {
        info!("Initializing SDL2 runtime");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;

        debug!("Initializing SDL2 subsystems");
        let video = sdl_context.video().map_err(GameError::Sdl)?;
        let audio_subsystem = sdl_context.audio().map_err(GameError::Sdl)?;
        let image_context = sdl2::image::init(InitFlag::PNG | InitFlag::JPG).map_err(GameError::Sdl)?;
        let ttf = sdl2::ttf::init().map_err(|e| GameError::Sdl(e.to_string()))?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        Ok(Self {
            _sdl_context: sdl_context,
            video,
            _audio_subsystem: audio_subsystem,
            _image_context: image_context,
            // Fonts borrow the context for as long as the window is open.
            ttf: Box::leak(Box::new(ttf)),
            event_pump,
        })
    }

    /// Opens the game window and returns a canvas with a fixed logical size.
    pub fn create_canvas(&self) -> GameResult<Canvas<Window>> {
        trace!(width = CANVAS_SIZE.x, height = CANVAS_SIZE.y, "Creating game window");
        let window = self
            .video
            .window(WINDOW_TITLE, CANVAS_SIZE.x, CANVAS_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        Ok(canvas)
    }

    pub fn ttf(&self) -> &'static Sdl2TtfContext {
        self.ttf
    }

    /// Drains every pending window event the game cares about.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        self.event_pump.poll_iter().filter_map(|event| InputEvent::from_sdl(&event)).collect()
    }

    /// Releases SDL. Everything created from the runtime must already be dropped.
    pub fn shutdown(self) {
        info!("Shutting down SDL2 runtime");
        drop(self);
    }
}
