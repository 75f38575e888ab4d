//! This module handles the audio playback for the game.

use std::collections::HashMap;
use std::path::Path;

use sdl2::mixer::{self, Channel, Chunk, InitFlag, Music, DEFAULT_CHANNELS, DEFAULT_FORMAT, DEFAULT_FREQUENCY, MAX_VOLUME};
use strum::IntoEnumIterator;
use tracing::{debug, trace, warn};

use crate::asset::{Asset, Sound};
use crate::constants::volume;
use crate::error::{AudioError, GameResult};

const CHUNK_SIZE: i32 = 1024;
const MIXING_CHANNELS: i32 = 8;
/// Reserved for the looping engine hum so one-shot cues never cut it off.
const ENGINE_CHANNEL: Channel = Channel(0);

/// Converts a fraction of full volume into a mixer volume level.
fn mixer_volume(fraction: f32) -> i32 {
    (fraction.clamp(0.0, 1.0) * MAX_VOLUME as f32).round() as i32
}

fn sound_volume(sound: Sound) -> f32 {
    match sound {
        Sound::Engine => volume::ENGINE,
        Sound::Collect => volume::COLLECT,
        Sound::DirectionChange => volume::DIRECTION_CHANGE,
        Sound::Explosion => volume::EXPLOSION,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled,
    Muted,
}

/// The audio system for the game.
///
/// Owns the mixer, the background track and every sound effect. The background track
/// and the engine hum loop for the lifetime of the process; everything else is
/// fire-and-forget.
pub struct Audio {
    /// Taken on drop so the track is freed before the device closes.
    music: Option<Music<'static>>,
    sounds: HashMap<Sound, Chunk>,
    state: AudioState,
    _mixer_context: mixer::Sdl2MixerContext,
}

impl Audio {
    /// Opens the audio device and loads every sound from `asset_root`.
    ///
    /// The audio subsystem must already be initialized.
    pub fn new(asset_root: &Path) -> GameResult<Self> {
        mixer::open_audio(DEFAULT_FREQUENCY, DEFAULT_FORMAT, DEFAULT_CHANNELS, CHUNK_SIZE).map_err(AudioError::Open)?;
        let mixer_context = mixer::init(InitFlag::MP3 | InitFlag::OGG).map_err(AudioError::Open)?;

        mixer::allocate_channels(MIXING_CHANNELS);
        mixer::reserve_channels(1);

        let music_path = Asset::BackgroundMusic.locate(asset_root)?;
        let music = Music::from_file(&music_path).map_err(|reason| AudioError::Load {
            name: music_path.display().to_string(),
            reason,
        })?;

        let mut sounds = HashMap::new();
        for sound in Sound::iter() {
            let path = Asset::from(sound).locate(asset_root)?;
            let mut chunk = Chunk::from_file(&path).map_err(|reason| AudioError::Load {
                name: path.display().to_string(),
                reason,
            })?;
            chunk.set_volume(mixer_volume(sound_volume(sound)));
            debug!(?sound, path = %path.display(), "Loaded sound");
            sounds.insert(sound, chunk);
        }

        Ok(Self {
            music: Some(music),
            sounds,
            state: AudioState::Enabled,
            _mixer_context: mixer_context,
        })
    }

    /// Starts the looping background track and engine hum.
    pub fn start_loops(&mut self) -> GameResult<()> {
        Music::set_volume(self.music_volume());
        if let Some(music) = &self.music {
            music.play(-1).map_err(AudioError::Play)?;
        }

        if let Some(engine) = self.sounds.get(&Sound::Engine) {
            ENGINE_CHANNEL.play(engine, -1).map_err(AudioError::Play)?;
        }
        Ok(())
    }

    /// Plays a one-shot cue on the first free channel.
    pub fn play(&mut self, sound: Sound) {
        if self.state == AudioState::Muted {
            return;
        }

        if let Some(chunk) = self.sounds.get(&sound) {
            match Channel::all().play(chunk, 0) {
                Ok(channel) => trace!(?sound, ?channel, "Playing sound"),
                Err(e) => warn!(?sound, "Could not play sound: {e}"),
            }
        }
    }

    /// Instantly mute or unmute everything, loops included.
    pub fn set_mute(&mut self, mute: bool) {
        self.state = if mute { AudioState::Muted } else { AudioState::Enabled };
        Channel::all().set_volume(if mute { 0 } else { MAX_VOLUME });
        Music::set_volume(self.music_volume());
        debug!(muted = mute, "Audio mute state changed");
    }

    pub fn is_muted(&self) -> bool {
        self.state == AudioState::Muted
    }

    fn music_volume(&self) -> i32 {
        match self.state {
            AudioState::Enabled => mixer_volume(volume::BACKGROUND),
            AudioState::Muted => 0,
        }
    }
}

impl Drop for Audio {
    fn drop(&mut self) {
        Music::halt();
        Channel::all().halt();

        // Chunks and music must be freed while the device is still open.
        self.sounds.clear();
        drop(self.music.take());
        mixer::close_audio();
        debug!("Audio device closed");
    }
}
