//! Background music toggle.
//!
//! Platform players live behind [`AudioLoader`] / [`PlaybackHandle`]. The
//! toggle creates a handle lazily on the first unmute, then only pauses and
//! resumes that same handle.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The bundled track could not be located.
    #[error("audio asset unavailable: {name}")]
    AssetUnavailable { name: String },
    /// The track was found but the platform could not decode or play it.
    #[error("audio engine error: {0}")]
    Engine(String),
}

/// A looping player created by an [`AudioLoader`].
pub trait PlaybackHandle {
    fn play(&mut self) -> Result<(), AudioError>;
    fn pause(&mut self);
}

/// Creates looping players for bundled tracks.
pub trait AudioLoader {
    type Handle: PlaybackHandle;

    /// Open `name` for infinite looped playback. The handle starts paused.
    fn load_looping(&mut self, name: &str) -> Result<Self::Handle, AudioError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Unloaded,
    Playing,
    Paused,
}

pub struct MusicToggle<L: AudioLoader> {
    loader: L,
    track: String,
    player: Option<L::Handle>,
    muted: bool,
}

impl<L: AudioLoader> MusicToggle<L> {
    /// Starts muted with no player.
    pub fn new(loader: L, track: impl Into<String>) -> Self {
        Self {
            loader,
            track: track.into(),
            player: None,
            muted: true,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn player(&self) -> Option<&L::Handle> {
        self.player.as_ref()
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn state(&self) -> PlaybackState {
        match (&self.player, self.muted) {
            (None, _) => PlaybackState::Unloaded,
            (Some(_), false) => PlaybackState::Playing,
            (Some(_), true) => PlaybackState::Paused,
        }
    }

    /// Flip mute and start, resume or pause playback accordingly.
    ///
    /// A missing asset is returned to the caller and leaves the toggle muted
    /// with no player. Engine failures are logged and swallowed: the toggle
    /// reads as unmuted, nothing plays, and the next unmute tries again.
    pub fn tap(&mut self) -> Result<PlaybackState, AudioError> {
        if self.muted {
            self.unmute()?;
        } else {
            self.muted = true;
            if let Some(player) = self.player.as_mut() {
                player.pause();
            }
            log::info!("[music] muted");
        }
        Ok(self.state())
    }

    /// The platform found out after loading that the track is missing.
    /// Drops the player and goes back to muted; the next unmute loads again.
    pub fn asset_lost(&mut self) {
        if let Some(mut player) = self.player.take() {
            player.pause();
        }
        self.muted = true;
        log::warn!(
            "[music] {}",
            AudioError::AssetUnavailable {
                name: self.track.clone()
            }
        );
    }

    fn unmute(&mut self) -> Result<(), AudioError> {
        if let Some(player) = self.player.as_mut() {
            self.muted = false;
            match player.play() {
                Ok(()) => log::info!("[music] resumed"),
                Err(e) => log::error!("[music] resume failed: {e}"),
            }
            return Ok(());
        }

        match self.loader.load_looping(&self.track) {
            Ok(mut player) => {
                self.muted = false;
                match player.play() {
                    Ok(()) => log::info!("[music] playing {}", self.track),
                    Err(e) => log::error!("[music] playback failed: {e}"),
                }
                self.player = Some(player);
                Ok(())
            }
            Err(e @ AudioError::AssetUnavailable { .. }) => {
                log::warn!("[music] {e}");
                Err(e)
            }
            Err(AudioError::Engine(msg)) => {
                self.muted = false;
                log::error!("[music] could not start player: {msg}");
                Ok(())
            }
        }
    }
}
