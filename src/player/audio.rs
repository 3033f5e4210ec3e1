// SPDX-License-Identifier: MPL-2.0
//! Volume and mute state.
//!
//! Playback always starts muted so that autoplay is accepted by hosts with
//! an autoplay policy; the user unmutes explicitly. Setting the volume to
//! zero mutes, any other level unmutes.

use crate::application::port::MediaElement;
use crate::domain::playback::Volume;

/// Linear volume plus the muted flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioState {
    volume: Volume,
    muted: bool,
}

impl AudioState {
    /// Creates a muted state remembering `volume` for unmute.
    #[must_use]
    pub fn new(volume: Volume) -> Self {
        Self {
            volume,
            muted: true,
        }
    }

    /// Returns the volume level.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Returns true when muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Sets the volume; zero mutes, anything else unmutes.
    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
        self.muted = volume.is_muted();
    }

    /// Flips the muted flag and returns the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Mirrors volume and mute onto a native element.
    pub fn apply_to<E: MediaElement>(&self, element: &mut E) {
        element.set_volume(self.volume.value());
        element.set_muted(self.muted);
    }
}

impl Default for AudioState {
    fn default() -> Self {
        Self::new(Volume::default())
    }
}
