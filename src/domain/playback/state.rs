// SPDX-License-Identifier: MPL-2.0
//! Transport state machine.
//!
//! This module defines the transport states shared by every media kind.
//! The position inside the current unit is kept apart as continuous data
//! (see [`Timeline`](super::Timeline)), so "paused at 0" and "stopped" stay
//! distinguishable.

/// Represents the current transport state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportState {
    /// Nothing is playing. Initial state, and the state after stop or end.
    #[default]
    Stopped,
    /// A playback driver is active.
    Playing,
    /// Playback paused at the current position.
    Paused,
}

impl TransportState {
    /// Returns true if media is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if playback is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if playback is stopped.
    #[must_use]
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }
}
