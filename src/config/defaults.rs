// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Bounds live next to the newtypes that enforce
//! them; this module re-exports them under configuration names.
//!
//! # Categories
//!
//! - **Playback**: autoplay, image duration, clock periods
//! - **Sequence**: trailing image sequence length and transition delay
//! - **Audio**: initial volume

use crate::domain::playback::{image_duration_bounds, tick_bounds, volume_bounds};

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Whether playback starts on its own when a unit is loaded.
pub const DEFAULT_AUTOPLAY: bool = false;

/// Default display time of one image, in seconds.
pub const DEFAULT_IMAGE_DURATION_SECS: f64 = image_duration_bounds::DEFAULT;

/// Minimum image display time, in seconds.
pub const MIN_IMAGE_DURATION_SECS: f64 = image_duration_bounds::MIN;

/// Maximum image display time, in seconds.
pub const MAX_IMAGE_DURATION_SECS: f64 = image_duration_bounds::MAX;

/// Default period of the image clock, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = tick_bounds::DEFAULT_MS;

/// Default period of the video position sampling, in milliseconds.
pub const DEFAULT_VIDEO_SAMPLE_INTERVAL_MS: u64 = tick_bounds::DEFAULT_MS;

/// Minimum clock period, in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = tick_bounds::MIN_MS;

/// Maximum clock period, in milliseconds.
pub const MAX_TICK_INTERVAL_MS: u64 = tick_bounds::MAX_MS;

// ==========================================================================
// Sequence Defaults
// ==========================================================================

/// Number of trailing playlist images grouped into one sequence (0 disables).
pub const DEFAULT_SEQUENCE_LENGTH: usize = 4;

/// Maximum sequence length.
pub const MAX_SEQUENCE_LENGTH: usize = 64;

/// Delay between crossing a sequence boundary and advancing the index.
pub const DEFAULT_TRANSITION_DEBOUNCE_MS: u64 = 50;

/// Maximum transition delay, in milliseconds.
pub const MAX_TRANSITION_DEBOUNCE_MS: u64 = 1_000;

// ==========================================================================
// Audio Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = volume_bounds::DEFAULT;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = volume_bounds::MIN;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = volume_bounds::MAX;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_IMAGE_DURATION_SECS > 0.0);
    assert!(DEFAULT_IMAGE_DURATION_SECS >= MIN_IMAGE_DURATION_SECS);
    assert!(DEFAULT_IMAGE_DURATION_SECS <= MAX_IMAGE_DURATION_SECS);

    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
    assert!(DEFAULT_VIDEO_SAMPLE_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_VIDEO_SAMPLE_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);

    assert!(DEFAULT_SEQUENCE_LENGTH <= MAX_SEQUENCE_LENGTH);
    assert!(DEFAULT_TRANSITION_DEBOUNCE_MS <= MAX_TRANSITION_DEBOUNCE_MS);

    assert!(MIN_VOLUME >= 0.0);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_defaults_match_original_player() {
        assert_eq!(DEFAULT_IMAGE_DURATION_SECS, 4.0);
        assert_eq!(DEFAULT_TICK_INTERVAL_MS, 1_000);
    }

    #[test]
    fn sequence_defaults_are_valid() {
        assert_eq!(DEFAULT_SEQUENCE_LENGTH, 4);
        assert_eq!(DEFAULT_TRANSITION_DEBOUNCE_MS, 50);
    }
}
