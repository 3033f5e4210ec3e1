// SPDX-License-Identifier: MPL-2.0
//! Resolved playback settings.

use crate::config::{
    DEFAULT_AUTOPLAY, DEFAULT_SEQUENCE_LENGTH, DEFAULT_TRANSITION_DEBOUNCE_MS,
    DEFAULT_VIDEO_SAMPLE_INTERVAL_MS,
};
use crate::domain::playback::{ImageDuration, TickInterval};
use std::time::Duration;

/// Playback settings with every value already validated.
///
/// Built from [`Config::playback_settings`](crate::config::Config::playback_settings)
/// or directly in code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    /// Start playing whenever a new unit is loaded.
    pub autoplay: bool,
    /// Display time of one image.
    pub image_duration: ImageDuration,
    /// Period of the image clock.
    pub tick_interval: TickInterval,
    /// Period of the video position sampling.
    pub video_sample_interval: TickInterval,
    /// Trailing images grouped into one sequence, 0 disables sequences.
    pub sequence_length: usize,
    /// Delay between crossing a sequence boundary and advancing the index.
    pub transition_debounce: Duration,
}

impl PlaybackSettings {
    /// Returns a copy with autoplay set.
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Returns a copy with the given sequence length.
    #[must_use]
    pub fn with_sequence_length(mut self, length: usize) -> Self {
        self.sequence_length = length;
        self
    }

    /// Duration of a full sequence of `members` images, in seconds.
    #[must_use]
    pub fn sequence_secs(&self, members: usize) -> f64 {
        self.image_duration.secs() * members as f64
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            autoplay: DEFAULT_AUTOPLAY,
            image_duration: ImageDuration::default(),
            tick_interval: TickInterval::default(),
            video_sample_interval: TickInterval::from_millis(DEFAULT_VIDEO_SAMPLE_INTERVAL_MS),
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            transition_debounce: Duration::from_millis(DEFAULT_TRANSITION_DEBOUNCE_MS),
        }
    }
}
