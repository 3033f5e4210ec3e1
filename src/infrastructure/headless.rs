// SPDX-License-Identifier: MPL-2.0
//! Media element for hosts without a video pipeline.
//!
//! The headless element accepts every call but cannot decode video: play
//! requests are rejected as unsupported, so the player skips videos and
//! keeps cycling through images. It has no fullscreen entry point.

use crate::application::port::{Engagement, FullscreenVariant, MediaElement};
use crate::domain::error::EngagementError;
use futures_util::FutureExt;
use tracing::debug;

/// Element that tracks position and audio state only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessElement {
    source: Option<String>,
    position: f64,
    volume: f32,
    muted: bool,
}

impl HeadlessElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently loaded source.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl MediaElement for HeadlessElement {
    fn load(&mut self, url: &str) {
        debug!(url, "headless element loaded");
        self.source = Some(url.to_string());
        self.position = 0.0;
    }

    fn unload(&mut self) {
        self.source = None;
        self.position = 0.0;
    }

    fn play(&mut self) -> Engagement {
        let message = match &self.source {
            Some(url) => format!("NotSupportedError: no video pipeline for {url}"),
            None => "NotSupportedError: no source loaded".to_string(),
        };
        futures_util::future::ready(Err(EngagementError::from_message(&message))).boxed()
    }

    fn pause(&mut self) {}

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, secs: f64) {
        self.position = secs.max(0.0);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn request_fullscreen(&mut self, _variant: FullscreenVariant) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_is_rejected_as_unsupported() {
        let mut element = HeadlessElement::new();
        element.load("clip.mp4");
        let result = element.play().now_or_never().expect("ready future");
        assert!(matches!(result, Err(EngagementError::NotSupported(_))));
    }

    #[test]
    fn tracks_source_and_audio() {
        let mut element = HeadlessElement::new();
        element.load("clip.webm");
        element.set_volume(0.3);
        element.set_muted(true);
        element.set_current_time(-4.0);

        assert_eq!(element.source(), Some("clip.webm"));
        assert!(element.is_muted());
        assert_eq!(element.current_time(), 0.0);

        element.unload();
        assert_eq!(element.source(), None);
    }

    #[test]
    fn has_no_fullscreen() {
        let mut element = HeadlessElement::new();
        assert!(FullscreenVariant::ALL
            .into_iter()
            .all(|variant| !element.request_fullscreen(variant)));
    }
}
