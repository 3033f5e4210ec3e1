// SPDX-License-Identifier: MPL-2.0
//! Native media element port.
//!
//! This module defines the [`MediaElement`] trait for the host's video
//! element. Hosts decode and render; the player only drives transport,
//! position, volume and fullscreen through this interface.
//!
//! # Design Notes
//!
//! - `play()` mirrors the host's deferred play request: it returns a future
//!   that resolves once playback really started, or fails with an
//!   [`EngagementError`]. The player never awaits it inline; the
//!   [`Scheduler`](super::Scheduler) awaits it and reports back.
//! - "loaded data" and "ended" notifications are delivered by the host to
//!   the controller directly (`on_metadata_loaded`, `on_media_ended`).

use crate::domain::error::EngagementError;
use futures_util::future::BoxFuture;

/// Deferred result of a native play request.
pub type Engagement = BoxFuture<'static, Result<(), EngagementError>>;

/// Fullscreen entry points, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenVariant {
    /// The standard `requestFullscreen` entry point.
    Standard,
    /// The WebKit-prefixed entry point.
    Webkit,
    /// The Microsoft-prefixed entry point.
    Ms,
}

impl FullscreenVariant {
    /// All variants, in dispatch order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Webkit, Self::Ms];
}

/// Port for the host's native video element.
///
/// # Lifecycle
///
/// 1. `load()` when a video becomes current
/// 2. `set_muted()` / `set_volume()` mirror the audio state
/// 3. `play()` / `pause()` / `set_current_time()` drive transport
/// 4. `unload()` when the video stops being current or the player is dropped
pub trait MediaElement {
    /// Points the element at a new source.
    fn load(&mut self, url: &str);

    /// Releases the current source and detaches host listeners.
    fn unload(&mut self);

    /// Requests native playback.
    fn play(&mut self) -> Engagement;

    /// Pauses native playback.
    fn pause(&mut self);

    /// Returns the native playback position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the native playback position.
    fn set_current_time(&mut self, secs: f64);

    /// Sets the linear volume (0.0–1.0).
    fn set_volume(&mut self, volume: f32);

    /// Sets the muted flag.
    fn set_muted(&mut self, muted: bool);

    /// Enters fullscreen through `variant`.
    ///
    /// Returns false when the host does not expose that entry point.
    fn request_fullscreen(&mut self, variant: FullscreenVariant) -> bool;
}
