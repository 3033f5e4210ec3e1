// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the interfaces the host implements. The traits use
//! only domain types, so the transport controller can be driven by a tokio
//! runtime, a UI event loop, or a manual test scheduler alike.
//!
//! # Available Ports
//!
//! - [`element`]: the native video element
//! - [`playlist`]: the external playlist and its current selection
//! - [`scheduler`]: timers, deferred turns and the native play engagement

pub mod element;
pub mod playlist;
pub mod scheduler;

pub use element::{Engagement, FullscreenVariant, MediaElement};
pub use playlist::PlaylistProvider;
pub use scheduler::{Scheduler, TimerGuard, Token, TokenSource, Wakeup};
