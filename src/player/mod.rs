// SPDX-License-Identifier: MPL-2.0
//! Playlist player.
//!
//! This module ties the domain and the ports together:
//!
//! - [`TransportController`]: the synchronous state machine, generic over
//!   the three ports so it runs the same under tokio or a manual scheduler
//! - [`service`]: a tokio actor owning one controller, driven by
//!   [`Command`]s and publishing [`PlaybackSnapshot`]s
//! - supporting pieces: the [`PlaybackClock`], [`AudioState`],
//!   [`PlaybackSettings`] and time formatting
//!
//! # Example
//!
//! ```ignore
//! use reel_player::infrastructure::{HeadlessElement, InMemoryPlaylist};
//! use reel_player::player::{self, Command, PlaybackSettings};
//!
//! let (handle, task) = player::spawn(playlist, HeadlessElement::new(), settings, volume);
//! handle.send(Command::Play).await?;
//! let snapshot = handle.wait_for(|s| s.current_index == Some(1)).await?;
//! ```

mod audio;
mod clock;
mod controller;
mod format;
pub mod service;
mod settings;
mod snapshot;

pub use audio::AudioState;
pub use clock::{ClockMode, PlaybackClock};
pub use controller::TransportController;
pub use format::{format_time, TimeParts};
pub use service::{spawn, Command, PlayerHandle, TokioScheduler};
pub use settings::PlaybackSettings;
pub use snapshot::PlaybackSnapshot;
