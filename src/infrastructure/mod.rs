// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port` for hosts that have no richer implementation.
//!
//! # Available Adapters
//!
//! - [`headless`]: a media element without a video pipeline (implements
//!   [`MediaElement`])
//! - [`playlist`]: an in-memory playlist loaded from TOML or a directory
//!   (implements [`PlaylistProvider`])
//!
//! The tokio-backed [`Scheduler`] lives next to the service that owns it,
//! in [`crate::player::service`].
//!
//! [`MediaElement`]: crate::application::port::MediaElement
//! [`PlaylistProvider`]: crate::application::port::PlaylistProvider
//! [`Scheduler`]: crate::application::port::Scheduler

pub mod headless;
pub mod playlist;

pub use headless::HeadlessElement;
pub use playlist::{load_playlist, open, save_playlist, scan_directory, InMemoryPlaylist, PlaylistFile};
