// SPDX-License-Identifier: MPL-2.0
//! `reel_player` is the playback core of a playlist media player.
//!
//! It cycles through a playlist of images and videos behind one set of
//! transport controls: timed images, native videos and trailing image
//! sequences share a single timeline model, a single clock slot and a
//! serialized navigation queue.
//!
//! The host supplies three ports (see [`application::port`]): the playlist,
//! the native video element and a scheduler. [`player::spawn`] runs the
//! controller as a tokio service with a ready-made scheduler.

#![doc(html_root_url = "https://docs.rs/reel_player/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod player;

#[cfg(test)]
pub(crate) mod test_utils;
