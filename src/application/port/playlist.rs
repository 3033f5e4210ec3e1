// SPDX-License-Identifier: MPL-2.0
//! Playlist provider port.
//!
//! The playlist and its "current media" selection are owned by the
//! surrounding application. The player reads both and writes the selection
//! only from the navigation queue drain step.

use crate::domain::media::MediaItem;

/// Port for the external playlist source.
///
/// # Contract
///
/// - `media_list()` is stable for the lifetime of the player; editing the
///   playlist is not supported.
/// - `current_media()` returns whatever was last set, by the player or by
///   the application (e.g. a playlist dropdown). After an external change the
///   application notifies the player through `sync_current_media`.
pub trait PlaylistProvider {
    /// Returns the ordered media list.
    fn media_list(&self) -> &[MediaItem];

    /// Returns the current selection, if any.
    fn current_media(&self) -> Option<&MediaItem>;

    /// Replaces the current selection.
    fn set_current_media(&mut self, item: MediaItem);
}
