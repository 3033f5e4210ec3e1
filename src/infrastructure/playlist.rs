// SPDX-License-Identifier: MPL-2.0
//! Playlist sources.
//!
//! [`InMemoryPlaylist`] is the provider used by the binary and the tests.
//! It can be filled from a TOML playlist file or from a directory scan.
//!
//! # Playlist file format
//!
//! ```toml
//! [[media]]
//! url = "intro.mp4"
//! title = "Intro"
//!
//! [[media]]
//! url = "slides/01.png"
//! text = "First slide"
//! ```

use crate::application::port::PlaylistProvider;
use crate::domain::media::{classify, MediaItem, MediaKind};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk playlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistFile {
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

/// Playlist held in memory with its current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryPlaylist {
    items: Vec<MediaItem>,
    current: Option<MediaItem>,
}

impl InMemoryPlaylist {
    /// Creates a playlist with nothing selected.
    #[must_use]
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            current: None,
        }
    }

    /// Selects `index` as the application would, without the player.
    pub fn select(&mut self, index: usize) {
        if let Some(item) = self.items.get(index) {
            self.current = Some(item.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<PlaylistFile> for InMemoryPlaylist {
    fn from(file: PlaylistFile) -> Self {
        Self::new(file.media)
    }
}

impl PlaylistProvider for InMemoryPlaylist {
    fn media_list(&self) -> &[MediaItem] {
        &self.items
    }

    fn current_media(&self) -> Option<&MediaItem> {
        self.current.as_ref()
    }

    fn set_current_media(&mut self, item: MediaItem) {
        self.current = Some(item);
    }
}

/// Reads a TOML playlist file.
///
/// Relative media URLs are kept as written.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and
/// [`Error::Playlist`] when it is not a valid playlist.
pub fn load_playlist(path: &Path) -> Result<InMemoryPlaylist> {
    let content = fs::read_to_string(path)?;
    let file: PlaylistFile = toml::from_str(&content)
        .map_err(|err| Error::Playlist(format!("{}: {}", path.display(), err)))?;
    Ok(file.into())
}

/// Writes a TOML playlist file.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save_playlist(file: &PlaylistFile, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(file)?;
    fs::write(path, content)?;
    Ok(())
}

/// Builds a playlist from the playable files of a directory, sorted by name.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<InMemoryPlaylist> {
    let mut media_files = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_playable(&path) {
            media_files.push(path);
        }
    }

    media_files.sort_by_key(|path| file_name_key(path));

    Ok(InMemoryPlaylist::new(
        media_files
            .into_iter()
            .map(|path| {
                let title = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned());
                let item = MediaItem::new(path.to_string_lossy().into_owned());
                match title {
                    Some(title) => item.with_title(title),
                    None => item,
                }
            })
            .collect(),
    ))
}

/// Loads a playlist file, or scans `path` when it is a directory.
///
/// # Errors
///
/// See [`load_playlist`] and [`scan_directory`].
pub fn open(path: &Path) -> Result<InMemoryPlaylist> {
    if path.is_dir() {
        scan_directory(path)
    } else {
        load_playlist(path)
    }
}

fn is_playable(path: &Path) -> bool {
    classify(&path.to_string_lossy()) != MediaKind::Unknown
}

fn file_name_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
