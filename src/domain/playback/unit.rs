// SPDX-License-Identifier: MPL-2.0
//! Playback units.
//!
//! A unit is what the transport controls act on: one standalone item, or a
//! whole image sequence. The sequence is the trailing window of the
//! playlist, presented as a single continuous timeline whose members are
//! shown one after the other.
//!
//! The unit kind is resolved once when the selection changes, never
//! re-derived inside individual transport handlers.

use crate::domain::media::{MediaItem, MediaKind};

/// Trailing run of images played as one timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceWindow {
    start: usize,
    len: usize,
}

impl SequenceWindow {
    /// Finds the trailing window of `length` items in `list`.
    ///
    /// Returns `None` when `length` is zero, when the list is shorter than
    /// the window, or when any window member is not an image.
    #[must_use]
    pub fn trailing(list: &[MediaItem], length: usize) -> Option<Self> {
        if length == 0 || list.len() < length {
            return None;
        }
        let start = list.len() - length;
        list[start..]
            .iter()
            .all(|item| item.kind().is_image())
            .then_some(Self { start, len: length })
    }

    /// First playlist index of the window.
    #[must_use]
    pub fn start(self) -> usize {
        self.start
    }

    /// Number of members.
    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    /// Always false, windows hold at least one member.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Last playlist index of the window.
    #[must_use]
    pub fn last(self) -> usize {
        self.start + self.len - 1
    }

    /// Returns true if `index` is a member.
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        (self.start..self.start + self.len).contains(&index)
    }

    /// Returns the member offset of a playlist index.
    #[must_use]
    pub fn offset_of(self, index: usize) -> Option<usize> {
        self.contains(index).then(|| index - self.start)
    }

    /// Returns the playlist index of a member offset, clamped to the window.
    #[must_use]
    pub fn index_at(self, offset: usize) -> usize {
        self.start + offset.min(self.len - 1)
    }
}

/// How the unit holding the current item is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaUnitKind {
    /// One image, timed by the synthetic clock.
    StandaloneImage,
    /// One video, driven by the native element.
    StandaloneVideo,
    /// One image inside a sequence window.
    SequenceMember {
        /// The window the item belongs to.
        window: SequenceWindow,
        /// Position of the item inside the window.
        offset: usize,
    },
    /// Unknown media, which no driver can play.
    Unsupported,
}

impl MediaUnitKind {
    /// Resolves the unit of `list[index]`.
    ///
    /// Returns `None` for an out-of-range index.
    #[must_use]
    pub fn resolve(list: &[MediaItem], index: usize, sequence_length: usize) -> Option<Self> {
        let item = list.get(index)?;
        if let Some(window) = SequenceWindow::trailing(list, sequence_length) {
            if let Some(offset) = window.offset_of(index) {
                return Some(Self::SequenceMember { window, offset });
            }
        }
        Some(match item.kind() {
            MediaKind::Image => Self::StandaloneImage,
            MediaKind::Video => Self::StandaloneVideo,
            MediaKind::Unknown => Self::Unsupported,
        })
    }

    /// Returns the sequence window, if any.
    #[must_use]
    pub fn window(self) -> Option<SequenceWindow> {
        match self {
            Self::SequenceMember { window, .. } => Some(window),
            _ => None,
        }
    }

    /// Returns true if the synthetic clock drives this unit.
    #[must_use]
    pub fn is_timed_image(self) -> bool {
        matches!(self, Self::StandaloneImage | Self::SequenceMember { .. })
    }

    /// Returns true if the native element drives this unit.
    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, Self::StandaloneVideo)
    }

    /// Returns true if both kinds belong to the same sequence window.
    #[must_use]
    pub fn shares_window_with(self, other: Self) -> bool {
        matches!((self.window(), other.window()), (Some(a), Some(b)) if a == b)
    }
}
