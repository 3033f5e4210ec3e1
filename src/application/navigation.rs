// SPDX-License-Identifier: MPL-2.0
//! Playlist stepping and the navigation queue.
//!
//! Stepping computes the next or previous playlist index with wrap-around.
//! Inside a sequence window the step is a plain ±1 move between members;
//! leaving the window falls back to ordinary modulo stepping, so the last
//! member steps to index 0.
//!
//! The [`NavigationQueue`] serializes the resulting targets. Every target is
//! applied to the playlist provider on its own turn, in submission order.
//! The queue only keeps the bookkeeping; scheduling the turns is the
//! caller's job (see `TransportController`).

use crate::domain::playback::SequenceWindow;
use std::collections::VecDeque;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the end of the playlist.
    Next,
    /// Towards the start of the playlist.
    Previous,
}

/// Returns the index after `index` in a list of `len` items.
///
/// Returns `None` for an empty list.
#[must_use]
pub fn step_next(index: usize, len: usize, window: Option<SequenceWindow>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = index.min(len - 1);
    if let Some(window) = window {
        if window.contains(index) && index < window.last() {
            return Some(index + 1);
        }
    }
    Some((index + 1) % len)
}

/// Returns the index before `index` in a list of `len` items.
///
/// Returns `None` for an empty list.
#[must_use]
pub fn step_previous(index: usize, len: usize, window: Option<SequenceWindow>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = index.min(len - 1);
    if let Some(window) = window {
        if window.contains(index) && index > window.start() {
            return Some(index - 1);
        }
    }
    Some((index + len - 1) % len)
}

/// Returns the neighbour of `index` in `direction`.
#[must_use]
pub fn step(
    direction: Direction,
    index: usize,
    len: usize,
    window: Option<SequenceWindow>,
) -> Option<usize> {
    match direction {
        Direction::Next => step_next(index, len, window),
        Direction::Previous => step_previous(index, len, window),
    }
}

/// FIFO of playlist indices waiting to be applied.
///
/// The queue is either idle or draining. Enqueuing on an idle queue starts a
/// drain; enqueuing while draining only appends, and the running drain picks
/// the new entry up. Duplicates are kept: pressing "next" twice on the same
/// item produces two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationQueue {
    pending: VecDeque<usize>,
    draining: bool,
}

impl NavigationQueue {
    /// Creates an idle, empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `target`.
    ///
    /// Returns true when the queue was idle, meaning the caller must
    /// schedule the first drain step.
    pub fn enqueue(&mut self, target: usize) -> bool {
        self.pending.push_back(target);
        if self.draining {
            false
        } else {
            self.draining = true;
            true
        }
    }

    /// Takes the entry to apply on this drain step.
    ///
    /// Returns `None`, and goes idle, when nothing is pending.
    pub fn begin_step(&mut self) -> Option<usize> {
        let target = self.pending.pop_front();
        if target.is_none() {
            self.draining = false;
        }
        target
    }

    /// Ends a drain step.
    ///
    /// Returns true when entries remain and another step must be scheduled;
    /// otherwise the queue goes idle.
    pub fn end_step(&mut self) -> bool {
        if self.pending.is_empty() {
            self.draining = false;
            false
        } else {
            true
        }
    }

    /// Returns true while a drain is in progress.
    #[must_use]
    pub fn is_draining(&self) -> bool {
        self.draining
    }

    /// Number of entries not applied yet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true when no entry is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
