// SPDX-License-Identifier: MPL-2.0
//! Cooperative scheduler port.
//!
//! Everything asynchronous the player needs goes through this trait: the
//! repeating playback clock, one-shot delays, yielding one turn before the
//! next navigation step, and awaiting the native play request. Each of these
//! comes back to the controller as a [`Wakeup`].
//!
//! Pending work is represented by a [`TimerGuard`]. Dropping the guard
//! cancels the work, so a controller that replaces or clears its guard can
//! never be woken by the old timer. Wake-ups that were already queued when
//! the guard dropped still carry their [`Token`], which the controller
//! checks against the token it currently expects.

use super::element::Engagement;
use crate::domain::error::EngagementError;
use std::fmt;
use std::time::{Duration, Instant};

/// Identifies one timer, delay or engagement issued by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(u64);

/// Issues strictly increasing tokens.
#[derive(Debug, Default)]
pub struct TokenSource {
    last: u64,
}

impl TokenSource {
    /// Returns a token never returned before by this source.
    pub fn issue(&mut self) -> Token {
        self.last += 1;
        Token(self.last)
    }
}

/// A wake-up delivered back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wakeup {
    /// The playback clock ticked.
    Tick(Token),
    /// The sequence transition delay elapsed.
    TransitionSettled(Token),
    /// The navigation queue may apply its next entry.
    DrainQueue,
    /// The native play request settled.
    Engaged {
        /// Token of the engagement.
        token: Token,
        /// Outcome reported by the host.
        result: Result<(), EngagementError>,
    },
}

/// Cancels its pending work when dropped.
pub struct TimerGuard {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TimerGuard {
    /// Creates a guard running `cancel` on drop.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Creates a guard with nothing to cancel.
    #[must_use]
    pub fn inert() -> Self {
        Self { cancel: None }
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for TimerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerGuard")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Port for the host's timer and task facilities.
pub trait Scheduler {
    /// Returns the scheduler's current time.
    fn now(&self) -> Instant;

    /// Delivers `wakeup` every `period`, first after one full period.
    fn every(&mut self, period: Duration, wakeup: Wakeup) -> TimerGuard;

    /// Delivers `wakeup` once after `delay`.
    fn after(&mut self, delay: Duration, wakeup: Wakeup) -> TimerGuard;

    /// Delivers `wakeup` on a later turn, after work already queued.
    fn defer(&mut self, wakeup: Wakeup);

    /// Awaits `engagement` and delivers [`Wakeup::Engaged`] with `token`.
    fn engage(&mut self, engagement: Engagement, token: Token) -> TimerGuard;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn guard_cancels_on_drop() {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let guard = TimerGuard::new(move || flag.store(true, Ordering::SeqCst));
        assert!(!cancelled.load(Ordering::SeqCst));
        drop(guard);
        assert!(cancelled.load(Ordering::SeqCst));
    }

    #[test]
    fn replacing_a_guard_cancels_the_old_one() {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let mut slot = Some(TimerGuard::new(move || flag.store(true, Ordering::SeqCst)));
        assert!(slot.is_some());
        slot = Some(TimerGuard::inert());
        assert!(cancelled.load(Ordering::SeqCst));
        assert!(slot.is_some());
    }

    #[test]
    fn tokens_are_unique_and_increasing() {
        let mut source = TokenSource::default();
        let first = source.issue();
        let second = source.issue();
        assert_ne!(first, second);
        assert!(second > first);
    }
}
