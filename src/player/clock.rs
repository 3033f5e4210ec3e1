// SPDX-License-Identifier: MPL-2.0
//! Playback clock.
//!
//! For images and sequences the clock is the playback driver: a repeating
//! tick after which elapsed time is recomputed from a wall-clock anchor
//! (`base_elapsed + (now - started_at)`), so late or coalesced ticks never
//! drift. For videos the native element is the driver and the clock only
//! samples its position for display.
//!
//! At most one clock runs at a time. Starting a clock drops the previous
//! guard, which cancels the previous timer.

use crate::application::port::{Scheduler, TimerGuard, Token, Wakeup};
use std::time::{Duration, Instant};

/// What a running clock is doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockMode {
    /// Synthetic progress for images, anchored at `started_at`.
    Synthetic {
        /// Scheduler time when the clock (re)started.
        started_at: Instant,
        /// Elapsed seconds at `started_at`.
        base_elapsed: f64,
    },
    /// Position sampling for a native video.
    Sampling,
}

#[derive(Debug)]
struct RunningClock {
    mode: ClockMode,
    token: Token,
    _guard: TimerGuard,
}

/// The single timer slot owned by the transport controller.
#[derive(Debug, Default)]
pub struct PlaybackClock {
    running: Option<RunningClock>,
}

impl PlaybackClock {
    /// Creates a stopped clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts synthetic progress from `already_elapsed` seconds.
    pub fn start_synthetic<S: Scheduler>(
        &mut self,
        scheduler: &mut S,
        token: Token,
        period: Duration,
        already_elapsed: f64,
    ) {
        self.stop();
        let mode = ClockMode::Synthetic {
            started_at: scheduler.now(),
            base_elapsed: already_elapsed,
        };
        let guard = scheduler.every(period, Wakeup::Tick(token));
        self.running = Some(RunningClock {
            mode,
            token,
            _guard: guard,
        });
    }

    /// Starts sampling a native element.
    pub fn start_sampling<S: Scheduler>(&mut self, scheduler: &mut S, token: Token, period: Duration) {
        self.stop();
        let guard = scheduler.every(period, Wakeup::Tick(token));
        self.running = Some(RunningClock {
            mode: ClockMode::Sampling,
            token,
            _guard: guard,
        });
    }

    /// Stops the clock, cancelling its timer.
    pub fn stop(&mut self) {
        self.running = None;
    }

    /// Returns true while a clock is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Returns the mode of the running clock.
    #[must_use]
    pub fn mode(&self) -> Option<ClockMode> {
        self.running.as_ref().map(|clock| clock.mode)
    }

    /// Returns true if `token` belongs to the running clock.
    #[must_use]
    pub fn accepts(&self, token: Token) -> bool {
        self.running.as_ref().is_some_and(|clock| clock.token == token)
    }

    /// Elapsed seconds at `now` for a synthetic clock.
    #[must_use]
    pub fn synthetic_elapsed(&self, now: Instant) -> Option<f64> {
        match self.mode()? {
            ClockMode::Synthetic {
                started_at,
                base_elapsed,
            } => Some(base_elapsed + now.saturating_duration_since(started_at).as_secs_f64()),
            ClockMode::Sampling => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::TokenSource;
    use crate::test_utils::{assert_abs_diff_eq, ManualScheduler};

    #[test]
    fn synthetic_elapsed_follows_scheduler_time() {
        let mut scheduler = ManualScheduler::new();
        let mut tokens = TokenSource::default();
        let mut clock = PlaybackClock::new();

        clock.start_synthetic(&mut scheduler, tokens.issue(), Duration::from_secs(1), 1.5);
        scheduler.advance_time(Duration::from_millis(2_250));

        let elapsed = clock.synthetic_elapsed(scheduler.now()).expect("synthetic");
        assert_abs_diff_eq!(elapsed, 3.75, epsilon = 1e-9);
    }

    #[test]
    fn restarting_cancels_previous_timer() {
        let mut scheduler = ManualScheduler::new();
        let mut tokens = TokenSource::default();
        let mut clock = PlaybackClock::new();

        let first = tokens.issue();
        clock.start_synthetic(&mut scheduler, first, Duration::from_secs(1), 0.0);
        let second = tokens.issue();
        clock.start_sampling(&mut scheduler, second, Duration::from_secs(1));

        assert!(!clock.accepts(first));
        assert!(clock.accepts(second));
        assert_eq!(scheduler.active_timers(), 1);
        assert_eq!(clock.mode(), Some(ClockMode::Sampling));
        assert_eq!(clock.synthetic_elapsed(scheduler.now()), None);
    }

    #[test]
    fn stop_cancels_timer() {
        let mut scheduler = ManualScheduler::new();
        let mut tokens = TokenSource::default();
        let mut clock = PlaybackClock::new();

        clock.start_sampling(&mut scheduler, tokens.issue(), Duration::from_secs(1));
        assert!(clock.is_running());
        clock.stop();
        assert!(!clock.is_running());
        assert_eq!(scheduler.active_timers(), 0);
    }
}
