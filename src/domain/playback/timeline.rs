// SPDX-License-Identifier: MPL-2.0
//! Position inside the current playback unit.
//!
//! A [`Timeline`] holds `elapsed` and `duration` in seconds and keeps
//! `0 <= elapsed <= duration` after every mutation. A duration of `0.0` is
//! the sentinel for "not known yet" (video metadata still loading); progress
//! is then reported as `0.0` instead of dividing by zero.

/// Elapsed time and duration of the current unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Timeline {
    elapsed: f64,
    duration: f64,
}

impl Timeline {
    /// Creates a timeline of known duration, positioned at the start.
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        Self {
            elapsed: 0.0,
            duration: sanitize(duration_secs),
        }
    }

    /// Creates a timeline whose duration is not known yet.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Returns seconds elapsed in the unit.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Returns the unit duration in seconds, `0.0` when unknown.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns true once the duration has been reported.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration > 0.0
    }

    /// Returns `elapsed / duration`, or `0.0` for an unknown duration.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.has_duration() {
            self.elapsed / self.duration
        } else {
            0.0
        }
    }

    /// Returns true when a known duration has been fully played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.has_duration() && self.elapsed >= self.duration
    }

    /// Updates the duration, keeping elapsed inside the new range.
    ///
    /// Non-finite or negative durations keep the unknown sentinel.
    pub fn set_duration(&mut self, duration_secs: f64) {
        self.duration = sanitize(duration_secs);
        self.elapsed = self.elapsed.min(self.duration);
    }

    /// Moves to `secs`, clamped into `[0, duration]`, and returns the new
    /// elapsed value. NaN maps to `0.0`.
    pub fn seek(&mut self, secs: f64) -> f64 {
        self.elapsed = if secs.is_nan() {
            0.0
        } else {
            secs.clamp(0.0, self.duration)
        };
        self.elapsed
    }

    /// Moves back to the start.
    pub fn rewind(&mut self) {
        self.elapsed = 0.0;
    }

    /// Returns which of `count` equal segments of `segment_secs` holds the
    /// current position, clamped to the last segment.
    #[must_use]
    pub fn segment(&self, segment_secs: f64, count: usize) -> usize {
        if count == 0 || segment_secs <= 0.0 {
            return 0;
        }
        // Truncation is the intended floor for non-negative values.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (self.elapsed / segment_secs).floor() as usize;
        index.min(count - 1)
    }
}

fn sanitize(duration_secs: f64) -> f64 {
    if duration_secs.is_finite() && duration_secs > 0.0 {
        duration_secs
    } else {
        0.0
    }
}
