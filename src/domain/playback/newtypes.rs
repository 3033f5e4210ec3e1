// SPDX-License-Identifier: MPL-2.0
//! Playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, linear).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f32 = 1.0;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use reel_player::domain::playback::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// assert!(Volume::new(-1.0).is_muted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// NaN maps to the minimum.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if this volume implies mute.
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 <= volume_bounds::MIN
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// ImageDuration
// =============================================================================

/// Image display duration bounds in seconds.
pub mod image_duration_bounds {
    /// Shortest allowed image display time.
    pub const MIN: f64 = 0.5;
    /// Longest allowed image display time.
    pub const MAX: f64 = 600.0;
    /// Default image display time.
    pub const DEFAULT: f64 = 4.0;
}

/// How long one image stays on screen, guaranteed positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDuration(f64);

impl ImageDuration {
    /// Creates a new image duration in seconds, clamping to valid range.
    #[must_use]
    pub fn from_secs(secs: f64) -> Self {
        if !secs.is_finite() {
            return Self::default();
        }
        Self(secs.clamp(image_duration_bounds::MIN, image_duration_bounds::MAX))
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub fn secs(self) -> f64 {
        self.0
    }
}

impl Default for ImageDuration {
    fn default() -> Self {
        Self(image_duration_bounds::DEFAULT)
    }
}

// =============================================================================
// TickInterval
// =============================================================================

/// Clock period bounds in milliseconds.
pub mod tick_bounds {
    /// Fastest allowed tick.
    pub const MIN_MS: u64 = 10;
    /// Slowest allowed tick.
    pub const MAX_MS: u64 = 5_000;
    /// Default tick, one second.
    pub const DEFAULT_MS: u64 = 1_000;
}

/// Period of a repeating playback clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(Duration);

impl TickInterval {
    /// Creates a tick interval, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(
            ms.clamp(tick_bounds::MIN_MS, tick_bounds::MAX_MS),
        ))
    }

    /// Returns the period as a [`Duration`].
    #[must_use]
    pub fn duration(self) -> Duration {
        self.0
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(Duration::from_millis(tick_bounds::DEFAULT_MS))
    }
}
