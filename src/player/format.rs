// SPDX-License-Identifier: MPL-2.0
//! Time display helpers.

use std::fmt;

/// Whole minutes and remaining seconds of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeParts {
    pub minutes: u64,
    pub seconds: u64,
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// Splits `secs` into minutes and seconds, rounding down.
///
/// Negative, NaN and infinite inputs format as `0:00`.
#[must_use]
pub fn format_time(secs: f64) -> TimeParts {
    if !secs.is_finite() || secs <= 0.0 {
        return TimeParts::default();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = secs.floor() as u64;
    TimeParts {
        minutes: total / 60,
        seconds: total % 60,
    }
}
