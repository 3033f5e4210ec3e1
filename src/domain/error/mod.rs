// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! These errors describe failures at the boundary with the host media
//! element. They carry no infrastructure types.

mod playback;

pub use playback::{EngagementError, FullscreenError};
