// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback rules without host dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Nothing here talks to a scheduler, a media element or a playlist source.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`EngagementError`](error::EngagementError),
//!   [`FullscreenError`](error::FullscreenError))
//! - [`media`]: Media types ([`MediaItem`](media::MediaItem),
//!   [`MediaKind`](media::MediaKind), [`classify`](media::classify))
//! - [`playback`]: Playback types ([`TransportState`](playback::TransportState),
//!   [`Timeline`](playback::Timeline), [`MediaUnitKind`](playback::MediaUnitKind),
//!   [`Volume`](playback::Volume))

pub mod error;
pub mod media;
pub mod playback;
