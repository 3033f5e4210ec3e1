// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! - [`MediaItem`]: one playlist entry
//! - [`MediaKind`]: the derived playback kind
//! - [`classify`]: URL to kind

mod types;

pub use types::{classify, extensions, MediaItem, MediaKind, NO_DESCRIPTION, UNTITLED};
