// SPDX-License-Identifier: MPL-2.0
//! Playback domain types.
//!
//! This module groups the value objects the transport controller works with:
//! the transport state, the unit timeline, the unit kinds and the clamped
//! newtypes for volume and timing.

mod newtypes;
mod state;
mod timeline;
mod unit;

pub use newtypes::{
    image_duration_bounds, tick_bounds, volume_bounds, ImageDuration, TickInterval, Volume,
};
pub use state::TransportState;
pub use timeline::Timeline;
pub use unit::{MediaUnitKind, SequenceWindow};
