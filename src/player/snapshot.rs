// SPDX-License-Identifier: MPL-2.0
//! Read-only view of the player for the UI.

use super::format::format_time;
use crate::domain::playback::{MediaUnitKind, Timeline, TransportState, Volume};

/// Everything a control bar needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSnapshot {
    pub transport: TransportState,
    pub is_playing: bool,
    pub is_muted: bool,
    pub volume: f32,
    pub elapsed: f64,
    pub duration_secs: f64,
    pub progress: f64,
    pub current_index: Option<usize>,
    pub is_transitioning: bool,
    pub unit: Option<MediaUnitKind>,
    pub elapsed_text: String,
    pub duration_text: String,
}

impl PlaybackSnapshot {
    pub(crate) fn capture(
        transport: TransportState,
        timeline: &Timeline,
        volume: Volume,
        is_muted: bool,
        current_index: Option<usize>,
        unit: Option<MediaUnitKind>,
        is_transitioning: bool,
    ) -> Self {
        Self {
            transport,
            is_playing: transport.is_playing(),
            is_muted,
            volume: volume.value(),
            elapsed: timeline.elapsed(),
            duration_secs: timeline.duration(),
            progress: timeline.progress(),
            current_index,
            is_transitioning,
            unit,
            elapsed_text: format_time(timeline.elapsed()).to_string(),
            duration_text: format_time(timeline.duration()).to_string(),
        }
    }
}

impl Default for PlaybackSnapshot {
    /// The snapshot of an empty player.
    fn default() -> Self {
        Self::capture(
            TransportState::Stopped,
            &Timeline::unknown(),
            Volume::default(),
            true,
            None,
            None,
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_has_no_index_and_is_muted() {
        let snapshot = PlaybackSnapshot::default();
        assert_eq!(snapshot.current_index, None);
        assert!(snapshot.is_muted);
        assert!(!snapshot.is_playing);
        assert_eq!(snapshot.duration_text, "0:00");
    }

    #[test]
    fn capture_formats_times() {
        let mut timeline = Timeline::new(16.0);
        timeline.seek(9.5);
        let snapshot = PlaybackSnapshot::capture(
            TransportState::Playing,
            &timeline,
            Volume::new(0.5),
            false,
            Some(3),
            Some(MediaUnitKind::StandaloneImage),
            false,
        );
        assert!(snapshot.is_playing);
        assert_eq!(snapshot.elapsed_text, "0:09");
        assert_eq!(snapshot.duration_text, "0:16");
        assert_eq!(snapshot.current_index, Some(3));
    }
}
