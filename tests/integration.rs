// SPDX-License-Identifier: MPL-2.0
use reel_player::application::port::PlaylistProvider;
use reel_player::config::{self, Config, DEFAULT_IMAGE_DURATION_SECS};
use reel_player::domain::media::{MediaItem, MediaKind};
use reel_player::error::Error;
use reel_player::infrastructure::{self, PlaylistFile};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_settings_file_drives_playback_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings_path = dir.path().join("settings.toml");

    fs::write(
        &settings_path,
        "[playback]\nautoplay = true\nimage_duration_secs = 2.5\nsequence_length = 0\n\n[audio]\nvolume = 0.4\n",
    )
    .expect("Failed to write settings file");

    let (loaded, warning) = config::load_or_default(&settings_path);
    assert!(warning.is_none());

    let settings = loaded.playback_settings();
    assert!(settings.autoplay);
    assert!((settings.image_duration.secs() - 2.5).abs() < f64::EPSILON);
    assert_eq!(settings.sequence_length, 0);
    assert_eq!(settings.tick_interval.duration(), Duration::from_secs(1));
    assert!((loaded.volume().value() - 0.4).abs() < f32::EPSILON);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_broken_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings_path = dir.path().join("settings.toml");
    fs::write(&settings_path, "[playback\nautoplay = ").expect("Failed to write settings file");

    let (loaded, warning) = config::load_or_default(&settings_path);
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
    assert!(
        (loaded.playback_settings().image_duration.secs() - DEFAULT_IMAGE_DURATION_SECS).abs()
            < f64::EPSILON
    );
}

#[test]
fn test_playlist_file_round_trip_through_open() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let playlist_path = dir.path().join("show.toml");

    let file = PlaylistFile {
        media: vec![
            MediaItem::new("intro.MP4").with_title("Intro"),
            MediaItem::new("one.jpg").with_text("First"),
            MediaItem::new("readme.txt"),
        ],
    };
    infrastructure::save_playlist(&file, &playlist_path).expect("Failed to save playlist");

    let playlist = infrastructure::open(&playlist_path).expect("Failed to open playlist");
    let kinds: Vec<_> = playlist.media_list().iter().map(MediaItem::kind).collect();
    assert_eq!(kinds, [MediaKind::Video, MediaKind::Image, MediaKind::Unknown]);
    assert_eq!(playlist.media_list()[1].description(), "First");
    assert_eq!(playlist.media_list()[2].display_title(), "Untitled");
}

#[test]
fn test_invalid_playlist_is_a_playlist_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let playlist_path = dir.path().join("show.toml");
    fs::write(&playlist_path, "media = 5").expect("Failed to write playlist");

    let err = infrastructure::open(&playlist_path).expect_err("invalid playlist");
    assert!(matches!(err, Error::Playlist(_)));
    assert!(err.to_string().starts_with("Playlist Error:"));
}
