// SPDX-License-Identifier: MPL-2.0
//! This module handles the player configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[playback]` - Autoplay, image timing, clock periods, sequences
//! - `[audio]` - Initial volume
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `REEL_PLAYER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use reel_player::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.playback.autoplay = Some(true);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::playback::{ImageDuration, TickInterval, Volume};
use crate::error::{Error, Result};
use crate::player::PlaybackSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ReelPlayer";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "REEL_PLAYER_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Start playing whenever a new unit is loaded.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Display time of one image, in seconds.
    #[serde(
        default = "default_image_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_duration_secs: Option<f64>,

    /// Period of the image clock, in milliseconds.
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,

    /// Period of the video position sampling, in milliseconds.
    #[serde(
        default = "default_video_sample_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_sample_interval_ms: Option<u64>,

    /// Number of trailing images played as one sequence (0 disables).
    #[serde(
        default = "default_sequence_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub sequence_length: Option<usize>,

    /// Delay before a sequence advances to its next member, in milliseconds.
    #[serde(
        default = "default_transition_debounce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_debounce_ms: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            image_duration_secs: default_image_duration_secs(),
            tick_interval_ms: default_tick_interval_ms(),
            video_sample_interval_ms: default_video_sample_interval_ms(),
            sequence_length: default_sequence_length(),
            transition_debounce_ms: default_transition_debounce_ms(),
        }
    }
}

/// Audio settings.
///
/// Playback always starts muted; `volume` is the level restored on unmute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioConfig {
    /// Playback volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Player configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Playback settings.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Audio settings.
    #[serde(default)]
    pub audio: AudioConfig,
}

impl Config {
    /// Resolves the playback settings, clamping every value into range.
    #[must_use]
    pub fn playback_settings(&self) -> PlaybackSettings {
        let playback = &self.playback;
        PlaybackSettings {
            autoplay: playback.autoplay.unwrap_or(DEFAULT_AUTOPLAY),
            image_duration: ImageDuration::from_secs(
                playback
                    .image_duration_secs
                    .unwrap_or(DEFAULT_IMAGE_DURATION_SECS),
            ),
            tick_interval: TickInterval::from_millis(
                playback.tick_interval_ms.unwrap_or(DEFAULT_TICK_INTERVAL_MS),
            ),
            video_sample_interval: TickInterval::from_millis(
                playback
                    .video_sample_interval_ms
                    .unwrap_or(DEFAULT_VIDEO_SAMPLE_INTERVAL_MS),
            ),
            sequence_length: playback
                .sequence_length
                .unwrap_or(DEFAULT_SEQUENCE_LENGTH)
                .min(MAX_SEQUENCE_LENGTH),
            transition_debounce: Duration::from_millis(
                playback
                    .transition_debounce_ms
                    .unwrap_or(DEFAULT_TRANSITION_DEBOUNCE_MS)
                    .min(MAX_TRANSITION_DEBOUNCE_MS),
            ),
        }
    }

    /// Resolves the initial volume.
    #[must_use]
    pub fn volume(&self) -> Volume {
        Volume::new(self.audio.volume.unwrap_or(DEFAULT_VOLUME))
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

#[allow(clippy::unnecessary_wraps)]
fn default_image_duration_secs() -> Option<f64> {
    Some(DEFAULT_IMAGE_DURATION_SECS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_video_sample_interval_ms() -> Option<u64> {
    Some(DEFAULT_VIDEO_SAMPLE_INTERVAL_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_sequence_length() -> Option<usize> {
    Some(DEFAULT_SEQUENCE_LENGTH)
}

#[allow(clippy::unnecessary_wraps)]
fn default_transition_debounce_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_DEBOUNCE_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

// =============================================================================
// Load / Save
// =============================================================================

/// Returns the config directory: `REEL_PLAYER_CONFIG_DIR`, else the
/// platform config directory.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, an unreadable or invalid
/// file yields defaults plus a warning message for the caller to log.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    match get_default_config_path() {
        Some(path) if path.exists() => load_or_default(&path),
        _ => (Config::default(), None),
    }
}

/// Loads the configuration at `path`, falling back to defaults with a
/// warning when the file cannot be used.
#[must_use]
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!(
                "Ignoring config file {}: {err}",
                path.display()
            )),
        ),
    }
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directories or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
