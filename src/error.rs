// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Crate-level error.
///
/// Playback itself never fails: engagement failures degrade to a skip,
/// out-of-range input to a clamp. These variants cover the surroundings:
/// files, configuration and the service channel.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Playlist Error: {0}")]
    Playlist(String),

    #[error("Player service is no longer running")]
    ServiceClosed,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
