// SPDX-License-Identifier: MPL-2.0
//! Playback error types.

use thiserror::Error;

/// Why the native element refused to start playback.
///
/// Engagement failures are never fatal: the controller logs them and skips
/// to the next playlist item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngagementError {
    /// The host blocked playback, typically an autoplay policy.
    #[error("playback not allowed: {0}")]
    NotAllowed(String),

    /// The media or its codec cannot be played by the host.
    #[error("media not supported: {0}")]
    NotSupported(String),

    /// The play request was interrupted by a new load or a pause.
    #[error("playback aborted: {0}")]
    Aborted(String),

    /// Any other rejection, with the raw host message.
    #[error("{0}")]
    Other(String),
}

impl EngagementError {
    /// Categorizes a raw rejection message from the host.
    ///
    /// Recognizes the DOM exception names hosts report for media play
    /// rejections (`NotAllowedError`, `NotSupportedError`, `AbortError`)
    /// and common phrasings of the same conditions.
    #[must_use]
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("notallowed")
            || msg_lower.contains("not allowed")
            || msg_lower.contains("user didn't interact")
            || msg_lower.contains("autoplay")
        {
            return Self::NotAllowed(msg.to_string());
        }

        if msg_lower.contains("notsupported")
            || msg_lower.contains("not supported")
            || msg_lower.contains("no supported source")
            || msg_lower.contains("codec")
        {
            return Self::NotSupported(msg.to_string());
        }

        if msg_lower.contains("abort") || msg_lower.contains("interrupted") {
            return Self::Aborted(msg.to_string());
        }

        Self::Other(msg.to_string())
    }
}

/// Why a fullscreen request could not be honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FullscreenError {
    /// The current media has no element to put in fullscreen.
    #[error("current media has no fullscreen target")]
    NoTarget,

    /// The host exposes none of the fullscreen entry points.
    #[error("fullscreen is not available on this host")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_message_not_allowed() {
        let err = EngagementError::from_message(
            "NotAllowedError: play() failed because the user didn't interact with the document first.",
        );
        assert!(matches!(err, EngagementError::NotAllowed(_)));
    }

    #[test]
    fn from_message_not_supported() {
        let err = EngagementError::from_message("NotSupportedError: The element has no supported sources.");
        assert!(matches!(err, EngagementError::NotSupported(_)));
    }

    #[test]
    fn from_message_aborted() {
        let err = EngagementError::from_message(
            "AbortError: The play() request was interrupted by a new load request.",
        );
        assert!(matches!(err, EngagementError::Aborted(_)));
    }

    #[test]
    fn from_message_other_keeps_raw_text() {
        let err = EngagementError::from_message("decoder exploded");
        assert_eq!(err, EngagementError::Other("decoder exploded".to_string()));
        assert_eq!(err.to_string(), "decoder exploded");
    }

    #[test]
    fn display_includes_detail() {
        let err = EngagementError::NotSupported("h265".to_string());
        assert!(err.to_string().contains("h265"));
    }
}
