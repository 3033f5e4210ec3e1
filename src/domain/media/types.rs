// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.
//! A [`MediaItem`] never stores its kind: the kind is always derived from the
//! URL through [`classify`], so the playlist source stays the single owner of
//! the data.

use serde::{Deserialize, Serialize};

/// Supported file extensions, lowercase and without the leading dot.
pub mod extensions {
    /// Extensions played as timed still images.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

    /// Extensions handed to the native video element.
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg"];
}

/// Title shown when a media item has none.
pub const UNTITLED: &str = "Untitled";

/// Description shown when a media item has none.
pub const NO_DESCRIPTION: &str = "No description available";

/// Represents the playback kind of a media URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Still image, played by the synthetic clock.
    Image,
    /// Video, played by the native element.
    Video,
    /// Anything else, including empty URLs.
    Unknown,
}

impl MediaKind {
    /// Returns true for [`MediaKind::Image`].
    #[must_use]
    pub fn is_image(self) -> bool {
        matches!(self, Self::Image)
    }

    /// Returns true for [`MediaKind::Video`].
    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, Self::Video)
    }
}

/// Classifies a media URL by its file extension.
///
/// Matching is a case-insensitive suffix match against
/// [`extensions::IMAGE_EXTENSIONS`] and [`extensions::VIDEO_EXTENSIONS`].
/// Query strings and fragments are not stripped, so `a.jpg?v=2` is
/// [`MediaKind::Unknown`].
///
/// # Example
///
/// ```
/// use reel_player::domain::media::{classify, MediaKind};
///
/// assert_eq!(classify("photos/Beach.JPG"), MediaKind::Image);
/// assert_eq!(classify("clips/intro.webm"), MediaKind::Video);
/// assert_eq!(classify(""), MediaKind::Unknown);
/// ```
#[must_use]
pub fn classify(url: &str) -> MediaKind {
    if url.is_empty() {
        return MediaKind::Unknown;
    }

    let lower = url.to_lowercase();
    let has_extension = |candidates: &[&str]| {
        candidates.iter().any(|ext| {
            lower
                .strip_suffix(ext)
                .is_some_and(|stem| stem.ends_with('.'))
        })
    };

    if has_extension(extensions::IMAGE_EXTENSIONS) {
        MediaKind::Image
    } else if has_extension(extensions::VIDEO_EXTENSIONS) {
        MediaKind::Video
    } else {
        MediaKind::Unknown
    }
}

/// One playlist entry, owned by the playlist provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Location of the media, used for classification and loading.
    pub url: String,

    /// Optional display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Optional description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl MediaItem {
    /// Creates an item with only a URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            text: None,
        }
    }

    /// Sets the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns the classified kind of this item.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        classify(&self.url)
    }

    /// Returns the title, falling back to [`UNTITLED`].
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    /// Returns the description, falling back to [`NO_DESCRIPTION`].
    #[must_use]
    pub fn description(&self) -> &str {
        self.text.as_deref().unwrap_or(NO_DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_image_formats() {
        for url in ["a.jpg", "a.jpeg", "a.png", "a.gif", "a.bmp", "a.webp"] {
            assert_eq!(classify(url), MediaKind::Image, "{url}");
        }
    }

    #[test]
    fn test_detect_video_formats() {
        for url in ["a.mp4", "a.webm", "a.ogg"] {
            assert_eq!(classify(url), MediaKind::Video, "{url}");
        }
    }

    #[test]
    fn test_case_insensitivity() {
        assert_eq!(classify("HOLIDAY.PNG"), MediaKind::Image);
        assert_eq!(classify("Clip.Mp4"), MediaKind::Video);
    }

    #[test]
    fn test_detect_unsupported_format() {
        assert_eq!(classify("notes.txt"), MediaKind::Unknown);
        assert_eq!(classify("movie.mkv"), MediaKind::Unknown);
        assert_eq!(classify("photo.jpg?size=large"), MediaKind::Unknown);
    }

    #[test]
    fn test_extension_must_follow_a_dot() {
        assert_eq!(classify("backup_jpg"), MediaKind::Unknown);
        assert_eq!(classify("dogpng"), MediaKind::Unknown);
    }

    #[test]
    fn test_empty_url_is_unknown() {
        assert_eq!(classify(""), MediaKind::Unknown);
    }

    #[test]
    fn test_url_with_path_segments() {
        assert_eq!(
            classify("https://cdn.example.com/assets/videos/intro.mp4"),
            MediaKind::Video
        );
    }

    #[test]
    fn test_display_fallbacks() {
        let bare = MediaItem::new("a.jpg");
        assert_eq!(bare.display_title(), UNTITLED);
        assert_eq!(bare.description(), NO_DESCRIPTION);

        let described = MediaItem::new("a.jpg").with_title("Beach").with_text("Sunset");
        assert_eq!(described.display_title(), "Beach");
        assert_eq!(described.description(), "Sunset");
    }

    #[test]
    fn test_all_extensions_unique() {
        for ext in extensions::IMAGE_EXTENSIONS {
            assert!(!extensions::VIDEO_EXTENSIONS.contains(ext));
        }
    }
}
