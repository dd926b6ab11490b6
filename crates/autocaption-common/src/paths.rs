//! Path utilities for classifying local media files by extension.
//!
//! These are used when a caption is built for a file on disk rather than for
//! a platform post, and to decide which downloads are worth probing.

use std::path::Path;

/// Video containers whose duration and dimensions can be probed.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "webm"];

/// Audio files whose duration and tags can be probed.
const AUDIO_EXTENSIONS: &[&str] = &["mp3"];

/// Containers whose title/artist tags are read.
const TAGGED_EXTENSIONS: &[&str] = &["mp4", "mp3"];

/// Extension to MIME type table for local files.
const MIME_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("mkv", "video/x-matroska"),
    ("webm", "video/webm"),
    ("avi", "video/x-msvideo"),
    ("mov", "video/quicktime"),
    ("mp3", "audio/mpeg"),
    ("m4a", "audio/mp4"),
    ("flac", "audio/flac"),
    ("ogg", "audio/ogg"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("srt", "application/x-subrip"),
];

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a path is a probeable video container.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use autocaption_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("movie.MKV")));
/// assert!(!is_video_file(Path::new("song.mp3")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    lowercase_extension(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if a path is a probeable audio file.
pub fn is_audio_file(path: &Path) -> bool {
    lowercase_extension(path)
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if title/artist tags are read for this path.
pub fn has_readable_tags(path: &Path) -> bool {
    lowercase_extension(path)
        .map(|ext| TAGGED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Guess a MIME type from the extension, `application/octet-stream` when unknown.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use autocaption_common::paths::guess_mime_type;
///
/// assert_eq!(guess_mime_type(Path::new("a.mkv")), "video/x-matroska");
/// assert_eq!(guess_mime_type(Path::new("noext")), "application/octet-stream");
/// ```
pub fn guess_mime_type(path: &Path) -> &'static str {
    lowercase_extension(path)
        .and_then(|ext| {
            MIME_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or("application/octet-stream")
}
