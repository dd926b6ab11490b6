//! Core type definitions for media posts and their metadata.
//!
//! A channel post carries one of a fixed set of media payloads. Each payload
//! maps deterministically onto a [`FileDescriptor`], which together with the
//! [`MediaMetadata`] extracted from the file's content feeds the caption engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied facts about a media file, distinct from its content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File name as posted. May be empty.
    #[serde(default)]
    pub name: String,
    /// Size in bytes. Zero when the platform did not report one.
    #[serde(default)]
    pub size: u64,
    /// Caption the post was published with.
    #[serde(default)]
    pub original_caption: String,
    /// MIME type reported by the platform.
    #[serde(default)]
    pub mime_type: String,
}

impl FileDescriptor {
    /// Create a descriptor with a name and size and no caption or MIME type.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            ..Default::default()
        }
    }

    /// Set the original caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.original_caption = caption.into();
        self
    }

    /// Set the MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}

/// Keys of the metadata mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataField {
    Duration,
    Width,
    Height,
    Resolution,
    Title,
    Artist,
}

impl MetadataField {
    /// Every metadata key, in display order.
    pub const ALL: [MetadataField; 6] = [
        Self::Duration,
        Self::Width,
        Self::Height,
        Self::Resolution,
        Self::Title,
        Self::Artist,
    ];
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duration => write!(f, "duration"),
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
            Self::Resolution => write!(f, "resolution"),
            Self::Title => write!(f, "title"),
            Self::Artist => write!(f, "artist"),
        }
    }
}

/// Technical and tag attributes extracted from a file's content.
///
/// Every field is optional; an extractor fills whatever it could read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

impl MediaMetadata {
    /// Value of a field, or `""` when absent.
    pub fn get(&self, field: MetadataField) -> &str {
        let value = match field {
            MetadataField::Duration => &self.duration,
            MetadataField::Width => &self.width,
            MetadataField::Height => &self.height,
            MetadataField::Resolution => &self.resolution,
            MetadataField::Title => &self.title,
            MetadataField::Artist => &self.artist,
        };
        value.as_deref().unwrap_or("")
    }

    /// Set a field.
    pub fn set(&mut self, field: MetadataField, value: impl Into<String>) {
        let slot = match field {
            MetadataField::Duration => &mut self.duration,
            MetadataField::Width => &mut self.width,
            MetadataField::Height => &mut self.height,
            MetadataField::Resolution => &mut self.resolution,
            MetadataField::Title => &mut self.title,
            MetadataField::Artist => &mut self.artist,
        };
        *slot = Some(value.into());
    }

    /// Builder form of [`MediaMetadata::set`].
    pub fn with(mut self, field: MetadataField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fill width, height and the derived `WxH` resolution.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width.to_string());
        self.height = Some(height.to_string());
        self.resolution = Some(format!("{width}x{height}"));
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        MetadataField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// File attributes shared by the file-like media payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Media payload of a channel post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaKind {
    Video(MediaFile),
    Document(MediaFile),
    Audio(MediaFile),
    /// Photos carry neither a file name nor a MIME type.
    Photo {
        #[serde(default)]
        file_size: Option<u64>,
    },
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video(_) => write!(f, "video"),
            Self::Document(_) => write!(f, "document"),
            Self::Audio(_) => write!(f, "audio"),
            Self::Photo { .. } => write!(f, "photo"),
        }
    }
}

/// A media post as delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMessage {
    pub media: MediaKind,
    #[serde(default)]
    pub caption: Option<String>,
}

impl MediaMessage {
    /// Build the file descriptor for this post.
    pub fn descriptor(&self) -> FileDescriptor {
        let original_caption = self.caption.clone().unwrap_or_default();
        match &self.media {
            MediaKind::Video(file) | MediaKind::Document(file) | MediaKind::Audio(file) => {
                FileDescriptor {
                    name: file.file_name.clone().unwrap_or_default(),
                    size: file.file_size.unwrap_or(0),
                    original_caption,
                    mime_type: file.mime_type.clone().unwrap_or_default(),
                }
            }
            MediaKind::Photo { file_size } => FileDescriptor {
                name: String::new(),
                size: file_size.unwrap_or(0),
                original_caption,
                mime_type: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_missing_fields_are_empty() {
        let meta = MediaMetadata::default().with(MetadataField::Title, "Song");
        assert_eq!(meta.get(MetadataField::Title), "Song");
        assert_eq!(meta.get(MetadataField::Duration), "");
        assert!(!meta.is_empty());
        assert!(MediaMetadata::default().is_empty());
    }

    #[test]
    fn test_metadata_dimensions() {
        let meta = MediaMetadata::default().with_dimensions(1920, 1080);
        assert_eq!(meta.get(MetadataField::Width), "1920");
        assert_eq!(meta.get(MetadataField::Height), "1080");
        assert_eq!(meta.get(MetadataField::Resolution), "1920x1080");
    }

    #[test]
    fn test_metadata_serialization_skips_absent() {
        let meta = MediaMetadata::default().with(MetadataField::Duration, "0:01:30");
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"duration":"0:01:30"}"#);
    }

    #[test]
    fn test_video_descriptor() {
        let msg = MediaMessage {
            media: MediaKind::Video(MediaFile {
                file_name: Some("Movie.2021.mkv".to_string()),
                file_size: Some(2048),
                mime_type: Some("video/x-matroska".to_string()),
            }),
            caption: Some("hello".to_string()),
        };
        let file = msg.descriptor();
        assert_eq!(file.name, "Movie.2021.mkv");
        assert_eq!(file.size, 2048);
        assert_eq!(file.original_caption, "hello");
        assert_eq!(file.mime_type, "video/x-matroska");
    }

    #[test]
    fn test_document_without_fields() {
        let msg = MediaMessage {
            media: MediaKind::Document(MediaFile::default()),
            caption: None,
        };
        assert_eq!(msg.descriptor(), FileDescriptor::default());
    }

    #[test]
    fn test_photo_descriptor() {
        let msg = MediaMessage {
            media: MediaKind::Photo {
                file_size: Some(10),
            },
            caption: Some("pic".to_string()),
        };
        let file = msg.descriptor();
        assert_eq!(file.name, "");
        assert_eq!(file.size, 10);
        assert_eq!(file.mime_type, "");
        assert_eq!(file.original_caption, "pic");
    }

    #[test]
    fn test_media_kind_deserialization() {
        let json = r#"{"media":{"kind":"audio","file_name":"a.mp3"},"caption":null}"#;
        let msg: MediaMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.media.to_string(), "audio");
        assert_eq!(msg.descriptor().name, "a.mp3");

        let json = r#"{"media":{"kind":"photo"}}"#;
        let msg: MediaMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.media.to_string(), "photo");
    }
}
