//! FFprobe-based metadata extraction.

use crate::duration::format_seconds_str;
use crate::{Error, MetadataExtractor, Result};
use autocaption_common::paths::{has_readable_tags, is_audio_file, is_video_file};
use autocaption_common::{MediaMetadata, MetadataField};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Deserialize)]
pub(crate) struct FfprobeOutput {
    #[serde(default)]
    format: FfprobeFormat,
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: String,
    width: Option<u32>,
    height: Option<u32>,
    duration: Option<String>,
}

/// Extracts metadata by running the `ffprobe` command-line tool.
#[derive(Debug, Clone)]
pub struct FfprobeExtractor {
    program: PathBuf,
}

impl FfprobeExtractor {
    /// Use `ffprobe` from `PATH`.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("ffprobe"),
        }
    }

    /// Use a specific ffprobe executable.
    pub fn with_path(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, path: &Path) -> Result<FfprobeOutput> {
        let output = Command::new(&self.program)
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(path)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found("ffprobe")
                } else {
                    Error::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::tool_failed("ffprobe", stderr.to_string()));
        }

        let json_str = String::from_utf8(output.stdout)
            .map_err(|e| Error::parse_error("ffprobe", format!("Invalid UTF-8: {}", e)))?;

        Ok(serde_json::from_str(&json_str)?)
    }
}

impl Default for FfprobeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataExtractor for FfprobeExtractor {
    fn extract(&self, path: &Path) -> Result<MediaMetadata> {
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }

        if !is_video_file(path) && !is_audio_file(path) {
            tracing::debug!("Not probing unsupported file type: {}", path.display());
            return Ok(MediaMetadata::default());
        }

        let output = self.run(path)?;
        Ok(metadata_from_output(path, output))
    }
}

/// Map ffprobe JSON onto the caption metadata keys.
///
/// Video containers contribute duration and the first video stream's
/// dimensions; audio files contribute duration only. Title and artist are
/// read for containers with readable tags.
pub(crate) fn metadata_from_output(path: &Path, output: FfprobeOutput) -> MediaMetadata {
    let mut meta = MediaMetadata::default();

    let duration = output.format.duration.as_deref().or_else(|| {
        output
            .streams
            .iter()
            .find_map(|s| s.duration.as_deref())
    });
    if let Some(duration) = duration.and_then(format_seconds_str) {
        meta.set(MetadataField::Duration, duration);
    }

    if is_video_file(path) {
        let dimensions = output
            .streams
            .iter()
            .filter(|s| s.codec_type == "video")
            .find_map(|s| Some((s.width?, s.height?)));
        if let Some((width, height)) = dimensions {
            meta = meta.with_dimensions(width, height);
        }
    }

    if has_readable_tags(path) {
        let tags = &output.format.tags;
        meta.set(MetadataField::Title, tag(tags, "title"));
        meta.set(MetadataField::Artist, tag(tags, "artist"));
    }

    meta
}

/// Case-insensitive tag lookup; containers disagree on tag key casing.
fn tag(tags: &HashMap<String, String>, key: &str) -> String {
    tags.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

/// Parse captured ffprobe JSON for a file path.
pub fn parse_ffprobe_json(path: &Path, json: &str) -> Result<MediaMetadata> {
    let output: FfprobeOutput = serde_json::from_str(json)?;
    Ok(metadata_from_output(path, output))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MKV_JSON: &str = r#"{
        "streams": [
            {"index": 0, "codec_type": "video", "codec_name": "hevc", "width": 3840, "height": 2160},
            {"index": 1, "codec_type": "audio", "codec_name": "eac3", "channels": 6}
        ],
        "format": {"filename": "a.mkv", "format_name": "matroska,webm", "duration": "5423.968000",
                   "tags": {"title": "Ignored For MKV"}}
    }"#;

    #[test]
    fn test_video_dimensions_and_duration() {
        let meta = parse_ffprobe_json(Path::new("a.mkv"), MKV_JSON).unwrap();
        assert_eq!(meta.get(MetadataField::Duration), "1:30:23");
        assert_eq!(meta.get(MetadataField::Width), "3840");
        assert_eq!(meta.get(MetadataField::Height), "2160");
        assert_eq!(meta.get(MetadataField::Resolution), "3840x2160");
        assert_eq!(meta.title, None);
    }

    #[test]
    fn test_mp4_tags() {
        let json = r#"{
            "streams": [{"codec_type": "video", "width": 1280, "height": 720}],
            "format": {"duration": "61.5", "tags": {"TITLE": "Clip", "artist": "Someone"}}
        }"#;
        let meta = parse_ffprobe_json(Path::new("clip.MP4"), json).unwrap();
        assert_eq!(meta.get(MetadataField::Title), "Clip");
        assert_eq!(meta.get(MetadataField::Artist), "Someone");
        assert_eq!(meta.get(MetadataField::Resolution), "1280x720");
        assert_eq!(meta.get(MetadataField::Duration), "0:01:01");
    }

    #[test]
    fn test_mp3_has_no_dimensions() {
        let json = r#"{
            "streams": [
                {"codec_type": "audio", "codec_name": "mp3"},
                {"codec_type": "video", "codec_name": "mjpeg", "width": 500, "height": 500}
            ],
            "format": {"duration": "215.2", "tags": {"title": "Song"}}
        }"#;
        let meta = parse_ffprobe_json(Path::new("song.mp3"), json).unwrap();
        assert_eq!(meta.get(MetadataField::Duration), "0:03:35");
        assert_eq!(meta.get(MetadataField::Title), "Song");
        assert_eq!(meta.get(MetadataField::Artist), "");
        assert_eq!(meta.width, None);
        assert_eq!(meta.resolution, None);
    }

    #[test]
    fn test_stream_duration_fallback() {
        let json = r#"{"streams": [{"codec_type": "video", "duration": "10.0"}], "format": {}}"#;
        let meta = parse_ffprobe_json(Path::new("a.webm"), json).unwrap();
        assert_eq!(meta.get(MetadataField::Duration), "0:00:10");
        assert_eq!(meta.resolution, None);
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_ffprobe_json(Path::new("a.mkv"), "not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = FfprobeExtractor::new()
            .extract(Path::new("/nonexistent/file.mkv"))
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_unsupported_extension_is_empty() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        let meta = FfprobeExtractor::with_path("/nonexistent/ffprobe")
            .extract(file.path())
            .unwrap();
        assert!(meta.is_empty());
    }

    #[test]
    fn test_missing_tool() {
        let file = tempfile::Builder::new().suffix(".mkv").tempfile().unwrap();
        let err = FfprobeExtractor::with_path("/nonexistent/ffprobe")
            .extract(file.path())
            .unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }
}
