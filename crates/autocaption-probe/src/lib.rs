//! # autocaption-probe
//!
//! Reads technical and tag metadata from downloaded media files.
//!
//! Extraction is a collaborator of the caption engine, not part of it: any
//! failure here must degrade to empty metadata instead of aborting a caption
//! update. [`extract_or_default`] implements that rule for callers.
//!
//! ## Example
//!
//! ```no_run
//! use autocaption_probe::{extract_or_default, FfprobeExtractor};
//! use std::path::Path;
//!
//! let meta = extract_or_default(&FfprobeExtractor::new(), Path::new("/tmp/movie.mkv"));
//! println!("Resolution: {:?}", meta.resolution);
//! ```

mod duration;
mod error;
mod ffprobe;
pub mod tools;

pub use autocaption_common::MediaMetadata;
pub use duration::format_duration;
pub use error::{Error, Result};
pub use ffprobe::{parse_ffprobe_json, FfprobeExtractor};
pub use tools::{check_tool_with_arg, check_tools, check_tools_with, get_tool_path, ToolInfo};

use std::path::Path;

/// Source of media metadata for a file on disk.
pub trait MetadataExtractor: Send + Sync {
    /// Read whatever metadata the file exposes.
    fn extract(&self, path: &Path) -> Result<MediaMetadata>;
}

/// Extractor that never reads anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExtractor;

impl MetadataExtractor for NoopExtractor {
    fn extract(&self, _path: &Path) -> Result<MediaMetadata> {
        Ok(MediaMetadata::default())
    }
}

/// Extract metadata, logging and swallowing any failure.
pub fn extract_or_default(extractor: &dyn MetadataExtractor, path: &Path) -> MediaMetadata {
    match extractor.extract(path) {
        Ok(meta) => meta,
        Err(e) => {
            tracing::warn!("Metadata extraction failed for {}: {}", path.display(), e);
            MediaMetadata::default()
        }
    }
}
