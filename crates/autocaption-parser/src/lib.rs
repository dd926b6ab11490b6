//! # autocaption-parser
//!
//! Extracts caption-relevant attributes from a media filename.
//!
//! Each attribute is found by an independent search with one fixed pattern;
//! the leftmost match is kept verbatim. Attributes that do not appear in the
//! name are empty strings, so [`analyze`] never fails.
//!
//! ## Quick Start
//!
//! ```
//! use autocaption_parser::analyze;
//!
//! let attrs = analyze("Movie.2021.1080p.Hindi.S01E05.mkv");
//!
//! assert_eq!(attrs.year, "2021");
//! assert_eq!(attrs.quality, "1080p");
//! assert_eq!(attrs.language, "Hindi");
//! assert_eq!(attrs.season, "S01");
//! assert_eq!(attrs.episode, "E05");
//! assert_eq!(attrs.extension, "mkv");
//! ```

pub mod model;
mod patterns;

pub use model::{Field, FilenameAttributes};

/// Extract attributes from a filename.
///
/// The input may be empty or lack an extension; missing attributes are
/// returned as empty strings.
///
/// # Examples
///
/// ```
/// use autocaption_parser::analyze;
///
/// let attrs = analyze("noext");
/// assert_eq!(attrs.extension, "");
/// assert!(attrs.is_empty());
/// ```
pub fn analyze(filename: &str) -> FilenameAttributes {
    FilenameAttributes {
        language: patterns::find(&patterns::LANGUAGE, filename),
        year: patterns::find(&patterns::YEAR, filename),
        quality: patterns::find(&patterns::QUALITY, filename),
        season: patterns::find(&patterns::SEASON, filename),
        episode: patterns::find(&patterns::EPISODE, filename),
        extension: extension(filename),
    }
}

/// Text after the last `.`, or empty when there is none.
fn extension(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_string())
        .unwrap_or_default()
}
