//! The placeholder table a caption template is rendered against.

use super::greeting::Greeting;
use autocaption_common::size::human_readable_size;
use autocaption_common::{FileDescriptor, MediaMetadata, MetadataField};
use autocaption_parser::FilenameAttributes;

/// A recognized placeholder token.
///
/// [`Placeholder::ALL`] is the substitution order; sequential rendering
/// depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Filename,
    Filesize,
    Caption,
    Language,
    Year,
    Quality,
    Season,
    Episode,
    Duration,
    Height,
    Width,
    Ext,
    Resolution,
    MimeType,
    Title,
    Artist,
    Wish,
}

impl Placeholder {
    pub const ALL: [Placeholder; 17] = [
        Self::Filename,
        Self::Filesize,
        Self::Caption,
        Self::Language,
        Self::Year,
        Self::Quality,
        Self::Season,
        Self::Episode,
        Self::Duration,
        Self::Height,
        Self::Width,
        Self::Ext,
        Self::Resolution,
        Self::MimeType,
        Self::Title,
        Self::Artist,
        Self::Wish,
    ];

    /// Literal token text, braces included.
    pub fn token(self) -> &'static str {
        match self {
            Self::Filename => "{filename}",
            Self::Filesize => "{filesize}",
            Self::Caption => "{caption}",
            Self::Language => "{language}",
            Self::Year => "{year}",
            Self::Quality => "{quality}",
            Self::Season => "{season}",
            Self::Episode => "{episode}",
            Self::Duration => "{duration}",
            Self::Height => "{height}",
            Self::Width => "{width}",
            Self::Ext => "{ext}",
            Self::Resolution => "{resolution}",
            Self::MimeType => "{mime_type}",
            Self::Title => "{title}",
            Self::Artist => "{artist}",
            Self::Wish => "{wish}",
        }
    }

    /// One-line description for help output.
    pub fn description(self) -> &'static str {
        match self {
            Self::Filename => "File name",
            Self::Filesize => "File size",
            Self::Caption => "Original caption",
            Self::Language => "Language from filename",
            Self::Year => "Year from filename",
            Self::Quality => "Quality from filename",
            Self::Season => "Season from filename",
            Self::Episode => "Episode from filename",
            Self::Duration => "Duration from video",
            Self::Height => "Video height",
            Self::Width => "Video width",
            Self::Ext => "File extension",
            Self::Resolution => "Video resolution",
            Self::MimeType => "MIME type",
            Self::Title => "Audio title",
            Self::Artist => "Audio artist",
            Self::Wish => "Time-based greeting",
        }
    }
}

/// Resolved values for every placeholder, in substitution order.
#[derive(Debug, Clone)]
pub struct VariableTable {
    entries: Vec<(Placeholder, String)>,
}

impl VariableTable {
    /// Resolve every placeholder for one file at one hour of the day.
    pub fn build(file: &FileDescriptor, metadata: &MediaMetadata, hour: u32) -> Self {
        let attrs = autocaption_parser::analyze(&file.name);
        let entries = Placeholder::ALL
            .iter()
            .map(|p| (*p, resolve(*p, file, metadata, &attrs, hour)))
            .collect();
        Self { entries }
    }

    /// Resolved value of a placeholder.
    pub fn get(&self, placeholder: Placeholder) -> &str {
        self.entries
            .iter()
            .find(|(p, _)| *p == placeholder)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

fn resolve(
    placeholder: Placeholder,
    file: &FileDescriptor,
    metadata: &MediaMetadata,
    attrs: &FilenameAttributes,
    hour: u32,
) -> String {
    match placeholder {
        Placeholder::Filename => file.name.clone(),
        Placeholder::Filesize => human_readable_size(file.size),
        Placeholder::Caption => file.original_caption.clone(),
        Placeholder::Language => attrs.language.clone(),
        Placeholder::Year => attrs.year.clone(),
        Placeholder::Quality => attrs.quality.clone(),
        Placeholder::Season => attrs.season.clone(),
        Placeholder::Episode => attrs.episode.clone(),
        Placeholder::Duration => metadata.get(MetadataField::Duration).to_string(),
        Placeholder::Height => metadata.get(MetadataField::Height).to_string(),
        Placeholder::Width => metadata.get(MetadataField::Width).to_string(),
        Placeholder::Ext => attrs.extension.clone(),
        Placeholder::Resolution => metadata.get(MetadataField::Resolution).to_string(),
        Placeholder::MimeType => file.mime_type.clone(),
        Placeholder::Title => metadata.get(MetadataField::Title).to_string(),
        Placeholder::Artist => metadata.get(MetadataField::Artist).to_string(),
        Placeholder::Wish => Greeting::from_hour(hour).to_string(),
    }
}
