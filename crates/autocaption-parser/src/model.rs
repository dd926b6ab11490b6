//! Attributes extracted from a filename.

use std::fmt;

/// Structured attributes found in a filename.
///
/// Every field is independent and empty when the filename does not contain it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilenameAttributes {
    pub language: String,
    pub year: String,
    pub quality: String,
    pub season: String,
    pub episode: String,
    pub extension: String,
}

impl FilenameAttributes {
    /// Value of one attribute.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Language => &self.language,
            Field::Year => &self.year,
            Field::Quality => &self.quality,
            Field::Season => &self.season,
            Field::Episode => &self.episode,
            Field::Extension => &self.extension,
        }
    }

    /// True when nothing was found.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Names of the filename attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    Language,
    Year,
    Quality,
    Season,
    Episode,
    Extension,
}

impl Field {
    /// All attributes in display order.
    pub const ALL: [Field; 6] = [
        Self::Language,
        Self::Year,
        Self::Quality,
        Self::Season,
        Self::Episode,
        Self::Extension,
    ];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Language => "language",
            Self::Year => "year",
            Self::Quality => "quality",
            Self::Season => "season",
            Self::Episode => "episode",
            Self::Extension => "extension",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_field() {
        let attrs = FilenameAttributes {
            year: "2020".into(),
            extension: "mp4".into(),
            ..Default::default()
        };
        assert_eq!(attrs.get(Field::Year), "2020");
        assert_eq!(attrs.get(Field::Extension), "mp4");
        assert_eq!(attrs.get(Field::Quality), "");
        assert!(!attrs.is_empty());
    }

    #[test]
    fn test_field_display() {
        let names: Vec<String> = Field::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(
            names,
            ["language", "year", "quality", "season", "episode", "extension"]
        );
    }
}
