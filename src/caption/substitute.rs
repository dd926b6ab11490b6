//! Placeholder substitution strategies.

use super::variables::VariableTable;
use serde::{Deserialize, Serialize};

/// How placeholder tokens are replaced in a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionMode {
    /// Replace one placeholder at a time, in table order, over the
    /// progressively rewritten string.
    ///
    /// A resolved value that contains the text of a placeholder later in the
    /// table is substituted again; one containing an earlier placeholder is
    /// left as is. Stored templates may rely on this, so it stays the default.
    #[default]
    Sequential,
    /// Scan the template once and never re-scan emitted values.
    SinglePass,
}

impl SubstitutionMode {
    pub fn apply(self, template: &str, table: &VariableTable) -> String {
        match self {
            Self::Sequential => substitute_sequential(template, table),
            Self::SinglePass => substitute_single_pass(template, table),
        }
    }
}

fn substitute_sequential(template: &str, table: &VariableTable) -> String {
    let mut result = template.to_string();
    for (placeholder, value) in table.iter() {
        result = result.replace(placeholder.token(), value);
    }
    result
}

fn substitute_single_pass(template: &str, table: &VariableTable) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        result.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match table.iter().find(|(p, _)| tail.starts_with(p.token())) {
            Some((placeholder, value)) => {
                result.push_str(value);
                rest = &tail[placeholder.token().len()..];
            }
            None => {
                result.push('{');
                rest = &tail[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use autocaption_common::{FileDescriptor, MediaMetadata};

    fn table(name: &str, caption: &str) -> VariableTable {
        let file = FileDescriptor::new(name, 0).with_caption(caption);
        VariableTable::build(&file, &MediaMetadata::default(), 9)
    }

    #[test]
    fn test_modes_agree_on_plain_values() {
        let t = table("Show.720p.mkv", "hi");
        let template = "{filename} | {quality} | {caption} | {ext} | {wish}";
        let expected = "Show.720p.mkv | 720p | hi | mkv | Good Morning";
        assert_eq!(SubstitutionMode::Sequential.apply(template, &t), expected);
        assert_eq!(SubstitutionMode::SinglePass.apply(template, &t), expected);
    }

    #[test]
    fn test_repeated_tokens_are_all_replaced() {
        let t = table("a.mp4", "");
        assert_eq!(
            SubstitutionMode::Sequential.apply("{ext}{ext}-{ext}", &t),
            "mp4mp4-mp4"
        );
        assert_eq!(
            SubstitutionMode::SinglePass.apply("{ext}{ext}-{ext}", &t),
            "mp4mp4-mp4"
        );
    }

    #[test]
    fn test_sequential_resubstitutes_later_tokens() {
        // {filename} is processed before {wish}, so the token inside the
        // name is expanded on a later step.
        let t = table("{wish}.mkv", "");
        assert_eq!(
            SubstitutionMode::Sequential.apply("{filename}", &t),
            "Good Morning.mkv"
        );
        assert_eq!(SubstitutionMode::SinglePass.apply("{filename}", &t), "{wish}.mkv");
    }

    #[test]
    fn test_sequential_keeps_earlier_tokens() {
        // {caption} is processed after {filename}, so the token it emits stays.
        let t = table("movie.mkv", "see {filename}");
        assert_eq!(
            SubstitutionMode::Sequential.apply("{caption}", &t),
            "see {filename}"
        );
        assert_eq!(
            SubstitutionMode::SinglePass.apply("{caption}", &t),
            "see {filename}"
        );
    }

    #[test]
    fn test_single_pass_unknown_and_stray_braces() {
        let t = table("a.mp4", "");
        assert_eq!(
            SubstitutionMode::SinglePass.apply("{{ext}} {unknown} {", &t),
            "{mp4} {unknown} {"
        );
        assert_eq!(
            SubstitutionMode::Sequential.apply("{{ext}} {unknown} {", &t),
            "{mp4} {unknown} {"
        );
    }

    #[test]
    fn test_single_pass_multibyte_text() {
        let t = table("a.mp4", "");
        assert_eq!(
            SubstitutionMode::SinglePass.apply("📁 {ext} — ✓", &t),
            "📁 mp4 — ✓"
        );
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&SubstitutionMode::SinglePass).unwrap();
        assert_eq!(json, r#""single_pass""#);
        let mode: SubstitutionMode = serde_json::from_str(r#""sequential""#).unwrap();
        assert_eq!(mode, SubstitutionMode::Sequential);
    }
}
