//! Caption rendering properties.

use autocaption::caption::{render_at, render_with, Placeholder, SubstitutionMode};
use autocaption::config::DEFAULT_CAPTION;
use autocaption_common::{FileDescriptor, MediaMetadata, MetadataField};

fn sample_file() -> FileDescriptor {
    FileDescriptor::new("Movie.2021.1080p.Hindi.S01E05.mkv", 1073741824)
        .with_caption("Uploaded by admin")
        .with_mime_type("video/x-matroska")
}

fn sample_metadata() -> MediaMetadata {
    MediaMetadata::default()
        .with_dimensions(1920, 1080)
        .with(MetadataField::Duration, "2:03:04")
}

#[test]
fn every_placeholder_is_resolved() {
    let template: String = Placeholder::ALL
        .iter()
        .map(|p| p.token())
        .collect::<Vec<_>>()
        .join("|");

    let out = render_at(&template, &sample_file(), &sample_metadata(), 14);

    assert_eq!(
        out,
        "Movie.2021.1080p.Hindi.S01E05.mkv|1.00 GB|Uploaded by admin|Hindi|2021|1080p|S01|E05\
         |2:03:04|1080|1920|mkv|1920x1080|video/x-matroska|||Good Afternoon"
    );
}

#[test]
fn default_template_renders() {
    let out = render_at(DEFAULT_CAPTION, &sample_file(), &sample_metadata(), 9);
    assert_eq!(
        out,
        "Movie.2021.1080p.Hindi.S01E05.mkv\n\n📁 Size: 1.00 GB\n🎞️ Resolution: 1920x1080\n🎬 Duration: 2:03:04\n"
    );
}

#[test]
fn rendering_is_deterministic() {
    let templates = [
        "{filename} - {quality}",
        "{wish}! {title} by {artist} ({duration})",
        "{unknown} {{caption}}",
        "",
    ];
    for template in templates {
        for hour in [0, 5, 12, 17, 23] {
            for mode in [SubstitutionMode::Sequential, SubstitutionMode::SinglePass] {
                let a = render_with(template, &sample_file(), &sample_metadata(), hour, mode);
                let b = render_with(template, &sample_file(), &sample_metadata(), hour, mode);
                assert_eq!(a, b);
            }
        }
    }
}

#[test]
fn empty_inputs_render_empty_values() {
    let out = render_at(
        "[{filename}][{filesize}][{ext}][{resolution}]",
        &FileDescriptor::default(),
        &MediaMetadata::default(),
        8,
    );
    assert_eq!(out, "[][0 B][][]");
}

#[test]
fn rendering_is_not_idempotent_on_its_output() {
    // A file literally named after a placeholder: the second render expands
    // what the first one emitted.
    let file = FileDescriptor::new("{ext}.mp4", 0);
    let meta = MediaMetadata::default();

    let once = render_with(
        "{caption}{filename}",
        &file,
        &meta,
        10,
        SubstitutionMode::SinglePass,
    );
    assert_eq!(once, "{ext}.mp4");
    let twice = render_with(&once, &file, &meta, 10, SubstitutionMode::SinglePass);
    assert_eq!(twice, "mp4.mp4");
}

// The two tests below pin the order-dependent behavior of sequential
// substitution that stored templates may rely on.

#[test]
fn sequential_expands_tokens_emitted_for_earlier_placeholders() {
    let file = FileDescriptor::new("Clip {year}", 0).with_caption("{quality}");
    let meta = MediaMetadata::default().with(MetadataField::Title, "{wish}");

    let template = "{filename} {caption} {title}";
    let sequential = render_with(template, &file, &meta, 6, SubstitutionMode::Sequential);
    let single = render_with(template, &file, &meta, 6, SubstitutionMode::SinglePass);

    // {year} and {quality} are later in the table than {filename} and
    // {caption}; {wish} is later than {title}. All three are expanded, to
    // empty filename attributes and the morning greeting.
    assert_eq!(sequential, "Clip   Good Morning");
    assert_eq!(single, "Clip {year} {quality} {wish}");
}

#[test]
fn sequential_leaves_tokens_emitted_for_later_placeholders() {
    let file = FileDescriptor::new("a.mkv", 0);
    let meta = MediaMetadata::default().with(MetadataField::Artist, "{filename} {caption}");

    let out = render_with("{artist}", &file, &meta, 6, SubstitutionMode::Sequential);
    assert_eq!(out, "{filename} {caption}");
}
