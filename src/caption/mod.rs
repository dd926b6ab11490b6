//! Caption rendering.
//!
//! A caption template is plain text with brace-delimited placeholders such as
//! `{filename}` or `{quality}`. Rendering resolves every known placeholder for
//! one file (see [`Placeholder`]) and substitutes it into the template.
//! Unknown placeholders are passed through untouched and rendering never fails.
//!
//! # Example
//!
//! ```
//! use autocaption::caption::render_at;
//! use autocaption_common::{FileDescriptor, MediaMetadata};
//!
//! let file = FileDescriptor::new("Show.720p.mkv", 1536);
//! let caption = render_at("{filename} - {quality} ({filesize})", &file, &MediaMetadata::default(), 10);
//! assert_eq!(caption, "Show.720p.mkv - 720p (1.50 KB)");
//! ```

mod greeting;
mod substitute;
mod variables;

pub use greeting::Greeting;
pub use substitute::SubstitutionMode;
pub use variables::{Placeholder, VariableTable};

use autocaption_common::{FileDescriptor, MediaMetadata};
use chrono::Timelike;

/// Recognized placeholder tokens with a short description, in substitution order.
pub fn placeholders() -> impl Iterator<Item = (&'static str, &'static str)> {
    Placeholder::ALL
        .into_iter()
        .map(|placeholder| (placeholder.token(), placeholder.description()))
}

/// Render a template using the current local hour for `{wish}`.
pub fn render(template: &str, file: &FileDescriptor, metadata: &MediaMetadata) -> String {
    CaptionRenderer::default().render(template, file, metadata)
}

/// Render a template at a fixed hour of the day.
pub fn render_at(
    template: &str,
    file: &FileDescriptor,
    metadata: &MediaMetadata,
    hour: u32,
) -> String {
    render_with(template, file, metadata, hour, SubstitutionMode::Sequential)
}

/// Render a template at a fixed hour with an explicit substitution mode.
pub fn render_with(
    template: &str,
    file: &FileDescriptor,
    metadata: &MediaMetadata,
    hour: u32,
    mode: SubstitutionMode,
) -> String {
    let table = VariableTable::build(file, metadata, hour);
    mode.apply(template, &table)
}

/// Renderer bound to a substitution mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptionRenderer {
    mode: SubstitutionMode,
}

impl CaptionRenderer {
    pub fn new(mode: SubstitutionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> SubstitutionMode {
        self.mode
    }

    /// Render with the local hour, read once per call.
    pub fn render(&self, template: &str, file: &FileDescriptor, metadata: &MediaMetadata) -> String {
        let hour = chrono::Local::now().hour();
        self.render_at(template, file, metadata, hour)
    }

    pub fn render_at(
        &self,
        template: &str,
        file: &FileDescriptor,
        metadata: &MediaMetadata,
        hour: u32,
    ) -> String {
        render_with(template, file, metadata, hour, self.mode)
    }
}
