//! Autocaption - caption templating for channel media posts
//!
//! This library crate exposes the caption engine and its collaborators for
//! the binary and for integration testing.

pub mod caption;
pub mod config;
pub mod processor;
pub mod store;

pub use caption::{placeholders, render, render_at, render_with, CaptionRenderer, SubstitutionMode};
pub use store::{parse_channel_id, MemoryStore, PreferenceStore};
