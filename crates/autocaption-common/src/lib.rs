//! Autocaption-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across autocaption:
//!
//! - **Typed IDs**: Newtype wrappers for platform user and channel ids
//! - **Core Types**: File descriptors, media metadata and the media payload union
//! - **Path Utilities**: Extension and MIME helpers for local files
//! - **Size Formatting**: Human-readable byte sizes for captions
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use autocaption_common::{ChannelId, FileDescriptor, Error, Result};
//! use autocaption_common::size::human_readable_size;
//!
//! let channel = ChannelId::from(-1001234567890);
//! assert_eq!(channel.to_string(), "-1001234567890");
//!
//! let file = FileDescriptor::new("Show.720p.mkv", 1536);
//! assert_eq!(human_readable_size(file.size), "1.50 KB");
//!
//! fn parse(input: &str) -> Result<ChannelId> {
//!     input.parse()
//! }
//! assert!(matches!(parse("@name"), Err(Error::InvalidInput(_))));
//! ```

pub mod error;
pub mod ids;
pub mod paths;
pub mod size;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
