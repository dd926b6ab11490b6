//! Per-post caption processing.
//!
//! Ties the collaborators together for one channel post: find who owns the
//! channel, pick their template, describe the file, read metadata from the
//! downloaded copy if there is one, and render the new caption.

use crate::caption::{CaptionRenderer, SubstitutionMode};
use crate::store::PreferenceStore;
use autocaption_common::{ChannelId, MediaMessage, MediaMetadata};
use autocaption_probe::{extract_or_default, MetadataExtractor};
use chrono::Timelike;
use std::path::Path;
use std::sync::Arc;

/// Builds captions for media posts in registered channels.
#[derive(Clone)]
pub struct CaptionProcessor {
    store: Arc<dyn PreferenceStore>,
    extractor: Arc<dyn MetadataExtractor>,
    renderer: CaptionRenderer,
}

impl CaptionProcessor {
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        extractor: Arc<dyn MetadataExtractor>,
        mode: SubstitutionMode,
    ) -> Self {
        Self {
            store,
            extractor,
            renderer: CaptionRenderer::new(mode),
        }
    }

    /// Template used for a channel's posts, if the channel is registered.
    pub fn template_for(&self, channel: ChannelId) -> Option<String> {
        let owner = self.store.channel_owner(channel)?;
        let template = self.store.caption_for(owner);
        if template.is_none() {
            tracing::debug!("Channel {} owner {} has no preferences", channel, owner);
        }
        template
    }

    /// New caption for a post, or `None` when the channel is not managed.
    ///
    /// `downloaded` is a local copy of the media; metadata is read from it
    /// when given and degrades to empty on any failure.
    pub fn process(
        &self,
        channel: ChannelId,
        message: &MediaMessage,
        downloaded: Option<&Path>,
    ) -> Option<String> {
        self.process_at(channel, message, downloaded, chrono::Local::now().hour())
    }

    /// [`CaptionProcessor::process`] at a fixed hour of the day.
    pub fn process_at(
        &self,
        channel: ChannelId,
        message: &MediaMessage,
        downloaded: Option<&Path>,
        hour: u32,
    ) -> Option<String> {
        let Some(template) = self.template_for(channel) else {
            tracing::debug!("Ignoring post in unmanaged channel {}", channel);
            return None;
        };

        let file = message.descriptor();
        let metadata = match downloaded {
            Some(path) => extract_or_default(self.extractor.as_ref(), path),
            None => MediaMetadata::default(),
        };

        tracing::debug!(
            "Captioning {} {:?} in channel {}",
            message.media,
            file.name,
            channel
        );
        Some(self.renderer.render_at(&template, &file, &metadata, hour))
    }
}
