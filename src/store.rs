//! User and channel preferences.
//!
//! The bot remembers, per user, a caption template and the channels the user
//! registered; per channel, the user who owns it. [`PreferenceStore`] is the
//! interface the processor depends on; [`MemoryStore`] keeps everything in
//! process memory.

use crate::config::Config;
use autocaption_common::{ChannelId, Error, Result, UserId};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Stored preferences of one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub caption: String,
    /// Registered channels, in registration order.
    pub channels: Vec<ChannelId>,
}

/// User and channel counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub users: usize,
    pub channels: usize,
}

/// Preference storage used by the caption processor.
pub trait PreferenceStore: Send + Sync {
    /// Create the user with the default caption if unknown.
    /// Returns true when a new user was created.
    fn register_user(&self, user: UserId) -> bool;

    /// Replace the user's caption template, creating the user if needed.
    fn set_caption(&self, user: UserId, template: &str) -> Result<()>;

    /// The user's stored caption template, `None` for unknown users.
    fn caption_for(&self, user: UserId) -> Option<String>;

    /// Register a channel for a user and make the user its owner.
    fn add_channel(&self, user: UserId, channel: ChannelId) -> Result<()>;

    /// Owner of a registered channel.
    fn channel_owner(&self, channel: ChannelId) -> Option<UserId>;

    /// Full record of a user.
    fn user(&self, user: UserId) -> Option<UserRecord>;

    fn stats(&self) -> Stats;
}

#[derive(Debug, Default)]
struct State {
    users: HashMap<UserId, UserRecord>,
    channels: HashMap<ChannelId, UserId>,
}

/// In-memory [`PreferenceStore`].
#[derive(Debug)]
pub struct MemoryStore {
    default_caption: String,
    max_channels: usize,
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new(default_caption: impl Into<String>, max_channels: usize) -> Self {
        Self {
            default_caption: default_caption.into(),
            max_channels,
            state: RwLock::new(State::default()),
        }
    }

    /// Store seeded with the configured default caption and channel limit.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.caption.default_template.clone(),
            config.store.max_channels_per_user,
        )
    }

    fn new_record(&self) -> UserRecord {
        UserRecord {
            caption: self.default_caption.clone(),
            channels: Vec::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl PreferenceStore for MemoryStore {
    fn register_user(&self, user: UserId) -> bool {
        let mut state = self.state.write();
        if state.users.contains_key(&user) {
            return false;
        }
        state.users.insert(user, self.new_record());
        tracing::debug!("Registered user {}", user);
        true
    }

    fn set_caption(&self, user: UserId, template: &str) -> Result<()> {
        if template.trim().is_empty() {
            return Err(Error::invalid_input("caption template cannot be empty"));
        }

        let mut state = self.state.write();
        let record = state
            .users
            .entry(user)
            .or_insert_with(|| self.new_record());
        record.caption = template.to_string();
        Ok(())
    }

    fn caption_for(&self, user: UserId) -> Option<String> {
        self.state.read().users.get(&user).map(|r| r.caption.clone())
    }

    fn add_channel(&self, user: UserId, channel: ChannelId) -> Result<()> {
        let mut state = self.state.write();

        let already_owned = state
            .users
            .get(&user)
            .is_some_and(|r| r.channels.contains(&channel));
        if already_owned {
            return Ok(());
        }

        let count = state.users.get(&user).map_or(0, |r| r.channels.len());
        if count >= self.max_channels {
            return Err(Error::limit_exceeded(format!(
                "user {} already has {} channels",
                user, self.max_channels
            )));
        }

        // A channel has one owner; take it away from the previous one.
        if let Some(previous) = state.channels.insert(channel, user) {
            if let Some(record) = state.users.get_mut(&previous) {
                record.channels.retain(|c| *c != channel);
            }
            tracing::debug!("Channel {} moved from user {} to {}", channel, previous, user);
        }

        let record = state
            .users
            .entry(user)
            .or_insert_with(|| self.new_record());
        record.channels.push(channel);
        Ok(())
    }

    fn channel_owner(&self, channel: ChannelId) -> Option<UserId> {
        self.state.read().channels.get(&channel).copied()
    }

    fn user(&self, user: UserId) -> Option<UserRecord> {
        self.state.read().users.get(&user).cloned()
    }

    fn stats(&self) -> Stats {
        let state = self.state.read();
        Stats {
            users: state.users.len(),
            channels: state.channels.len(),
        }
    }
}

/// Parse a channel id as typed by a user, e.g. `-1001234567890`.
pub fn parse_channel_id(input: &str) -> Result<ChannelId> {
    input.parse()
}
