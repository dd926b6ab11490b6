//! Typed ID wrappers for platform identifiers.
//!
//! Users and channels are both plain 64-bit ids on the messaging platform;
//! the newtypes keep a channel id from being passed where a user id is expected.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Platform identifier of a bot user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Raw platform id.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Platform identifier of a channel. Channel ids are usually negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(i64);

impl ChannelId {
    /// Raw platform id.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ChannelId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ChannelId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| crate::Error::invalid_input(format!("channel id must be numeric: {s}")))
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_id_parse() {
        let id: ChannelId = "-1001234567890".parse().unwrap();
        assert_eq!(id.get(), -1001234567890);

        let id: ChannelId = " 42 ".parse().unwrap();
        assert_eq!(id, ChannelId::from(42));
    }

    #[test]
    fn test_channel_id_rejects_non_numeric() {
        let err = "@mychannel".parse::<ChannelId>().unwrap_err();
        assert!(matches!(err, crate::Error::InvalidInput(_)));
    }

    #[test]
    fn test_ids_serialize_transparent() {
        let json = serde_json::to_string(&UserId::from(7)).unwrap();
        assert_eq!(json, "7");

        let id: ChannelId = serde_json::from_str("-100").unwrap();
        assert_eq!(id.get(), -100);
    }
}
