use crate::caption::SubstitutionMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Caption used for users who never set their own.
pub const DEFAULT_CAPTION: &str = "{filename}

📁 Size: {filesize}
🎞️ Resolution: {resolution}
🎬 Duration: {duration}
";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,

    #[serde(default)]
    pub caption: CaptionConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub probe: ProbeConfig,
}

/// Platform credentials. Consumed by the transport layer, not by this crate.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BotConfig {
    #[serde(default)]
    pub api_id: Option<i64>,

    #[serde(default)]
    pub api_hash: Option<String>,

    #[serde(default)]
    pub bot_token: Option<String>,

    #[serde(default)]
    pub owner_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptionConfig {
    /// Template for users without a stored caption
    #[serde(default = "default_template")]
    pub default_template: String,

    /// Placeholder substitution strategy (default: sequential)
    #[serde(default)]
    pub substitution: SubstitutionMode,
}

fn default_template() -> String {
    DEFAULT_CAPTION.to_string()
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            default_template: default_template(),
            substitution: SubstitutionMode::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Channels a single user may register (default: 3)
    #[serde(default = "default_max_channels")]
    pub max_channels_per_user: usize,
}

fn default_max_channels() -> usize {
    3
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_channels_per_user: default_max_channels(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Read metadata from downloaded files (default: true)
    #[serde(default = "default_probe_enabled")]
    pub enabled: bool,

    /// Explicit ffprobe executable; PATH lookup when unset
    #[serde(default)]
    pub ffprobe_path: Option<PathBuf>,
}

fn default_probe_enabled() -> bool {
    true
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: default_probe_enabled(),
            ffprobe_path: None,
        }
    }
}
