mod types;

pub use types::*;

use anyhow::{Context, Result};
use autocaption_probe::{get_tool_path, FfprobeExtractor, MetadataExtractor, NoopExtractor};
use std::path::Path;
use std::sync::Arc;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config)?;
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./config.toml",
        "./autocaption.toml",
        "~/.config/autocaption/config.toml",
        "/etc/autocaption/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Overlay deployment credentials from the environment.
///
/// Reads `API_ID`, `API_HASH`, `BOT_TOKEN` and `OWNER_ID`; empty variables
/// are ignored.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(value) = env_var("API_ID") {
        let id = value
            .parse()
            .with_context(|| format!("API_ID must be numeric, got {:?}", value))?;
        config.bot.api_id = Some(id);
    }
    if let Some(value) = env_var("API_HASH") {
        config.bot.api_hash = Some(value);
    }
    if let Some(value) = env_var("BOT_TOKEN") {
        config.bot.bot_token = Some(value);
    }
    if let Some(value) = env_var("OWNER_ID") {
        let id = value
            .parse()
            .with_context(|| format!("OWNER_ID must be numeric, got {:?}", value))?;
        config.bot.owner_id = Some(id);
    }
    Ok(())
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.caption.default_template.trim().is_empty() {
        anyhow::bail!("Default caption template cannot be empty");
    }

    if config.store.max_channels_per_user == 0 {
        anyhow::bail!("max_channels_per_user must be at least 1");
    }

    if config.probe.enabled {
        if let Err(e) = get_tool_path("ffprobe", config.probe.ffprobe_path.as_deref()) {
            tracing::warn!("{}; captions will be rendered without media metadata", e);
        }
    }

    Ok(())
}

/// Build the metadata extractor described by the probe section.
///
/// Falls back to [`NoopExtractor`] when probing is disabled or ffprobe cannot
/// be found at the configured path or on PATH.
pub fn metadata_extractor(config: &ProbeConfig) -> Arc<dyn MetadataExtractor> {
    if !config.enabled {
        return Arc::new(NoopExtractor);
    }
    match get_tool_path("ffprobe", config.ffprobe_path.as_deref()) {
        Ok(program) => Arc::new(FfprobeExtractor::with_path(program)),
        Err(e) => {
            tracing::warn!("{}; metadata extraction disabled", e);
            Arc::new(NoopExtractor)
        }
    }
}
