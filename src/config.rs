use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::classify::taxonomy::{
    to_owned, TaxonomyRule, DEFAULT_ADVANCED, DEFAULT_BASIC, DEFAULT_INTERMEDIATE,
};
use crate::error::ConfigError;

/// Channel crawled when neither `--channel` nor the config names one.
pub const DEFAULT_CHANNEL_ID: &str = "UCjbEAhCd_8bEEbPbs4kJPEA";

/// Root configuration structure, deserialized from `.channel-catalog/config.toml`.
///
/// Every section is optional; missing values fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub channel: ChannelConfig,
    pub output: OutputConfig,
    /// Replaces the built-in taxonomy entirely when present.
    pub taxonomy: Option<Vec<TaxonomyRule>>,
    pub difficulty: DifficultyConfig,
    pub tags: TagConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    pub id: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        ChannelConfig {
            id: DEFAULT_CHANNEL_ID.to_string(),
        }
    }
}

/// Artifact file names and the thumbnail kept in the minified form.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub full: String,
    pub minified: String,
    /// Thumbnail size names tried in order for the minified artifact.
    pub thumbnail: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            full: "videos.json".to_string(),
            minified: "videos.min.json".to_string(),
            thumbnail: to_owned(&["medium", "high", "default"]),
        }
    }
}

/// Per-tier keyword overrides. An absent list keeps the built-in one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    pub advanced: Option<Vec<String>>,
    pub intermediate: Option<Vec<String>>,
    pub basic: Option<Vec<String>>,
}

impl DifficultyConfig {
    pub fn advanced_or_default(&self) -> Vec<String> {
        self.advanced.clone().unwrap_or_else(|| to_owned(DEFAULT_ADVANCED))
    }

    pub fn intermediate_or_default(&self) -> Vec<String> {
        self.intermediate
            .clone()
            .unwrap_or_else(|| to_owned(DEFAULT_INTERMEDIATE))
    }

    pub fn basic_or_default(&self) -> Vec<String> {
        self.basic.clone().unwrap_or_else(|| to_owned(DEFAULT_BASIC))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    pub extra: Option<Vec<String>>,
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.channel-catalog/config.toml`
/// 3. `~/.config/channel-catalog/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".channel-catalog").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("channel-catalog")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using built-in defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content, path)?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn parse_config(content: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: PathBuf::from(path),
        source,
    })
}
