// src/config/sources.rs
//! Settings file: tracked topics plus per-source endpoints and thresholds.
//!
//! Every field has a default, so an absent file or a partial one is fine.
//!
//! ```toml
//! topics = ["rust", "cloud"]
//!
//! [hackernews]
//! min_score = 80
//! ```

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::topic::{TopicList, DEFAULT_TOPICS};

pub const ENV_CONFIG_PATH: &str = "DIGEST_CONFIG_PATH";
pub const DEFAULT_TOML_PATH: &str = "config/digest.toml";
pub const DEFAULT_JSON_PATH: &str = "config/digest.json";

fn default_topics() -> Vec<String> {
    DEFAULT_TOPICS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub topics: Vec<String>,
    pub devto: DevToConfig,
    pub hackernews: HackerNewsConfig,
    pub reddit: RedditConfig,
    pub http: HttpConfig,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            topics: default_topics(),
            devto: DevToConfig::default(),
            hackernews: HackerNewsConfig::default(),
            reddit: RedditConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DevToConfig {
    pub base_url: String,
    pub per_page: u32,
    pub min_reactions: u64,
}

impl Default for DevToConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dev.to/api".into(),
            per_page: 100,
            min_reactions: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HackerNewsConfig {
    pub base_url: String,
    /// How many top story ids are looked up one by one.
    pub slate_size: usize,
    pub min_score: u64,
}

impl Default for HackerNewsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://hacker-news.firebaseio.com/v0".into(),
            slate_size: 50,
            min_score: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RedditConfig {
    pub base_url: String,
    /// Prefix for post permalinks (the API returns them host-relative).
    pub link_base: String,
    pub subreddit: String,
    pub limit: u32,
    pub min_upvotes: u64,
    pub user_agent: String,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.reddit.com".into(),
            link_base: "https://reddit.com".into(),
            subreddit: "programming".into(),
            limit: 50,
            min_upvotes: 50,
            user_agent: "tech-bot".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 20 }
    }
}

impl HttpConfig {
    /// Shared client for all adapters.
    pub fn build_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs.max(1)))
            .build()
            .context("building http client")
    }
}

impl SourcesConfig {
    pub fn topic_list(&self) -> TopicList {
        TopicList::new(&self.topics)
    }

    fn validate(self) -> Result<Self> {
        if self.topic_list().is_empty() {
            bail!("settings file defines no usable topics");
        }
        Ok(self)
    }
}

/// Load settings from an explicit path. Supports TOML or JSON formats.
pub fn load_sources_from(path: &Path) -> Result<SourcesConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_sources(&content, ext.as_str())
        .with_context(|| format!("parsing settings from {}", path.display()))
}

/// Load settings using env var + fallbacks:
/// 1) $DIGEST_CONFIG_PATH
/// 2) config/digest.toml
/// 3) config/digest.json
/// 4) built-in defaults
pub fn load_sources_default() -> Result<SourcesConfig> {
    if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_sources_from(&pb);
        } else {
            return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
        }
    }
    let toml_p = PathBuf::from(DEFAULT_TOML_PATH);
    if toml_p.exists() {
        return load_sources_from(&toml_p);
    }
    let json_p = PathBuf::from(DEFAULT_JSON_PATH);
    if json_p.exists() {
        return load_sources_from(&json_p);
    }
    Ok(SourcesConfig::default())
}

fn parse_sources(s: &str, hint_ext: &str) -> Result<SourcesConfig> {
    // JSON when hinted or when the content looks like an object.
    let try_json = hint_ext == "json" || s.trim_start().starts_with('{');
    if try_json {
        if let Ok(v) = serde_json::from_str::<SourcesConfig>(s) {
            return v.validate();
        }
    }
    match toml::from_str::<SourcesConfig>(s) {
        Ok(v) => v.validate(),
        Err(e) if !try_json => Err(anyhow!(e).context("unsupported settings format")),
        Err(_) => {
            // Surface the JSON error, it is the more useful one here.
            let v: SourcesConfig = serde_json::from_str(s).context("invalid JSON settings")?;
            v.validate()
        }
    }
}
