// src/ingest/providers/mod.rs
pub mod devto;
pub mod hackernews;
pub mod reddit;

use anyhow::Result;
use std::sync::Arc;

use crate::config::SourcesConfig;
use crate::ingest::types::SourceProvider;
use crate::topic::TopicList;

/// All three adapters in fetch order (Dev.to, Hacker News, Reddit), sharing
/// one HTTP client and one topic list.
pub fn build_default_providers(
    cfg: &SourcesConfig,
    topics: Arc<TopicList>,
) -> Result<Vec<Box<dyn SourceProvider>>> {
    let client = cfg.http.build_client()?;
    Ok(vec![
        Box::new(devto::DevToProvider::new(
            cfg.devto.clone(),
            topics.clone(),
            client.clone(),
        )),
        Box::new(hackernews::HackerNewsProvider::new(
            cfg.hackernews.clone(),
            topics.clone(),
            client.clone(),
        )),
        Box::new(reddit::RedditProvider::new(
            cfg.reddit.clone(),
            topics,
            client,
        )),
    ])
}
