// src/ingest/providers/devto.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::sources::DevToConfig;
use crate::ingest::text::{clean_summary, clean_title};
use crate::ingest::types::{Article, Source, SourceProvider};
use crate::topic::TopicList;

#[derive(Debug, Deserialize)]
struct DevToArticle {
    title: String,
    url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    positive_reactions_count: Option<u64>,
}

/// Recent Dev.to articles, kept when the title matches a topic and the
/// reaction count reaches `min_reactions`.
pub struct DevToProvider {
    cfg: DevToConfig,
    topics: Arc<TopicList>,
    client: reqwest::Client,
}

impl DevToProvider {
    pub fn new(cfg: DevToConfig, topics: Arc<TopicList>, client: reqwest::Client) -> Self {
        Self {
            cfg,
            topics,
            client,
        }
    }

    fn listing_url(&self) -> String {
        format!(
            "{}/articles?per_page={}",
            self.cfg.base_url.trim_end_matches('/'),
            self.cfg.per_page
        )
    }

    fn keep(&self, raw: Vec<DevToArticle>) -> Vec<Article> {
        raw.into_iter()
            .filter_map(|a| {
                let title = clean_title(&a.title);
                let score = a.positive_reactions_count.unwrap_or(0);
                if score < self.cfg.min_reactions || !self.topics.matches(&title) {
                    return None;
                }
                Some(Article {
                    title,
                    url: a.url,
                    source: Source::DevTo,
                    summary: clean_summary(a.description.as_deref().unwrap_or_default()),
                    score,
                })
            })
            .collect()
    }
}

#[async_trait]
impl SourceProvider for DevToProvider {
    async fn fetch_latest(&self) -> Result<Vec<Article>> {
        let url = self.listing_url();
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("devto http get()")?;

        if !resp.status().is_success() {
            tracing::warn!(status = %resp.status(), provider = "Dev.to", "non-success listing");
            return Ok(Vec::new());
        }

        let raw: Vec<DevToArticle> = resp.json().await.context("devto json")?;
        let total = raw.len();
        let out = self.keep(raw);
        tracing::debug!(total, kept = out.len(), "devto filtered");
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "Dev.to"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> DevToProvider {
        DevToProvider::new(
            DevToConfig::default(),
            Arc::new(TopicList::default()),
            reqwest::Client::new(),
        )
    }

    #[test]
    fn keeps_matching_popular_articles_only() {
        let raw: Vec<DevToArticle> = serde_json::from_str(
            r#"[
                {"title": "Vue 3 tips", "url": "https://dev.to/a", "description": "Short &amp; sweet", "positive_reactions_count": 31},
                {"title": "Vue 3 tricks", "url": "https://dev.to/b", "description": null, "positive_reactions_count": 29},
                {"title": "Gardening log", "url": "https://dev.to/c", "positive_reactions_count": 500},
                {"title": "TypeScript enums", "url": "https://dev.to/d"}
            ]"#,
        )
        .unwrap();

        let out = provider().keep(raw);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Vue 3 tips");
        assert_eq!(out[0].summary, "Short & sweet");
        assert_eq!(out[0].score, 31);
        assert_eq!(out[0].source, Source::DevTo);
    }

    #[test]
    fn listing_url_has_page_size() {
        assert_eq!(
            provider().listing_url(),
            "https://dev.to/api/articles?per_page=100"
        );
    }
}
