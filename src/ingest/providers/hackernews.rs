// src/ingest/providers/hackernews.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use metrics::counter;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::sources::HackerNewsConfig;
use crate::ingest::text::clean_title;
use crate::ingest::types::{Article, Source, SourceProvider};
use crate::topic::TopicList;

// Every field is optional on the wire (deleted/dead items, jobs, polls).
#[derive(Debug, Deserialize)]
struct HnItem {
    title: Option<String>,
    url: Option<String>,
    score: Option<u64>,
}

/// Hacker News top stories: one listing call, then one call per story id
/// (sequential, bounded by `slate_size`).
pub struct HackerNewsProvider {
    cfg: HackerNewsConfig,
    topics: Arc<TopicList>,
    client: reqwest::Client,
}

impl HackerNewsProvider {
    pub fn new(cfg: HackerNewsConfig, topics: Arc<TopicList>, client: reqwest::Client) -> Self {
        Self {
            cfg,
            topics,
            client,
        }
    }

    fn base(&self) -> &str {
        self.cfg.base_url.trim_end_matches('/')
    }

    async fn fetch_item(&self, id: u64) -> Result<Option<HnItem>> {
        let url = format!("{}/item/{}.json", self.base(), id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("hn item get()")?
            .error_for_status()
            .context("hn item non-2xx")?;
        // The API answers `null` for unknown ids.
        resp.json::<Option<HnItem>>().await.context("hn item json")
    }

    fn to_article(&self, item: HnItem) -> Result<Option<Article>> {
        let (Some(title), Some(url), Some(score)) = (item.title, item.url, item.score) else {
            return Err(anyhow!("missing title/url/score"));
        };
        let title = clean_title(&title);
        if score < self.cfg.min_score || !self.topics.matches(&title) {
            return Ok(None);
        }
        Ok(Some(Article {
            title,
            url,
            source: Source::HackerNews,
            summary: String::new(),
            score,
        }))
    }
}

#[async_trait]
impl SourceProvider for HackerNewsProvider {
    async fn fetch_latest(&self) -> Result<Vec<Article>> {
        let url = format!("{}/topstories.json", self.base());
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("hn topstories get()")?;

        if !resp.status().is_success() {
            tracing::warn!(status = %resp.status(), provider = "Hacker News", "non-success listing");
            return Ok(Vec::new());
        }

        let ids: Vec<u64> = resp.json().await.context("hn topstories json")?;

        let mut out = Vec::new();
        for id in ids.into_iter().take(self.cfg.slate_size) {
            let item = match self.fetch_item(id).await {
                Ok(Some(item)) => item,
                Ok(None) => {
                    tracing::debug!(id, "hn item is null; skipping");
                    counter!("digest_items_skipped_total", "provider" => "Hacker News").increment(1);
                    continue;
                }
                Err(e) => {
                    tracing::debug!(id, error = ?e, "hn item fetch failed; skipping");
                    counter!("digest_items_skipped_total", "provider" => "Hacker News").increment(1);
                    continue;
                }
            };
            match self.to_article(item) {
                Ok(Some(a)) => out.push(a),
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(id, error = %e, "hn item malformed; skipping");
                    counter!("digest_items_skipped_total", "provider" => "Hacker News").increment(1);
                }
            }
        }
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "Hacker News"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> HackerNewsProvider {
        HackerNewsProvider::new(
            HackerNewsConfig::default(),
            Arc::new(TopicList::default()),
            reqwest::Client::new(),
        )
    }

    fn item(title: Option<&str>, url: Option<&str>, score: Option<u64>) -> HnItem {
        HnItem {
            title: title.map(String::from),
            url: url.map(String::from),
            score,
        }
    }

    #[test]
    fn missing_field_is_malformed() {
        let p = provider();
        assert!(p.to_article(item(Some("Cloud costs"), None, Some(90))).is_err());
        assert!(p
            .to_article(item(None, Some("https://x.test"), Some(90)))
            .is_err());
    }

    #[test]
    fn threshold_is_inclusive() {
        let p = provider();
        let a = p
            .to_article(item(Some("Cloud costs"), Some("https://x.test"), Some(50)))
            .unwrap()
            .expect("kept at threshold");
        assert_eq!(a.source, Source::HackerNews);
        assert!(a.summary.is_empty());
        assert!(p
            .to_article(item(Some("Cloud costs"), Some("https://x.test"), Some(49)))
            .unwrap()
            .is_none());
    }
}
