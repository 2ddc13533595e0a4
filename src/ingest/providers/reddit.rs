// src/ingest/providers/reddit.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::sources::RedditConfig;
use crate::ingest::text::clean_title;
use crate::ingest::types::{Article, Source, SourceProvider};
use crate::topic::TopicList;

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}
#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Child>,
}
#[derive(Debug, Deserialize)]
struct Child {
    data: Post,
}
#[derive(Debug, Deserialize)]
struct Post {
    title: String,
    permalink: String,
    ups: u64,
}

/// Top posts of the day from one subreddit.
pub struct RedditProvider {
    cfg: RedditConfig,
    topics: Arc<TopicList>,
    client: reqwest::Client,
}

impl RedditProvider {
    pub fn new(cfg: RedditConfig, topics: Arc<TopicList>, client: reqwest::Client) -> Self {
        Self {
            cfg,
            topics,
            client,
        }
    }

    fn listing_url(&self) -> String {
        format!(
            "{}/r/{}/top.json?limit={}&t=day",
            self.cfg.base_url.trim_end_matches('/'),
            self.cfg.subreddit,
            self.cfg.limit
        )
    }

    fn keep(&self, listing: Listing) -> Vec<Article> {
        let link_base = self.cfg.link_base.trim_end_matches('/');
        listing
            .data
            .children
            .into_iter()
            .map(|c| c.data)
            .filter_map(|post| {
                let title = clean_title(&post.title);
                if post.ups < self.cfg.min_upvotes || !self.topics.matches(&title) {
                    return None;
                }
                Some(Article {
                    title,
                    url: format!("{}{}", link_base, post.permalink),
                    source: Source::Reddit,
                    summary: String::new(),
                    score: post.ups,
                })
            })
            .collect()
    }
}

#[async_trait]
impl SourceProvider for RedditProvider {
    async fn fetch_latest(&self) -> Result<Vec<Article>> {
        let resp = self
            .client
            .get(self.listing_url())
            .header(USER_AGENT, &self.cfg.user_agent)
            .send()
            .await
            .context("reddit http get()")?;

        if !resp.status().is_success() {
            tracing::warn!(status = %resp.status(), provider = "Reddit", "non-success listing");
            return Ok(Vec::new());
        }

        let listing: Listing = resp.json().await.context("reddit json")?;
        Ok(self.keep(listing))
    }

    fn name(&self) -> &'static str {
        "Reddit"
    }
}
