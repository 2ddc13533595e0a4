// src/ingest/types.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    DevTo,
    HackerNews,
    Reddit,
}

impl Source {
    pub fn label(self) -> &'static str {
        match self {
            Source::DevTo => "Dev.to",
            Source::HackerNews => "Hacker News",
            Source::Reddit => "Reddit",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub source: Source,
    pub summary: String, // may be empty
    pub score: u64,      // reactions (Dev.to), points (HN), upvotes (Reddit)
}

#[async_trait::async_trait]
pub trait SourceProvider: Send + Sync {
    /// Articles that passed this source's keyword and score filters.
    /// A non-2xx listing response yields `Ok(vec![])`.
    async fn fetch_latest(&self) -> Result<Vec<Article>>;
    fn name(&self) -> &'static str;
}
