//! # Daily pipeline
//! fetch → select → persist topic → notify, strictly in that order.
//!
//! The topic is saved before the email goes out, so a failed send still
//! advances the last-topic state.

use anyhow::Result;
use metrics::{counter, gauge};
use rand::Rng;
use std::sync::Arc;
use tracing::{info, warn};

use crate::ingest::types::{Article, SourceProvider};
use crate::ingest::{ensure_metrics_described, fetch_all};
use crate::notify::Notifier;
use crate::select::select;
use crate::state::TopicStore;
use crate::topic::{Topic, TopicList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing survived the adapters' filters; no state write, no email.
    NoArticles,
    Sent {
        article: Article,
        topic: Topic,
        fallback: bool,
    },
}

pub struct Pipeline<S, N> {
    providers: Vec<Box<dyn SourceProvider>>,
    topics: Arc<TopicList>,
    store: S,
    notifier: N,
}

impl<S: TopicStore, N: Notifier> Pipeline<S, N> {
    pub fn new(
        providers: Vec<Box<dyn SourceProvider>>,
        topics: Arc<TopicList>,
        store: S,
        notifier: N,
    ) -> Self {
        Self {
            providers,
            topics,
            store,
            notifier,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub async fn run_once<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RunOutcome> {
        ensure_metrics_described();
        counter!("digest_runs_total").increment(1);
        gauge!("digest_last_run_ts").set(chrono::Utc::now().timestamp() as f64);

        info!(
            started_at = %chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            providers = self.providers.len(),
            "searching for popular tech topics"
        );

        let articles = fetch_all(&self.providers).await;
        if articles.is_empty() {
            warn!("no article found today");
            return Ok(RunOutcome::NoArticles);
        }
        info!(count = articles.len(), "merged candidate articles");

        let last_topic = self.store.load()?;
        let Some(selection) = select(articles, last_topic.as_ref(), &self.topics, rng) else {
            // select() only declines an empty list, handled above.
            return Ok(RunOutcome::NoArticles);
        };
        if selection.fallback {
            counter!("digest_selection_fallback_total").increment(1);
        }

        self.store.save(&selection.topic)?;
        self.notifier.send(&selection.article).await?;

        info!(
            title = %selection.article.title,
            source = %selection.article.source,
            topic = %selection.topic,
            score = selection.article.score,
            "article sent"
        );

        Ok(RunOutcome::Sent {
            article: selection.article,
            topic: selection.topic,
            fallback: selection.fallback,
        })
    }
}
