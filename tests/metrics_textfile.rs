// tests/metrics_textfile.rs
#![cfg(feature = "strict-metrics")]
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusBuilder;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tech_pick::{Article, MemoryTopicStore, Notifier, Pipeline, Source, SourceProvider, TopicList};

struct OneArticle;

#[async_trait]
impl SourceProvider for OneArticle {
    async fn fetch_latest(&self) -> Result<Vec<Article>> {
        Ok(vec![Article {
            title: "Cloud outage postmortem".into(),
            url: "https://example.test/outage".into(),
            source: Source::HackerNews,
            summary: String::new(),
            score: 250,
        }])
    }
    fn name(&self) -> &'static str {
        "OneArticle"
    }
}

struct Discard;

#[async_trait]
impl Notifier for Discard {
    async fn send(&self, _article: &Article) -> Result<()> {
        Ok(())
    }
}

/// Enable via: `cargo test --features strict-metrics --test metrics_textfile`
#[tokio::test]
async fn run_metrics_are_rendered() {
    let handle = PrometheusBuilder::new().install_recorder().expect("recorder");

    let pipeline = Pipeline::new(
        vec![Box::new(OneArticle)],
        Arc::new(TopicList::default()),
        MemoryTopicStore::new(),
        Discard,
    );
    pipeline
        .run_once(&mut StdRng::seed_from_u64(5))
        .await
        .expect("run");

    let out = handle.render();
    assert!(out.contains("digest_runs_total"));
    assert!(out.contains("digest_articles_fetched_total"));
    assert!(out.contains("digest_last_run_ts"));
}
