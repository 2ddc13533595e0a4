// src/ingest/mod.rs
pub mod providers;
pub mod text;
pub mod types;

use crate::ingest::types::{Article, SourceProvider};
use metrics::{counter, describe_counter, describe_gauge};
use once_cell::sync::OnceCell;

/// One-time metrics registration (so series show up in the textfile dump).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "digest_articles_fetched_total",
            "Articles kept by source adapters after keyword + score filters."
        );
        describe_counter!(
            "digest_provider_errors_total",
            "Provider fetch/decode errors."
        );
        describe_counter!(
            "digest_items_skipped_total",
            "Individual feed items skipped as malformed or unreachable."
        );
        describe_counter!("digest_runs_total", "Pipeline runs started.");
        describe_counter!(
            "digest_selection_fallback_total",
            "Runs where the repeat-topic filter emptied the candidates."
        );
        describe_gauge!("digest_last_run_ts", "Unix ts when the pipeline last ran.");
    });
}

/// Query every provider in order, one at a time, and merge what they return.
/// A failing provider contributes nothing; the others still run.
pub async fn fetch_all(providers: &[Box<dyn SourceProvider>]) -> Vec<Article> {
    ensure_metrics_described();

    let mut merged = Vec::new();
    for p in providers {
        match p.fetch_latest().await {
            Ok(mut v) => {
                tracing::info!(provider = p.name(), kept = v.len(), "provider fetched");
                counter!("digest_articles_fetched_total", "provider" => p.name())
                    .increment(v.len() as u64);
                merged.append(&mut v);
            }
            Err(e) => {
                tracing::warn!(error = ?e, provider = p.name(), "provider error");
                counter!("digest_provider_errors_total", "provider" => p.name()).increment(1);
            }
        }
    }
    merged
}
