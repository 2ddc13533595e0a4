//! tech-pick — Binary Entrypoint
//! One run: fetch Dev.to / Hacker News / Reddit, pick the article of the day,
//! remember its topic, email it. Meant to be invoked once a day by a scheduler.

use std::sync::Arc;

use anyhow::{Context, Result};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tech_pick::config::{load_sources_default, AppConfig};
use tech_pick::ingest::providers::build_default_providers;
use tech_pick::notify::EmailSender;
use tech_pick::{FileTopicStore, Pipeline, RunOutcome};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

/// Install the Prometheus recorder only when a textfile target is configured.
fn init_metrics(cfg: &AppConfig) -> Result<Option<PrometheusHandle>> {
    if cfg.metrics_textfile.is_none() {
        return Ok(None);
    }
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("prometheus: install recorder")?;
    Ok(Some(handle))
}

fn write_metrics(cfg: &AppConfig, handle: Option<&PrometheusHandle>) {
    let (Some(path), Some(handle)) = (cfg.metrics_textfile.as_ref(), handle) else {
        return;
    };
    if let Err(e) = std::fs::write(path, handle.render()) {
        tracing::warn!(error = %e, path = %path.display(), "could not write metrics textfile");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when the scheduler provides the env.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = AppConfig::from_env()?;
    tracing::debug!(config = ?cfg, "configuration loaded");
    let metrics = init_metrics(&cfg)?;

    let sources = load_sources_default()?;
    let topics = Arc::new(sources.topic_list());
    let providers = build_default_providers(&sources, topics.clone())?;

    let pipeline = Pipeline::new(
        providers,
        topics,
        FileTopicStore::new(cfg.last_topic_file.clone()),
        EmailSender::from_config(&cfg)?,
    );

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let outcome = pipeline.run_once(&mut rng).await;
    write_metrics(&cfg, metrics.as_ref());

    match outcome? {
        RunOutcome::NoArticles => tracing::info!("nothing sent today"),
        RunOutcome::Sent { article, topic, .. } => {
            tracing::info!(title = %article.title, source = %article.source, topic = %topic, "done")
        }
    }
    Ok(())
}
