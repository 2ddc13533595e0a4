// src/notify/mod.rs
pub mod email;

use anyhow::Result;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::ingest::types::Article;

pub use email::EmailSender;

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver the article of the day. Errors are fatal to the run.
    async fn send(&self, article: &Article) -> Result<()>;
}

pub fn subject_for(article: &Article) -> String {
    format!("📰 Sujet tech du jour : {}", article.title)
}

/// Minimal HTML fragment: title, source, summary and a link.
pub fn render_html(article: &Article) -> String {
    format!(
        "<h2>{title}</h2>\n\
         <p><strong>Source :</strong> {source}</p>\n\
         <p>{summary}</p>\n\
         <a href=\"{url}\">Lire l'article</a>\n",
        title = encode_text(&article.title),
        source = encode_text(article.source.label()),
        summary = encode_text(&article.summary),
        url = encode_double_quoted_attribute(&article.url),
    )
}
