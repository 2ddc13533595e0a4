// src/ingest/text.rs
//! Text cleanup for feed fields.
//!
//! Titles are plain text that may carry HTML entities (Reddit escapes `&`,
//! `<` and `>` as `&amp;`, `&lt;`, `&gt;`). Anything that looks like markup in
//! a title is part of the title, so only entities and whitespace are touched.
//! Dev.to descriptions can contain stray markup, which is removed before
//! entities are decoded so escaped text such as `&lt;Vue&gt;` survives.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[A-Za-z][^<>]*>").unwrap());

fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode entities and collapse whitespace. Never drops characters otherwise.
pub fn clean_title(raw: &str) -> String {
    collapse_ws(&html_escape::decode_html_entities(raw))
}

/// Strip markup tags, then decode entities and collapse whitespace.
pub fn clean_summary(raw: &str) -> String {
    let untagged = RE_TAG.replace_all(raw, " ");
    collapse_ws(&html_escape::decode_html_entities(&untagged))
}
