//! # Topic matching
//! Ordered keyword list and title → topic detection.
//!
//! The list is an injected value (see `config::sources`), never a global, so
//! adapters, selector and tests can all run against their own keyword set.
//! Matching is a case-insensitive substring test; when a title contains more
//! than one keyword, the first one in list order wins.

use std::fmt;

/// Sentinel topic for titles that match no keyword.
pub const UNKNOWN_TOPIC: &str = "unknown";

/// Keywords tracked when no settings file overrides them.
pub const DEFAULT_TOPICS: &[&str] = &[
    "javascript",
    "typescript",
    "angular",
    "react",
    "vue",
    "machine learning",
    "AI",
    "cloud",
    "microservices",
    ".NET",
    "C#",
    "architecture logicielle",
    "sécurité",
    "DevOps",
    "CI/CD",
];

/// A lowercase topic string: one keyword from the list, or `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    /// Trims and lowercases `raw`.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN_TOPIC.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_TOPIC
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable, ordered list of tracked keywords, stored lowercased so the
/// per-title scan does not re-lowercase the whole list every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicList {
    keywords: Vec<String>,
}

impl TopicList {
    /// Builds a list from raw keywords: trims, drops blanks, drops
    /// case-insensitive duplicates (first position is kept).
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = Vec::new();
        for it in items {
            let k = it.as_ref().trim().to_lowercase();
            if k.is_empty() || keywords.contains(&k) {
                continue;
            }
            keywords.push(k);
        }
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// First keyword (in list order) contained in `title`, case-insensitive.
    pub fn first_match(&self, title: &str) -> Option<&str> {
        let lowered = title.to_lowercase();
        self.keywords
            .iter()
            .find(|k| lowered.contains(k.as_str()))
            .map(String::as_str)
    }

    /// Keyword filter used by every source adapter.
    pub fn matches(&self, title: &str) -> bool {
        self.first_match(title).is_some()
    }

    pub fn detect_topic(&self, title: &str) -> Topic {
        match self.first_match(title) {
            Some(k) => Topic(k.to_string()),
            None => Topic::unknown(),
        }
    }
}

impl Default for TopicList {
    fn default() -> Self {
        Self::new(DEFAULT_TOPICS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_keyword_case_insensitively() {
        let topics = TopicList::default();
        assert_eq!(
            topics.detect_topic("Scaling TypeScript monorepos").as_str(),
            "typescript"
        );
        assert_eq!(topics.detect_topic("DEVOPS at scale").as_str(), "devops");
        assert_eq!(topics.detect_topic("Sécurité des API").as_str(), "sécurité");
    }

    #[test]
    fn first_in_list_wins() {
        let topics = TopicList::default();
        // "javascript" precedes "react" in the list
        assert_eq!(
            topics.detect_topic("React hooks for JavaScript developers").as_str(),
            "javascript"
        );
    }

    #[test]
    fn no_match_is_unknown() {
        let topics = TopicList::new(["rust", "go"]);
        let t = topics.detect_topic("Weekly knitting patterns");
        assert!(t.is_unknown());
        assert_eq!(t.to_string(), "unknown");
    }

    #[test]
    fn blanks_and_duplicates_are_dropped() {
        let topics = TopicList::new([" Rust ", "", "rust", "Go"]);
        assert_eq!(topics.keywords(), &["rust".to_string(), "go".to_string()]);
    }

    #[test]
    fn topic_new_normalizes() {
        assert_eq!(Topic::new("  Cloud\n").as_str(), "cloud");
    }
}
