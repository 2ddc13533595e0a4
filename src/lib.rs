// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod config;
pub mod ingest;
pub mod notify;
pub mod pipeline;
pub mod select;
pub mod state;
pub mod topic;

// ---- Re-exports for stable public API ----
pub use crate::ingest::types::{Article, Source, SourceProvider};
pub use crate::notify::Notifier;
pub use crate::pipeline::{Pipeline, RunOutcome};
pub use crate::state::{FileTopicStore, MemoryTopicStore, TopicStore};
pub use crate::topic::{Topic, TopicList};
