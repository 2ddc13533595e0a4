//! state.rs — last-topic persistence: one lowercase string, no history.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::topic::Topic;

pub trait TopicStore: Send + Sync {
    /// Previous run's topic. No prior state is `Ok(None)`, not an error.
    fn load(&self) -> Result<Option<Topic>>;
    /// Replaces whatever was stored.
    fn save(&self, topic: &Topic) -> Result<()>;
}

/// Single plain-text file holding the topic.
#[derive(Debug, Clone)]
pub struct FileTopicStore {
    path: PathBuf,
}

impl FileTopicStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TopicStore for FileTopicStore {
    fn load(&self) -> Result<Option<Topic>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let topic = Topic::new(&raw);
                Ok((!topic.as_str().is_empty()).then_some(topic))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("reading last topic from {}", self.path.display()))
            }
        }
    }

    fn save(&self, topic: &Topic) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating state dir {}", dir.display()))?;
        }
        std::fs::write(&self.path, topic.as_str())
            .with_context(|| format!("writing last topic to {}", self.path.display()))
    }
}

/// In-process store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryTopicStore {
    inner: Mutex<Option<Topic>>,
}

impl MemoryTopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(topic: &str) -> Self {
        Self {
            inner: Mutex::new(Some(Topic::new(topic))),
        }
    }
}

impl TopicStore for MemoryTopicStore {
    fn load(&self) -> Result<Option<Topic>> {
        Ok(self.inner.lock().expect("topic store mutex poisoned").clone())
    }

    fn save(&self, topic: &Topic) -> Result<()> {
        *self.inner.lock().expect("topic store mutex poisoned") = Some(topic.clone());
        Ok(())
    }
}
