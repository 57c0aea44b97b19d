use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use roster_core::error::Result;
use roster_core::member::Member;
use roster_core::source::RosterSource;

#[derive(Debug, Default)]
struct Inner {
    text: RwLock<String>,
    reads: AtomicUsize,
}

/// In-memory roster source. Holds the raw roster text in RAM.
///
/// Clones share the same contents and read counter.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoster {
    inner: Arc<Inner>,
}

impl MemoryRoster {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                text: RwLock::new(text.into()),
                reads: AtomicUsize::new(0),
            }),
        }
    }

    /// Build a source whose contents are the JSON encoding of `members`.
    pub fn from_members(members: &[Member]) -> Self {
        // A Vec of string-keyed records always encodes.
        let text = serde_json::to_string(members).unwrap_or_default();
        Self::new(text)
    }

    /// Swap the stored contents.
    pub async fn set(&self, text: impl Into<String>) {
        *self.inner.text.write().await = text.into();
    }

    /// How many times `load` has been called.
    pub fn reads(&self) -> usize {
        self.inner.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RosterSource for MemoryRoster {
    async fn load(&self) -> Result<String> {
        self.inner.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.inner.text.read().await.clone())
    }
}
