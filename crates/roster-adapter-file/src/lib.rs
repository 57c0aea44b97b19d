use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use async_trait::async_trait;
use tokio::sync::RwLock;

use roster_core::error::Result;
use roster_core::source::RosterSource;

/// Default location of the roster, relative to the working directory.
pub const DEFAULT_ROSTER_PATH: &str = "data/members.json";

#[derive(Debug, Clone, PartialEq)]
struct Stamp {
    modified: Option<SystemTime>,
    len: u64,
}

#[derive(Debug)]
struct Cached {
    stamp: Stamp,
    text: String,
}

/// Roster source backed by a JSON file.
///
/// Every `load` re-reads the file. With [`FileRoster::with_cache`] the last
/// contents are kept and reused until the file's modification time or
/// length changes.
#[derive(Debug, Clone)]
pub struct FileRoster {
    path: PathBuf,
    cache: Option<Arc<RwLock<Option<Cached>>>>,
}

impl FileRoster {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: None,
        }
    }

    /// Keep the last contents and reuse them while the file's modification
    /// time and length are unchanged.
    ///
    /// A rewrite that keeps the same length and lands within the same mtime
    /// tick is not detected and serves the previous contents until the next
    /// change to either value.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(Arc::new(RwLock::new(None)));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    async fn stamp(&self) -> Result<Stamp> {
        let meta = tokio::fs::metadata(&self.path).await?;
        Ok(Stamp {
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }

    async fn load_cached(&self, cache: &RwLock<Option<Cached>>) -> Result<String> {
        let stamp = self.stamp().await?;

        // Without an mtime we cannot tell whether the file changed.
        if stamp.modified.is_some() {
            let guard = cache.read().await;
            if let Some(cached) = guard.as_ref() {
                if cached.stamp == stamp {
                    tracing::trace!(path = %self.path.display(), "roster cache hit");
                    return Ok(cached.text.clone());
                }
            }
        }

        let text = tokio::fs::read_to_string(&self.path).await?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = text.len(),
            "roster reloaded from disk"
        );
        *cache.write().await = Some(Cached {
            stamp,
            text: text.clone(),
        });
        Ok(text)
    }
}

impl Default for FileRoster {
    fn default() -> Self {
        Self::new(DEFAULT_ROSTER_PATH)
    }
}

#[async_trait]
impl RosterSource for FileRoster {
    async fn load(&self) -> Result<String> {
        match &self.cache {
            Some(cache) => self.load_cached(cache).await,
            None => Ok(tokio::fs::read_to_string(&self.path).await?),
        }
    }
}
