//! Content store with process-lifetime memoization
//!
//! The store resolves identifiers to backing files, parses them, and keeps
//! every parsed document for the life of the process. There is no eviction
//! or invalidation; topic files are deployment artifacts and only change
//! with a redeploy.
//!
//! # Thread Safety
//!
//! The cache uses `tokio::sync::RwLock` for async-safe access and the
//! store is cheap to clone (`Arc` internals). Concurrent first-loads of
//! the same identifier are not coalesced: each performs its own read and
//! parse, and the first insert wins. The duplicate work is idempotent, so
//! this is redundant I/O at worst, never inconsistent state.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::sync::Arc;

use tokio::fs;
use tokio::sync::RwLock;

use super::error::{ContentError, ContentResult};
use super::resolver::ContentResolver;
use super::types::{ContentId, RenderableDocument};

/// Memoizing content loader
#[derive(Clone)]
pub struct ContentStore {
    resolver: Arc<ContentResolver>,
    cache: Arc<RwLock<HashMap<ContentId, Arc<RenderableDocument>>>>,
}

impl ContentStore {
    /// Create a store over a resolver with an empty cache
    pub fn new(resolver: ContentResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The resolver backing this store
    pub fn resolver(&self) -> &ContentResolver {
        &self.resolver
    }

    /// Load a document, reading and parsing its backing file at most once
    /// per process lifetime on the success path.
    ///
    /// Failed loads insert nothing, so a topic that appears after a deploy
    /// race is retried on the next request.
    pub async fn load(&self, id: &ContentId) -> ContentResult<Arc<RenderableDocument>> {
        // Cache hit: no I/O
        {
            let cache = self.cache.read().await;
            if let Some(doc) = cache.get(id) {
                return Ok(doc.clone());
            }
        }

        let path = self.resolver.resolve(id);
        let raw = fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ContentError::NotFound(id.to_string())
            } else {
                ContentError::Io(e)
            }
        })?;

        if raw.trim().is_empty() {
            return Err(ContentError::EmptyContent(id.to_string()));
        }

        let doc = Arc::new(RenderableDocument::parse(id.clone(), &raw)?);
        tracing::debug!(id = %id, path = %path.display(), "parsed content file");

        // First insert wins if two misses raced; both parsed the same file
        let mut cache = self.cache.write().await;
        let entry = cache.entry(id.clone()).or_insert(doc);
        Ok(entry.clone())
    }

    /// Check whether a document is cached
    pub async fn contains(&self, id: &ContentId) -> bool {
        let cache = self.cache.read().await;
        cache.contains_key(id)
    }

    /// Number of cached documents
    pub async fn len(&self) -> usize {
        let cache = self.cache.read().await;
        cache.len()
    }

    /// Check whether the cache is empty
    pub async fn is_empty(&self) -> bool {
        let cache = self.cache.read().await;
        cache.is_empty()
    }

    /// Cache statistics
    pub async fn stats(&self) -> StoreStats {
        let cache = self.cache.read().await;
        StoreStats {
            documents: cache.len(),
        }
    }
}

/// Store statistics
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    /// Number of memoized documents
    pub documents: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    use tempfile::TempDir;

    fn write_topic(root: &Path, id: &str, content: &str) {
        let dir = root.join(id);
        std::fs::create_dir_all(&dir).unwrap();
        let name = id.rsplit('/').next().unwrap();
        std::fs::write(dir.join(format!("{name}.mdx")), content).unwrap();
    }

    fn store(root: &Path) -> ContentStore {
        ContentStore::new(ContentResolver::new(root))
    }

    #[tokio::test]
    async fn test_load_parses_backing_file() {
        let tmp = TempDir::new().unwrap();
        write_topic(tmp.path(), "introduction/overview", "# Title\n\nBody text.");

        let store = store(tmp.path());
        let id: ContentId = "introduction/overview".parse().unwrap();
        let doc = store.load(&id).await.unwrap();

        assert_eq!(doc.outline.len(), 1);
        assert_eq!(doc.outline[0].text, "Title");
        assert_eq!(doc.outline[0].slug, "title");
        assert_eq!(
            *doc,
            RenderableDocument::parse(id.clone(), "# Title\n\nBody text.").unwrap()
        );
        assert!(store.contains(&id).await);
    }

    #[tokio::test]
    async fn test_second_load_skips_filesystem() {
        let tmp = TempDir::new().unwrap();
        write_topic(tmp.path(), "introduction/overview", "# Title\n\nBody text.");

        let store = store(tmp.path());
        let id: ContentId = "introduction/overview".parse().unwrap();
        let first = store.load(&id).await.unwrap();

        // Deleting the backing file proves the second load never reads it
        std::fs::remove_file(
            tmp.path()
                .join("introduction/overview/overview.mdx"),
        )
        .unwrap();

        let second = store.load(&id).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_missing_topic_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let store = store(tmp.path());
        let id: ContentId = "nowhere/nothing".parse().unwrap();

        let err = store.load(&id).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)));
        assert!(!store.contains(&id).await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_empty_topic_is_rejected() {
        let tmp = TempDir::new().unwrap();
        write_topic(tmp.path(), "blank", "   \n\n");

        let store = store(tmp.path());
        let id: ContentId = "blank".parse().unwrap();

        let err = store.load(&id).await.unwrap_err();
        assert!(matches!(err, ContentError::EmptyContent(_)));
        assert!(!store.contains(&id).await);
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let tmp = TempDir::new().unwrap();
        let store = store(tmp.path());
        let id: ContentId = "late/topic".parse().unwrap();

        assert!(store.load(&id).await.is_err());

        // Topic appears after the first failure
        write_topic(tmp.path(), "late/topic", "# Now here\n");
        let doc = store.load(&id).await.unwrap();
        assert_eq!(doc.title(), "Now here");
    }

    #[tokio::test]
    async fn test_parse_failure_inserts_nothing() {
        let tmp = TempDir::new().unwrap();
        write_topic(tmp.path(), "broken", "---\ntitle: unterminated\n");

        let store = store(tmp.path());
        let id: ContentId = "broken".parse().unwrap();

        let err = store.load(&id).await.unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_distinct_identifiers_cached_independently() {
        let tmp = TempDir::new().unwrap();
        write_topic(tmp.path(), "a", "# A\n");
        write_topic(tmp.path(), "b", "# B\n");

        let store = store(tmp.path());
        store.load(&"a".parse().unwrap()).await.unwrap();
        store.load(&"b".parse().unwrap()).await.unwrap();

        assert_eq!(store.stats().await.documents, 2);
    }
}
