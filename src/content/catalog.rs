//! Navigation catalog built from the content tree
//!
//! The docs sidebar needs the full topic tree up front, so the catalog
//! walks the content root once at startup (and again on demand via the
//! refresh endpoint), pulling titles out of each topic's front matter.
//! Files that fail to read or parse are skipped with a warning; one broken
//! topic should not blank the whole sidebar.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::RwLock;

use crate::markup::split_front_matter;

use super::error::ContentResult;
use super::resolver::ContentResolver;
use super::types::ContentId;

/// Full navigation catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub sections: Vec<Section>,
}

/// Top-level sidebar section (first identifier segment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section slug (directory name)
    pub slug: String,
    /// Display title derived from the slug
    pub title: String,
    /// Topics in sidebar order
    pub topics: Vec<TopicSummary>,
}

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    /// Identifier to load the topic with
    pub id: ContentId,
    /// Display title from front matter, or derived from the slug
    pub title: String,
    /// Short description from front matter
    pub description: Option<String>,
    /// Explicit ordering hint from front matter
    pub order: Option<u32>,
}

impl Catalog {
    /// Scan the resolver's content root into a catalog.
    ///
    /// Topics sort by front-matter `order` (unordered topics last), then
    /// title. Sections sort by slug.
    pub async fn scan(resolver: &ContentResolver) -> ContentResult<Self> {
        let mut by_section: BTreeMap<String, Vec<TopicSummary>> = BTreeMap::new();

        for dir in topic_directories(resolver.root()).await? {
            let Some(id) = identifier_for(resolver.root(), &dir) else {
                continue;
            };
            // Intermediate directories carry no topic file of their own
            let path = resolver.resolve(&id);
            if !fs::try_exists(&path).await.unwrap_or(false) {
                continue;
            }

            let Some(summary) = summarize(&id, &path).await else {
                continue;
            };

            let section = id
                .segments()
                .next()
                .unwrap_or_default()
                .to_string();
            by_section.entry(section).or_default().push(summary);
        }

        let sections = by_section
            .into_iter()
            .map(|(slug, mut topics)| {
                topics.sort_by(|a, b| {
                    let a_key = (a.order.unwrap_or(u32::MAX), a.title.as_str());
                    let b_key = (b.order.unwrap_or(u32::MAX), b.title.as_str());
                    a_key.cmp(&b_key)
                });
                Section {
                    title: humanize(&slug),
                    slug,
                    topics,
                }
            })
            .collect();

        Ok(Self { sections })
    }

    /// Total topic count across sections
    pub fn topic_count(&self) -> usize {
        self.sections.iter().map(|s| s.topics.len()).sum()
    }
}

/// Shared, refreshable catalog handle
#[derive(Clone, Default)]
pub struct CatalogCache {
    catalog: Arc<RwLock<Catalog>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rescan the content root and swap in the result
    pub async fn refresh(&self, resolver: &ContentResolver) -> ContentResult<()> {
        let catalog = Catalog::scan(resolver).await?;
        *self.catalog.write().await = catalog;
        Ok(())
    }

    pub async fn get(&self) -> Catalog {
        self.catalog.read().await.clone()
    }
}

/// Collect every directory under the root, depth-first with an explicit
/// stack (recursive async would need boxing for no benefit here)
async fn topic_directories(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                pending.push(entry.path());
                dirs.push(entry.path());
            }
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// Derive the content identifier a directory corresponds to, if its
/// relative path is a valid identifier
fn identifier_for(root: &Path, dir: &Path) -> Option<ContentId> {
    let relative = dir.strip_prefix(root).ok()?;
    let mut segments = Vec::new();
    for part in relative.iter() {
        segments.push(part.to_str()?);
    }
    segments.join("/").parse().ok()
}

/// Build a topic summary from its front matter, skipping unreadable or
/// malformed files
async fn summarize(id: &ContentId, path: &Path) -> Option<TopicSummary> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(id = %id, error = %e, "skipping unreadable topic");
            return None;
        }
    };

    let meta = match split_front_matter(&raw) {
        Ok((meta, _)) => meta.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(id = %id, error = %e, "skipping topic with malformed front matter");
            return None;
        }
    };

    Some(TopicSummary {
        title: meta
            .title
            .unwrap_or_else(|| humanize(id.last_segment())),
        description: meta.description,
        order: meta.order,
        id: id.clone(),
    })
}

/// Turn a slug into a display title: `getting-started` -> `Getting started`
fn humanize(slug: &str) -> String {
    let mut title = slug.replace(['-', '_'], " ");
    if let Some(first) = title.get(..1) {
        let upper = first.to_uppercase();
        title.replace_range(..1, &upper);
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn write_topic(root: &Path, id: &str, content: &str) {
        let dir = root.join(id);
        std::fs::create_dir_all(&dir).unwrap();
        let name = id.rsplit('/').next().unwrap();
        std::fs::write(dir.join(format!("{name}.mdx")), content).unwrap();
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("getting-started"), "Getting started");
        assert_eq!(humanize("api_reference"), "Api reference");
        assert_eq!(humanize("faq"), "Faq");
    }

    #[tokio::test]
    async fn test_scan_orders_topics() {
        let tmp = TempDir::new().unwrap();
        write_topic(
            tmp.path(),
            "introduction/overview",
            "---\ntitle: Overview\norder: 1\n---\nBody.",
        );
        write_topic(
            tmp.path(),
            "introduction/concepts",
            "---\ntitle: Concepts\norder: 2\n---\nBody.",
        );
        write_topic(
            tmp.path(),
            "introduction/appendix",
            "---\ntitle: Appendix\n---\nBody.",
        );

        let resolver = ContentResolver::new(tmp.path());
        let catalog = Catalog::scan(&resolver).await.unwrap();

        assert_eq!(catalog.sections.len(), 1);
        let section = &catalog.sections[0];
        assert_eq!(section.slug, "introduction");
        assert_eq!(section.title, "Introduction");

        let titles: Vec<_> = section.topics.iter().map(|t| t.title.as_str()).collect();
        // Ordered topics first, unordered last
        assert_eq!(titles, vec!["Overview", "Concepts", "Appendix"]);
    }

    #[tokio::test]
    async fn test_scan_ignores_directories_without_topic_file() {
        let tmp = TempDir::new().unwrap();
        write_topic(tmp.path(), "guides/escrow/setup", "---\ntitle: Setup\n---\nBody.");

        let resolver = ContentResolver::new(tmp.path());
        let catalog = Catalog::scan(&resolver).await.unwrap();

        // `guides` and `guides/escrow` are intermediate directories only
        assert_eq!(catalog.topic_count(), 1);
        assert_eq!(catalog.sections[0].topics[0].id.as_str(), "guides/escrow/setup");
    }

    #[tokio::test]
    async fn test_scan_skips_malformed_topic() {
        let tmp = TempDir::new().unwrap();
        write_topic(tmp.path(), "guides/good", "---\ntitle: Good\n---\nBody.");
        write_topic(tmp.path(), "guides/bad", "---\ntitle: never closed\n");

        let resolver = ContentResolver::new(tmp.path());
        let catalog = Catalog::scan(&resolver).await.unwrap();

        assert_eq!(catalog.topic_count(), 1);
        assert_eq!(catalog.sections[0].topics[0].title, "Good");
    }

    #[tokio::test]
    async fn test_scan_falls_back_to_slug_title() {
        let tmp = TempDir::new().unwrap();
        write_topic(tmp.path(), "community/meet-the-team", "# Hello\n");

        let resolver = ContentResolver::new(tmp.path());
        let catalog = Catalog::scan(&resolver).await.unwrap();

        assert_eq!(catalog.sections[0].topics[0].title, "Meet the team");
    }

    #[tokio::test]
    async fn test_catalog_cache_refresh() {
        let tmp = TempDir::new().unwrap();
        let resolver = ContentResolver::new(tmp.path());
        let cache = CatalogCache::new();

        cache.refresh(&resolver).await.unwrap();
        assert_eq!(cache.get().await.topic_count(), 0);

        write_topic(tmp.path(), "faq", "---\ntitle: FAQ\n---\nBody.");
        cache.refresh(&resolver).await.unwrap();
        assert_eq!(cache.get().await.topic_count(), 1);
    }
}
