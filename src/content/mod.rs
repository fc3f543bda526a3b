//! Content loading, caching, and cataloging
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                   ContentStore                     │
//! │   (process-lifetime memoization of parsed topics)  │
//! └────────────────────────────────────────────────────┘
//!            │                          │
//!            ▼                          ▼
//!   ┌─────────────────┐       ┌──────────────────────┐
//!   │ ContentResolver │       │  markup (front matter │
//!   │  id -> path     │       │  + markdown blocks)   │
//!   └─────────────────┘       └──────────────────────┘
//! ```
//!
//! A [`ContentId`] names one topic. The resolver maps it onto a fixed
//! file layout under the content root, the markup layer parses the file
//! into a [`RenderableDocument`], and the store memoizes the result for
//! the life of the process. The [`Catalog`] is a separate, refreshable
//! view over the same tree used for sidebar navigation.

mod catalog;
mod error;
mod resolver;
mod store;
mod types;

pub use catalog::{Catalog, CatalogCache, Section, TopicSummary};
pub use error::{ContentError, ContentResult};
pub use resolver::{ContentResolver, DEFAULT_EXTENSION};
pub use store::{ContentStore, StoreStats};
pub use types::{ContentId, HeadingRef, RenderableDocument};
