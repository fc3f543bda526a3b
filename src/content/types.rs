//! Core content types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::markup::{parse_blocks, split_front_matter, Block, FrontMatter};

use super::error::ContentError;

/// Logical content identifier (`section/topic`-style path)
///
/// Identifiers are validated on construction: segments are non-empty and
/// limited to lowercase ASCII alphanumerics, `-`, and `_`. This rejects
/// traversal attempts and malformed paths before any storage access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentId(String);

impl ContentId {
    /// Get the raw identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments of the identifier
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// The final path segment, which names the backing file
    pub fn last_segment(&self) -> &str {
        // Validation guarantees at least one segment
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    fn validate(raw: &str) -> bool {
        !raw.is_empty()
            && raw.split('/').all(|segment| {
                !segment.is_empty()
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
            })
    }
}

impl FromStr for ContentId {
    type Err = ContentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if Self::validate(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ContentError::InvalidId(raw.to_string()))
        }
    }
}

impl TryFrom<String> for ContentId {
    type Error = ContentError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<ContentId> for String {
    fn from(id: ContentId) -> Self {
        id.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Heading outline entry with its anchor slug
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingRef {
    /// Heading level (1-6)
    pub level: u8,
    /// Heading text
    pub text: String,
    /// Anchor slug
    pub slug: String,
}

/// Parsed, ready-to-render document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderableDocument {
    /// Identifier this document was loaded under
    pub id: ContentId,

    /// Front-matter metadata, if the file carried a block
    pub meta: Option<FrontMatter>,

    /// Ordered content blocks
    pub blocks: Vec<Block>,

    /// Heading outline for anchor navigation
    pub outline: Vec<HeadingRef>,
}

impl RenderableDocument {
    /// Parse raw file content into a renderable document
    pub fn parse(id: ContentId, raw: &str) -> Result<Self, ContentError> {
        let (meta, body) = split_front_matter(raw).map_err(|source| ContentError::Parse {
            id: id.to_string(),
            source,
        })?;

        let blocks = parse_blocks(body);
        let outline = blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { level, text, slug } => Some(HeadingRef {
                    level: *level,
                    text: text.clone(),
                    slug: slug.clone(),
                }),
                _ => None,
            })
            .collect();

        Ok(Self {
            id,
            meta,
            blocks,
            outline,
        })
    }

    /// Display title: front-matter title, else the first heading, else the
    /// identifier's last segment
    pub fn title(&self) -> &str {
        if let Some(title) = self.meta.as_ref().and_then(|m| m.title.as_deref()) {
            return title;
        }
        if let Some(heading) = self.outline.first() {
            return &heading.text;
        }
        self.id.last_segment()
    }
}
