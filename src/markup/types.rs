//! Renderable block and inline types
//!
//! Format-agnostic content blocks produced by the markdown parser. The
//! frontend maps these one-to-one onto its own components, so the shapes
//! here are part of the API contract.

use serde::{Deserialize, Serialize};

/// A top-level content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// Section heading with a pre-computed anchor slug
    #[serde(rename_all = "camelCase")]
    Heading {
        /// Heading level (1-6)
        level: u8,
        /// Flattened heading text
        text: String,
        /// Anchor slug derived from the text
        slug: String,
    },

    /// Paragraph of inline content
    Paragraph { spans: Vec<Inline> },

    /// Bullet or ordered list
    #[serde(rename_all = "camelCase")]
    List {
        kind: ListKind,
        /// One entry per list item, each a flat run of inline spans
        items: Vec<Vec<Inline>>,
    },

    /// Fenced code block
    #[serde(rename_all = "camelCase")]
    CodeBlock {
        /// Language tag from the fence info string, if any
        language: Option<String>,
        code: String,
    },

    /// Block quote, flattened to inline spans
    Quote { spans: Vec<Inline> },

    /// Thematic break (horizontal rule)
    Rule,
}

/// List flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Ordered,
}

/// An inline span within a paragraph, list item, or quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    /// Plain text run
    Text { text: String },

    /// Emphasized (italic) text
    Emphasis { text: String },

    /// Strong (bold) text
    Strong { text: String },

    /// Inline code span
    Code { text: String },

    /// Hyperlink
    #[serde(rename_all = "camelCase")]
    Link { text: String, href: String },
}

impl Inline {
    /// The visible text of this span
    pub fn text(&self) -> &str {
        match self {
            Inline::Text { text }
            | Inline::Emphasis { text }
            | Inline::Strong { text }
            | Inline::Code { text }
            | Inline::Link { text, .. } => text,
        }
    }
}
