//! Markdown-with-front-matter parsing
//!
//! This module turns raw topic files into the structured form the frontend
//! renders. A file is an optional `---` YAML front-matter block followed by
//! a markdown body. The body is parsed into a flat list of [`Block`]s with
//! slugged headings so the frontend can build anchor links without
//! reprocessing the text.

mod frontmatter;
mod parser;
mod types;

pub use frontmatter::{split_front_matter, FrontMatter};
pub use parser::{parse_blocks, slugify};
pub use types::{Block, Inline, ListKind};

use thiserror::Error;

/// Markup-level error type
#[derive(Debug, Error)]
pub enum MarkupError {
    /// Front-matter fence opened but never closed
    #[error("Unterminated front-matter block")]
    UnterminatedFrontMatter,

    /// Front-matter block is not valid YAML
    #[error("Invalid front matter: {0}")]
    InvalidFrontMatter(#[from] serde_yaml::Error),
}
