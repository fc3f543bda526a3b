//! Front-matter extraction
//!
//! Topic files may start with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Getting started
//! order: 1
//! ---
//! body...
//! ```
//!
//! The fence must be the very first line. A file without one has no front
//! matter and the whole text is body.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::MarkupError;

/// Parsed front-matter metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    /// Display title for the topic
    pub title: Option<String>,

    /// Short description shown in catalog listings
    pub description: Option<String>,

    /// Sidebar ordering hint (lower sorts first)
    pub order: Option<u32>,

    /// Topic tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Last-updated date
    pub updated: Option<NaiveDate>,
}

/// Split raw content into front matter and body.
///
/// Returns the parsed front matter (if a fence is present) and the body
/// text that follows it. An opening fence with no closing fence is an
/// error, as is a fenced block that is not valid YAML.
///
/// A leading `---` is always read as a fence, never as a markdown
/// thematic break, so a body that opens with an unclosed `---` line is
/// rejected as unterminated. Authors who want a rule at the very top of
/// a file must write it as `***` or put it below a front-matter block.
pub fn split_front_matter(raw: &str) -> Result<(Option<FrontMatter>, &str), MarkupError> {
    let Some(rest) = strip_fence_line(raw) else {
        return Ok((None, raw));
    };

    let Some(end) = find_closing_fence(rest) else {
        return Err(MarkupError::UnterminatedFrontMatter);
    };

    let yaml = &rest[..end.block_end];
    let body = &rest[end.body_start..];

    // An empty block ("---\n---") carries no metadata
    if yaml.trim().is_empty() {
        return Ok((Some(FrontMatter::default()), body));
    }

    let meta: FrontMatter = serde_yaml::from_str(yaml)?;
    Ok((Some(meta), body))
}

/// Strip a leading `---` line, returning the remainder
fn strip_fence_line(raw: &str) -> Option<&str> {
    let rest = raw.strip_prefix("---")?;
    match rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) {
        Some(after) => Some(after),
        // "---" alone on the last line
        None if rest.is_empty() => Some(rest),
        None => None,
    }
}

struct FenceSplit {
    /// Byte offset where the YAML block ends
    block_end: usize,
    /// Byte offset where the body begins
    body_start: usize,
}

/// Find the closing `---` line within the remainder of the file
fn find_closing_fence(rest: &str) -> Option<FenceSplit> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Some(FenceSplit {
                block_end: offset,
                body_start: offset + line.len(),
            });
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_front_matter() {
        let (meta, body) = split_front_matter("# Title\n\nBody.").unwrap();
        assert!(meta.is_none());
        assert_eq!(body, "# Title\n\nBody.");
    }

    #[test]
    fn test_full_front_matter() {
        let raw = "---\ntitle: Overview\ndescription: Intro topic\norder: 2\ntags:\n  - intro\nupdated: 2024-11-03\n---\n# Title\n";
        let (meta, body) = split_front_matter(raw).unwrap();
        let meta = meta.unwrap();

        assert_eq!(meta.title.as_deref(), Some("Overview"));
        assert_eq!(meta.description.as_deref(), Some("Intro topic"));
        assert_eq!(meta.order, Some(2));
        assert_eq!(meta.tags, vec!["intro"]);
        assert_eq!(
            meta.updated,
            Some(NaiveDate::from_ymd_opt(2024, 11, 3).unwrap())
        );
        assert_eq!(body, "# Title\n");
    }

    #[test]
    fn test_empty_front_matter_block() {
        let (meta, body) = split_front_matter("---\n---\nBody.").unwrap();
        assert_eq!(meta, Some(FrontMatter::default()));
        assert_eq!(body, "Body.");
    }

    #[test]
    fn test_unterminated_fence() {
        let err = split_front_matter("---\ntitle: Broken\n# Title\n").unwrap_err();
        assert!(matches!(err, MarkupError::UnterminatedFrontMatter));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = split_front_matter("---\ntitle: [unclosed\n---\nBody.").unwrap_err();
        assert!(matches!(err, MarkupError::InvalidFrontMatter(_)));
    }

    #[test]
    fn test_leading_thematic_break_reads_as_fence() {
        // A file opening with a bare `---` is claimed by front-matter
        // parsing, so without a closing fence it is unterminated
        let err = split_front_matter("---\n\nBody text.").unwrap_err();
        assert!(matches!(err, MarkupError::UnterminatedFrontMatter));

        // A second `---` closes the fence; the break never reaches the body
        let (meta, body) = split_front_matter("---\n---\n\n---\nBody.").unwrap();
        assert_eq!(meta, Some(FrontMatter::default()));
        assert_eq!(body, "\n---\nBody.");
    }

    #[test]
    fn test_fence_must_be_first_line() {
        let raw = "\n---\ntitle: Late\n---\nBody.";
        let (meta, body) = split_front_matter(raw).unwrap();
        assert!(meta.is_none());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = "---\r\ntitle: Windows\r\n---\r\nBody.";
        let (meta, body) = split_front_matter(raw).unwrap();
        assert_eq!(meta.unwrap().title.as_deref(), Some("Windows"));
        assert_eq!(body, "Body.");
    }
}
