//! Markdown body parsing
//!
//! Walks the comrak AST and flattens it into the [`Block`] list the
//! frontend renders. Inline formatting survives as [`Inline`] spans;
//! anything the docs site does not render (raw HTML, images) is dropped.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};

use super::types::{Block, Inline, ListKind};

/// Parse a markdown body into renderable blocks
pub fn parse_blocks(body: &str) -> Vec<Block> {
    let arena = Arena::new();
    let root = parse_document(&arena, body, &Options::default());

    let mut blocks = Vec::new();
    for node in root.children() {
        if let Some(block) = convert_block(node) {
            blocks.push(block);
        }
    }
    blocks
}

/// Derive an anchor slug from heading text.
///
/// Lowercases the text, keeps alphanumerics, and collapses every other run
/// of characters into a single `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }

    slug
}

fn convert_block<'a>(node: &'a AstNode<'a>) -> Option<Block> {
    match &node.data.borrow().value {
        NodeValue::Heading(heading) => {
            let text = collect_text(node);
            let slug = slugify(&text);
            Some(Block::Heading {
                level: heading.level,
                text,
                slug,
            })
        }
        NodeValue::Paragraph => Some(Block::Paragraph {
            spans: collect_inlines(node),
        }),
        NodeValue::List(list) => {
            let kind = match list.list_type {
                ListType::Bullet => ListKind::Bullet,
                ListType::Ordered => ListKind::Ordered,
            };
            let items = node.children().map(collect_inlines).collect();
            Some(Block::List { kind, items })
        }
        NodeValue::CodeBlock(code) => {
            let language = code
                .info
                .split_whitespace()
                .next()
                .filter(|lang| !lang.is_empty())
                .map(str::to_string);
            Some(Block::CodeBlock {
                language,
                code: code.literal.trim_end_matches('\n').to_string(),
            })
        }
        NodeValue::BlockQuote => Some(Block::Quote {
            spans: collect_inlines(node),
        }),
        NodeValue::ThematicBreak => Some(Block::Rule),
        // Raw HTML and anything else the site does not render
        _ => None,
    }
}

/// Collect inline spans from a container node, descending through nested
/// block structure (list items wrapping paragraphs, quoted paragraphs).
fn collect_inlines<'a>(node: &'a AstNode<'a>) -> Vec<Inline> {
    let mut spans = Vec::new();
    for child in node.children() {
        push_inline(child, &mut spans);
    }
    spans
}

fn push_inline<'a>(node: &'a AstNode<'a>, spans: &mut Vec<Inline>) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => push_text(spans, text),
        NodeValue::SoftBreak | NodeValue::LineBreak => push_text(spans, " "),
        NodeValue::Code(code) => spans.push(Inline::Code {
            text: code.literal.clone(),
        }),
        NodeValue::Emph => spans.push(Inline::Emphasis {
            text: collect_text(node),
        }),
        NodeValue::Strong => spans.push(Inline::Strong {
            text: collect_text(node),
        }),
        NodeValue::Link(link) => spans.push(Inline::Link {
            text: collect_text(node),
            href: link.url.clone(),
        }),
        NodeValue::HtmlInline(_) | NodeValue::Image(_) => {}
        // Block-level wrappers inside list items and quotes
        _ => {
            for child in node.children() {
                push_inline(child, spans);
            }
        }
    }
}

/// Append a text run, merging with a trailing text span where possible
fn push_text(spans: &mut Vec<Inline>, text: &str) {
    if let Some(Inline::Text { text: last }) = spans.last_mut() {
        last.push_str(text);
    } else {
        spans.push(Inline::Text {
            text: text.to_string(),
        });
    }
}

/// Flatten a node's subtree to plain text
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    append_text(node, &mut out);
    out
}

fn append_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) => out.push_str(text),
            NodeValue::Code(code) => out.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
            _ => append_text(child, out),
        }
    }
}
