//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (indent, blank status, fence and list
//!    markers).
//! 2. **Block Construction** (`builder`): a `BlockBuilder` groups lines into
//!    paragraphs, list items and fenced blocks, deriving list nesting from an
//!    `IndentStack`.
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - A blank line, a fence or a list marker always ends the open paragraph
//! - List levels depend only on indentation, never on the marker used

pub mod builder;
pub mod classify;
pub mod indent;
pub mod kinds;

pub use builder::{BlockBuilder, MdBlock};
pub use classify::{LineClass, MarkdownLineClassifier};
pub use indent::IndentStack;

/// Splits Markdown text into blocks.
pub fn parse_blocks(text: &str) -> Vec<MdBlock> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();
    for line in text.lines() {
        builder.push(&classifier.classify(line));
    }
    builder.finish()
}
