//! # Markdown
//!
//! A small Markdown dialect rendered into a [`DocumentBuilder`] sink.
//!
//! Supported: paragraphs, nested ordered/unordered lists, fenced code
//! blocks, `**`/`__` bold, `*`/`_` italic, backtick code spans, `[[wiki]]`
//! and `[text](url)` links. Headings, quotes and tables are not recognised
//! and render as body text.

pub mod blocks;
pub mod builder;
pub mod inline;
pub mod plain;

use crate::document::RunFormat;

pub use blocks::{MdBlock, parse_blocks};
pub use builder::{DocumentBuilder, ParagraphKind, RenderEvent};
pub use inline::{InlineNode, parse_inline};
pub use plain::PlainTextBuilder;

/// Renders Markdown text into `sink`, finishing with a single `end()`.
pub fn render_markdown<B: DocumentBuilder + ?Sized>(text: &str, sink: &mut B) {
    for block in parse_blocks(text) {
        sink.new_paragraph(block.kind);
        if block.kind == ParagraphKind::Preformatted {
            sink.add_run(&block.text, &RunFormat::plain());
        } else {
            render_inline(&parse_inline(&block.text), &RunFormat::plain(), sink);
        }
    }
    sink.end();
}

fn render_inline<B: DocumentBuilder + ?Sized>(nodes: &[InlineNode], format: &RunFormat, sink: &mut B) {
    for node in nodes {
        match node {
            InlineNode::Text(t) => sink.add_run(t, format),
            InlineNode::Code(t) => sink.add_run(
                t,
                &RunFormat {
                    monospace: true,
                    ..format.clone()
                },
            ),
            InlineNode::Strong(children) => render_inline(
                children,
                &RunFormat {
                    bold: true,
                    ..format.clone()
                },
                sink,
            ),
            InlineNode::Emphasis(children) => render_inline(
                children,
                &RunFormat {
                    italic: true,
                    ..format.clone()
                },
                sink,
            ),
            InlineNode::Link { text, url } => sink.add_hyperlink(text, url),
        }
    }
}

/// Markdown flattened to plain text (paragraphs joined with `\n`).
pub fn markdown_to_plain_text(text: &str) -> String {
    let mut plain = PlainTextBuilder::new();
    render_markdown(text, &mut plain);
    plain.text()
}
