//! Text renderings of a document, for reading merge output.

use crate::document::{Block, Document, Inline, NumberFormat, Run};
use crate::outline::{Outline, outline_of};

/// One line per body block.
pub fn to_plain_text(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.body {
        out.push_str(&block.text());
        out.push('\n');
    }
    out
}

/// The body as Markdown: headings, nested lists, code blocks, emphasis,
/// code spans and links.
pub fn to_markdown(doc: &Document) -> String {
    let mut out = String::new();
    let mut prev_was_list = false;
    for block in &doc.body {
        let outline = outline_of(&doc.styles, &block.properties);
        let is_list = matches!(outline, Outline::ListItem(_));
        if !out.is_empty() {
            out.push_str(if is_list && prev_was_list { "\n" } else { "\n\n" });
        }
        prev_was_list = is_list;

        if let Some(code) = code_block(block) {
            out.push_str("```\n");
            out.push_str(code);
            out.push_str("\n```");
            continue;
        }

        let text = inline_markdown(doc, &block.content);
        match outline {
            Outline::Heading(level) => {
                out.push_str(&"#".repeat(usize::from(level) + 1));
                out.push(' ');
                out.push_str(&text);
            }
            Outline::ListItem(level) => {
                out.push_str(&"  ".repeat(usize::from(level)));
                out.push_str(if is_ordered(doc, block) { "1. " } else { "- " });
                out.push_str(&text);
            }
            Outline::Body => out.push_str(&text),
        }
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// A paragraph holding only monospace runs spanning several lines.
fn code_block(block: &Block) -> Option<&str> {
    match block.content.as_slice() {
        [Inline::Run(run)] if run.format.monospace && run.text.contains('\n') => {
            Some(run.text.as_str())
        }
        _ => None,
    }
}

fn is_ordered(doc: &Document, block: &Block) -> bool {
    let style_numbering = block
        .properties
        .style
        .as_deref()
        .and_then(|id| doc.styles.get(id))
        .and_then(|style| style.numbering.as_ref());
    let Some(numbering) = block.properties.numbering.as_ref().or(style_numbering) else {
        return false;
    };
    doc.numbering
        .iter()
        .any(|def| def.num_id == numbering.num_id && def.format == NumberFormat::Decimal)
}

fn inline_markdown(doc: &Document, content: &[Inline]) -> String {
    content
        .iter()
        .map(|item| match item {
            Inline::Run(run) => run_markdown(run),
            Inline::Field(field) => field.result.iter().map(run_markdown).collect(),
            Inline::Hyperlink(link) => {
                let text: String = link.runs.iter().map(|r| r.text.as_str()).collect();
                match doc.hyperlinks.get(&link.rel_id) {
                    Some(url) => format!("[{text}]({url})"),
                    None => text,
                }
            }
        })
        .collect()
}

fn run_markdown(run: &Run) -> String {
    if run.text.trim().is_empty() {
        return run.text.clone();
    }
    let mut s = if run.format.monospace {
        format!("`{}`", run.text)
    } else {
        run.text.clone()
    };
    if run.format.italic {
        s = format!("*{s}*");
    }
    if run.format.bold {
        s = format!("**{s}**");
    }
    s
}
