use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::document::{Block, Document, Field, Inline, NumberFormat, NumberingDef, Run};

/// Create a temporary directory for document and data files
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

pub fn text(s: &str) -> Vec<Inline> {
    vec![Inline::Run(Run::plain(s))]
}

pub fn field(name: &str) -> Vec<Inline> {
    vec![Inline::Field(Field::merge(name))]
}

/// Numbering with `1` as decimal and `2` as bullet.
pub fn standard_numbering() -> Vec<NumberingDef> {
    vec![
        NumberingDef {
            num_id: "1".to_string(),
            format: NumberFormat::Decimal,
        },
        NumberingDef {
            num_id: "2".to_string(),
            format: NumberFormat::Bullet,
        },
    ]
}

pub fn bullet(level: u8, s: &str) -> Block {
    Block::list_item("2", level, text(s))
}

/// Headings, body text and a nested bullet list, no fields.
///
/// ```text
///  0 # Heading One
///  1   Paragraph A
///  2   Paragraph B
///  3   ## Heading Two
///  4     Paragraph C
///  5       * Unordered list
///  6       * With some
///  7         * indents
///  8         * and more
///  9       * bullets
/// 10   ## Second heading two
/// 11 # Another top-level heading
/// ```
pub fn outline_document() -> Document {
    let mut doc = Document::with_body(vec![
        Block::heading(0, text("Heading One")),
        Block::body(text("Paragraph A")),
        Block::body(text("Paragraph B")),
        Block::heading(1, text("Heading Two")),
        Block::body(text("Paragraph C")),
        bullet(0, "Unordered list"),
        bullet(0, "With some"),
        bullet(1, "indents"),
        bullet(1, "and more"),
        bullet(0, "bullets"),
        Block::heading(1, text("Second heading two")),
        Block::heading(0, text("Another top-level heading")),
    ]);
    doc.numbering = standard_numbering();
    doc
}
