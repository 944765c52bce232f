//! # Document Model
//!
//! A word-processor document reduced to what the merge engine needs: a flat
//! body of paragraph blocks plus the tables blocks refer to (paragraph
//! styles, numbering definitions and hyperlink relationships).
//!
//! ## Modules
//!
//! - **`inline`**: paragraph content (`Run`, `Hyperlink`, `Field`)
//! - **`field`**: the `MERGEFIELD` token grammar
//! - **`style`**: paragraph properties, style sheet and numbering definitions
//!
//! The on-disk form (`DocumentFile`) keeps the body as one of several parts;
//! converting it into a [`Document`] requires exactly one body part.

pub mod field;
pub mod inline;
pub mod style;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use field::MergeField;
pub use inline::{Field, HYPERLINK_STYLE, Hyperlink, Inline, Run, RunFormat};
pub use style::{
    HEADING_STYLE_ID, NORMAL_STYLE_ID, NumberFormat, NumberingDef, NumberingRef,
    ParagraphProperties, StyleDef, StyleSheet,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("not a single body: found {0} body parts")]
    NotSingleBody(usize),
}

/// A paragraph: its properties and inline content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub properties: ParagraphProperties,
    #[serde(default)]
    pub content: Vec<Inline>,
}

impl Block {
    pub fn new(properties: ParagraphProperties, content: Vec<Inline>) -> Self {
        Self {
            properties,
            content,
        }
    }

    /// A body text paragraph with the `Normal` style.
    pub fn body(content: Vec<Inline>) -> Self {
        Self::new(Self::styled(NORMAL_STYLE_ID), content)
    }

    /// A heading paragraph, `level` 0 being Heading 1.
    pub fn heading(level: usize, content: Vec<Inline>) -> Self {
        let style = HEADING_STYLE_ID
            .get(level)
            .copied()
            .unwrap_or(NORMAL_STYLE_ID);
        Self::new(Self::styled(style), content)
    }

    /// A list item using numbering definition `num_id` at indent `level`.
    pub fn list_item(num_id: &str, level: u8, content: Vec<Inline>) -> Self {
        Self::new(
            ParagraphProperties {
                style: Some(NORMAL_STYLE_ID.to_string()),
                numbering: Some(NumberingRef {
                    num_id: num_id.to_string(),
                    level,
                }),
            },
            content,
        )
    }

    fn styled(style: &str) -> ParagraphProperties {
        ParagraphProperties {
            style: Some(style.to_string()),
            numbering: None,
        }
    }

    /// The visible text of the paragraph.
    pub fn text(&self) -> String {
        self.content.iter().map(Inline::visible_text).collect()
    }

    /// Names of the merge fields in this paragraph, in document order.
    pub fn merge_fields(&self) -> impl Iterator<Item = &str> {
        self.content.iter().filter_map(|item| match item {
            Inline::Field(field) => field.merge_name(),
            _ => None,
        })
    }
}

/// Which document part a block sequence belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    Body,
    Header,
    Footer,
}

/// A top-level container of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub kind: PartKind,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// Serialised form of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFile {
    #[serde(default)]
    pub styles: StyleSheet,
    #[serde(default)]
    pub numbering: Vec<NumberingDef>,
    /// Hyperlink relationship id to target URL.
    #[serde(default)]
    pub hyperlinks: BTreeMap<String, String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A loaded document: one body plus supporting tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub styles: StyleSheet,
    pub numbering: Vec<NumberingDef>,
    pub hyperlinks: BTreeMap<String, String>,
    pub body: Vec<Block>,
    /// Headers and footers, carried through a merge untouched.
    pub other_parts: Vec<Part>,
}

impl Document {
    /// A document with the default style sheet and the given body.
    pub fn with_body(body: Vec<Block>) -> Self {
        Self {
            body,
            ..Self::default()
        }
    }

    /// The relationship id for `url`, registering it if it is new.
    pub fn relate_hyperlink(&mut self, url: &str) -> String {
        if let Some((id, _)) = self.hyperlinks.iter().find(|(_, target)| *target == url) {
            return id.clone();
        }
        let mut n = self.hyperlinks.len() + 1;
        while self.hyperlinks.contains_key(&format!("rId{n}")) {
            n += 1;
        }
        let id = format!("rId{n}");
        self.hyperlinks.insert(id.clone(), url.to_string());
        id
    }

    /// Text of every body paragraph, in order.
    pub fn paragraph_texts(&self) -> Vec<String> {
        self.body.iter().map(Block::text).collect()
    }
}

impl TryFrom<DocumentFile> for Document {
    type Error = DocumentError;

    fn try_from(file: DocumentFile) -> Result<Self, Self::Error> {
        let body_count = file
            .parts
            .iter()
            .filter(|p| p.kind == PartKind::Body)
            .count();
        if body_count != 1 {
            return Err(DocumentError::NotSingleBody(body_count));
        }

        let mut body = Vec::new();
        let mut other_parts = Vec::new();
        for part in file.parts {
            match part.kind {
                PartKind::Body => body = part.blocks,
                _ => other_parts.push(part),
            }
        }

        Ok(Self {
            styles: file.styles,
            numbering: file.numbering,
            hyperlinks: file.hyperlinks,
            body,
            other_parts,
        })
    }
}

impl From<Document> for DocumentFile {
    fn from(doc: Document) -> Self {
        let mut parts = Vec::with_capacity(doc.other_parts.len() + 1);
        parts.push(Part {
            kind: PartKind::Body,
            blocks: doc.body,
        });
        parts.extend(doc.other_parts);
        Self {
            styles: doc.styles,
            numbering: doc.numbering,
            hyperlinks: doc.hyperlinks,
            parts,
        }
    }
}
