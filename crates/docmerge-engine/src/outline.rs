//! Outline level classification.
//!
//! Every block gets an integer level so that the flat body can be read as a
//! tree: headings are negative (Heading 1 most negative), body text is 0 and
//! list items are positive, deeper indents being larger. A block with a lower
//! level than its successors owns them.

use crate::document::{Block, ParagraphProperties, StyleSheet};

/// Level of Heading 1; deeper headings count up from here.
pub const HEADING_BASE_LEVEL: i32 = -50;
/// Level of an outermost list item; deeper indents count up from here.
pub const LIST_ITEM_BASE_LEVEL: i32 = 50;
/// Level of body text.
pub const BODY_LEVEL: i32 = 0;

/// Heading outline levels and list indents beyond this are clamped so that
/// headings always sort before body text and body text before list items.
const MAX_DEPTH: u8 = 49;

/// The structural role of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outline {
    /// Heading with outline level (0 = Heading 1).
    Heading(u8),
    Body,
    /// List item at indent level (0 = outermost).
    ListItem(u8),
}

impl Outline {
    pub fn level(self) -> i32 {
        match self {
            Outline::Heading(d) => HEADING_BASE_LEVEL + i32::from(d.min(MAX_DEPTH)),
            Outline::Body => BODY_LEVEL,
            Outline::ListItem(i) => LIST_ITEM_BASE_LEVEL + i32::from(i.min(MAX_DEPTH)),
        }
    }
}

/// Classifies paragraph properties against the document's style sheet.
///
/// A style with an outline level makes a heading. Otherwise numbering on the
/// style, then on the paragraph itself, makes a list item. Anything else,
/// including paragraphs with unknown style ids, is body text.
pub fn outline_of(styles: &StyleSheet, props: &ParagraphProperties) -> Outline {
    if let Some(style) = props.style.as_deref().and_then(|id| styles.get(id)) {
        if let Some(level) = style.outline_level {
            return Outline::Heading(level);
        }
        if let Some(numbering) = &style.numbering {
            return Outline::ListItem(numbering.level);
        }
    }
    if let Some(numbering) = &props.numbering {
        return Outline::ListItem(numbering.level);
    }
    Outline::Body
}

/// The outline level of a block.
pub fn level_of(styles: &StyleSheet, block: &Block) -> i32 {
    outline_of(styles, &block.properties).level()
}
