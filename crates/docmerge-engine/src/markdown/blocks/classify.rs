use super::kinds::{CodeFence, FenceSig, ListMarker};

/// Columns a tab advances the indent by.
pub const TAB_WIDTH: usize = 4;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// The line without its line terminator.
    pub text: String,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Leading whitespace measured in columns.
    pub indent: usize,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
    /// If the line starts a list item.
    pub marker: Option<ListMarker>,
}

impl LineClass {
    /// Text of a list item line after its marker, or the whole line trimmed.
    pub fn content(&self) -> &str {
        match self.marker {
            Some(m) => self.text[m.content_start..].trim_end(),
            None => self.text.trim(),
        }
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        let text = line.trim_end_matches(['\r', '\n']);
        let is_blank = text.trim().is_empty();

        let mut indent = 0;
        let mut indent_bytes = 0;
        for b in text.bytes() {
            match b {
                b' ' => indent += 1,
                b'\t' => indent += TAB_WIDTH,
                _ => break,
            }
            indent_bytes += 1;
        }

        LineClass {
            text: text.to_string(),
            is_blank,
            indent,
            fence_sig: CodeFence::sig(text),
            marker: ListMarker::detect(text, indent_bytes),
        }
    }
}
