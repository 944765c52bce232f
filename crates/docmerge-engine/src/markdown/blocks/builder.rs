use crate::markdown::builder::ParagraphKind;

use super::{
    classify::LineClass,
    indent::IndentStack,
    kinds::{CodeFence, FenceSig},
};

/// A block of Markdown: its paragraph kind and its raw (inline) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdBlock {
    pub kind: ParagraphKind,
    /// Inline source text; for preformatted blocks the verbatim lines.
    pub text: String,
}

#[derive(Debug, Clone)]
enum LeafState {
    None,
    Paragraph {
        kind: ParagraphKind,
        lines: Vec<String>,
    },
    Fence {
        sig: FenceSig,
        lines: Vec<String>,
    },
}

/// Phase 2 of block parsing: turns classified lines into blocks.
pub struct BlockBuilder {
    indents: IndentStack,
    leaf: LeafState,
    out: Vec<MdBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            indents: IndentStack::default(),
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if let LeafState::Fence { sig, lines } = &mut self.leaf {
            if CodeFence::closes(*sig, c.fence_sig) {
                self.flush();
            } else {
                lines.push(c.text.clone());
            }
            return;
        }

        if c.is_blank {
            self.flush();
            return;
        }

        if let Some(sig) = c.fence_sig {
            self.flush();
            self.leaf = LeafState::Fence { sig, lines: vec![] };
            return;
        }

        if let Some(marker) = c.marker {
            self.flush();
            let level = self.indents.level_for(c.indent);
            let kind = if marker.ordered {
                ParagraphKind::ListOrdered(level)
            } else {
                ParagraphKind::ListUnordered(level)
            };
            self.leaf = LeafState::Paragraph {
                kind,
                lines: vec![c.content().to_string()],
            };
            return;
        }

        match &mut self.leaf {
            LeafState::Paragraph { lines, .. } => lines.push(c.content().to_string()),
            _ => {
                self.indents.reset();
                self.leaf = LeafState::Paragraph {
                    kind: ParagraphKind::Body,
                    lines: vec![c.content().to_string()],
                };
            }
        }
    }

    pub fn finish(mut self) -> Vec<MdBlock> {
        // EOF flush; an unterminated fence is emitted anyway
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { kind, lines } => self.out.push(MdBlock {
                kind,
                text: lines.join(" "),
            }),
            LeafState::Fence { lines, .. } => self.out.push(MdBlock {
                kind: ParagraphKind::Preformatted,
                text: lines.join("\n"),
            }),
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
