use crate::document::RunFormat;
use crate::markdown::{DocumentBuilder, ParagraphKind};

use super::{DocSections, SectionId};

/// A [`DocumentBuilder`] that renders into the head of a section.
///
/// The first paragraph replaces the head block; later paragraphs are
/// inserted after it, inside the section.
pub struct ParagraphReplacer<'a> {
    sections: &'a mut DocSections,
    id: SectionId,
    first: bool,
    kind: ParagraphKind,
}

impl<'a> ParagraphReplacer<'a> {
    pub fn new(sections: &'a mut DocSections, id: SectionId) -> Self {
        Self {
            sections,
            id,
            first: true,
            kind: ParagraphKind::Body,
        }
    }
}

impl DocumentBuilder for ParagraphReplacer<'_> {
    fn new_paragraph(&mut self, kind: ParagraphKind) {
        if self.first {
            self.sections.replace_first_paragraph(self.id, kind);
            self.first = false;
        } else {
            self.sections.add_paragraph(self.id, kind);
        }
        self.kind = kind;
    }

    fn add_run(&mut self, text: &str, format: &RunFormat) {
        if self.kind == ParagraphKind::Preformatted && !format.monospace {
            let format = RunFormat {
                monospace: true,
                ..format.clone()
            };
            self.sections.add_run(self.id, text, &format);
        } else {
            self.sections.add_run(self.id, text, format);
        }
    }

    fn add_hyperlink(&mut self, text: &str, url: &str) {
        self.sections.add_hyperlink(self.id, text, url);
    }

    fn end(&mut self) {
        // Nothing rendered: the head still has to lose its field.
        if self.first {
            self.sections.replace_first_paragraph(self.id, ParagraphKind::Body);
            self.first = false;
        }
    }
}
