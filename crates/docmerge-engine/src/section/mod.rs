//! # Outline Sections
//!
//! Reads the flat body of a [`Document`] as a tree of outline sections and
//! edits it in place.
//!
//! A section is a head block plus every following block with a strictly
//! greater outline level. Iterating with [`DocSections::next_section`] walks
//! sibling sections; [`DocSections::deeper`] opens an iterator over the
//! children of the current one.
//!
//! ## Arena
//!
//! All iterators live in one arena and are addressed by [`SectionId`]. Each
//! records its parent, so a structural edit made through a deep iterator
//! (duplicate, delete, insert) is replayed up the parent chain and every
//! live ancestor keeps correct bounds.

mod replacer;

use std::collections::BTreeSet;

use crate::document::{
    Block, Document, HEADING_STYLE_ID, HYPERLINK_STYLE, Hyperlink, Inline, NORMAL_STYLE_ID,
    NumberFormat, NumberingRef, ParagraphProperties, Run, RunFormat, style::num_id_for,
};
use crate::markdown::ParagraphKind;
use crate::outline::{BODY_LEVEL, level_of};

pub use replacer::ParagraphReplacer;

/// Handle to an iterator in a [`DocSections`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(usize);

#[derive(Debug, Clone)]
struct SectionRecord {
    /// Index of the head block.
    start: usize,
    /// Index just past the last block of the section.
    end: usize,
    /// Outline level of the shallowest head seen so far.
    start_level: Option<i32>,
    /// Level of the enclosing section's head; iteration stops at or above it.
    outer_level: Option<i32>,
    parent: Option<SectionId>,
    /// The block that followed the first section of this pass, `None` for
    /// the document end. Duplicates are inserted in front of it.
    iteration_end: Option<usize>,
    /// Head block that rendered content is appended to.
    last_head: usize,
}

/// A document together with the outline iterators over its body.
#[derive(Debug)]
pub struct DocSections {
    doc: Document,
    sections: Vec<SectionRecord>,
}

impl DocSections {
    /// Takes ownership of `doc` and creates the root iterator, positioned
    /// before the first block.
    pub fn new(doc: Document) -> Self {
        let root = SectionRecord {
            start: 0,
            end: 0,
            start_level: None,
            outer_level: None,
            parent: None,
            iteration_end: Some(0),
            last_head: 0,
        };
        Self {
            doc,
            sections: vec![root],
        }
    }

    pub fn root(&self) -> SectionId {
        SectionId(0)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// `[start, end)` of the current section.
    pub fn bounds(&self, id: SectionId) -> (usize, usize) {
        let s = &self.sections[id.0];
        (s.start, s.end)
    }

    fn level(&self, index: usize) -> i32 {
        level_of(&self.doc.styles, &self.doc.body[index])
    }

    fn depth(&self, id: SectionId) -> usize {
        let mut depth = 0;
        let mut cur = self.sections[id.0].parent;
        while let Some(p) = cur {
            depth += 1;
            cur = self.sections[p.0].parent;
        }
        depth
    }

    /// Moves to the next sibling section.
    ///
    /// Returns `false` without moving at the end of the document, or when
    /// the next block belongs to an enclosing section.
    pub fn next_section(&mut self, id: SectionId) -> bool {
        if self.at_document_end(id) {
            return false;
        }
        let start = self.sections[id.0].end;
        let level = self.level(start);
        let s = &self.sections[id.0];
        if s.outer_level.is_some_and(|outer| level <= outer) {
            return false;
        }
        let start_level = match s.start_level {
            Some(current) if current <= level => current,
            _ => level,
        };

        let len = self.doc.body.len();
        let mut end = start + 1;
        while end < len && self.level(end) > start_level {
            end += 1;
        }

        let depth = self.depth(id);
        let s = &mut self.sections[id.0];
        s.start_level = Some(start_level);
        s.start = start;
        s.end = end;
        s.last_head = start;
        if end < len {
            log::debug!("Section {start} - {end} (hit level <= {start_level}). Depth {depth}");
            if s.iteration_end == Some(start) {
                s.iteration_end = Some(end);
            }
        } else {
            log::debug!("Section {start} - {end} (end of document). Depth {depth}");
            s.iteration_end = None;
        }
        true
    }

    /// An iterator over the children of the current section, or `None` if
    /// the section is only its head block.
    pub fn deeper(&mut self, id: SectionId) -> Option<SectionId> {
        let s = &self.sections[id.0];
        if s.end - s.start <= 1 {
            return None;
        }
        let from = s.start + 1;
        let child = SectionRecord {
            start: from,
            end: from,
            start_level: None,
            outer_level: s.start_level,
            parent: Some(id),
            iteration_end: Some(from),
            last_head: from,
        };
        self.sections.push(child);
        Some(SectionId(self.sections.len() - 1))
    }

    /// Drops the iterator `id` along with every iterator opened after it.
    /// Call once a `deeper` iterator is finished with.
    pub fn release(&mut self, id: SectionId) {
        if id.0 > 0 {
            self.sections.truncate(id.0);
        }
    }

    /// Inserts a copy of the current section directly after it. The
    /// iterator stays on the original; the next `next_section` visits the
    /// copy.
    pub fn duplicate(&mut self, id: SectionId) {
        let (start, end) = self.bounds(id);
        let copy: Vec<Block> = self.doc.body[start..end].to_vec();
        let len = copy.len();
        self.doc.body.splice(end..end, copy);
        log::debug!("Duplicated section {start} - {end} ({len} blocks)");
        self.blocks_changed(id, end, len as isize);
    }

    /// Deletes every block of the section except its head.
    pub fn remove_nonfirst_paragraphs(&mut self, id: SectionId) {
        let (start, end) = self.bounds(id);
        let from = start + 1;
        if end <= from {
            return;
        }
        self.doc.body.drain(from..end);
        let s = &mut self.sections[id.0];
        s.end = from;
        s.last_head = start;
        log::debug!("Removed {} blocks after {start}", end - from);
        self.blocks_changed(id, from, -((end - from) as isize));
    }

    /// Clears the head block and gives it the structure of `kind`.
    pub fn replace_first_paragraph(&mut self, id: SectionId, kind: ParagraphKind) {
        let properties = self.properties_for(kind);
        let s = &mut self.sections[id.0];
        s.last_head = s.start;
        self.doc.body[s.start] = Block::new(properties, vec![]);
    }

    /// Inserts an empty block of `kind` after the last head block and makes
    /// it the target of subsequent runs.
    pub fn add_paragraph(&mut self, id: SectionId, kind: ParagraphKind) {
        let properties = self.properties_for(kind);
        let at = self.sections[id.0].last_head + 1;
        self.doc.body.insert(at, Block::new(properties, vec![]));
        let s = &mut self.sections[id.0];
        s.last_head = at;
        s.end += 1;
        log::debug!("Added paragraph at {at}");
        self.blocks_changed(id, at, 1);
    }

    pub fn add_run(&mut self, id: SectionId, text: &str, format: &RunFormat) {
        if text.is_empty() {
            return;
        }
        let head = self.sections[id.0].last_head;
        self.doc.body[head]
            .content
            .push(Inline::Run(Run::new(text, format.clone())));
    }

    pub fn add_hyperlink(&mut self, id: SectionId, text: &str, url: &str) {
        let rel_id = self.doc.relate_hyperlink(url);
        let format = RunFormat {
            style: Some(HYPERLINK_STYLE.to_string()),
            ..RunFormat::default()
        };
        let head = self.sections[id.0].last_head;
        self.doc.body[head]
            .content
            .push(Inline::Hyperlink(Hyperlink {
                rel_id,
                runs: vec![Run::new(text, format)],
            }));
    }

    fn head(&self, id: SectionId) -> Option<&Block> {
        let (start, end) = self.bounds(id);
        (end > start).then(|| &self.doc.body[start])
    }

    /// Names of the merge fields in the head block.
    pub fn fields(&self, id: SectionId) -> BTreeSet<String> {
        self.head(id)
            .map(|b| b.merge_fields().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Whether the head is body text holding one merge field and nothing
    /// else visible.
    pub fn paragraph_is_only_field(&self, id: SectionId) -> bool {
        let Some(head) = self.head(id) else {
            return false;
        };
        if level_of(&self.doc.styles, head) != BODY_LEVEL {
            return false;
        }
        head.merge_fields().count() == 1
            && !head.content.iter().any(Inline::is_visible_outside_field)
    }

    /// Replaces each `name` merge field in the head block with a run of
    /// `plain_text`, formatted like the field's displayed result. Returns
    /// the number of fields replaced.
    pub fn replace_field(&mut self, id: SectionId, name: &str, plain_text: &str) -> usize {
        let (start, end) = self.bounds(id);
        if end <= start {
            return 0;
        }
        let mut count = 0;
        for item in &mut self.doc.body[start].content {
            if let Inline::Field(field) = item
                && field.merge_name() == Some(name)
            {
                *item = Inline::Run(Run::new(plain_text, field.result_format()));
                count += 1;
            }
        }
        count
    }

    pub fn at_document_end(&self, id: SectionId) -> bool {
        self.doc.body.len() <= self.sections[id.0].end
    }

    /// Whether the current section is the last copy of this pass's section.
    pub fn at_iteration_end(&self, id: SectionId) -> bool {
        if self.at_document_end(id) {
            return true;
        }
        let s = &self.sections[id.0];
        s.iteration_end == Some(s.end)
    }

    pub fn first_paragraph_text(&self, id: SectionId) -> Option<String> {
        self.head(id).map(Block::text)
    }

    fn properties_for(&self, kind: ParagraphKind) -> ParagraphProperties {
        let (style, numbering) = match kind {
            ParagraphKind::Heading(level) => (
                HEADING_STYLE_ID
                    .get(usize::from(level))
                    .copied()
                    .unwrap_or(NORMAL_STYLE_ID),
                None,
            ),
            ParagraphKind::ListOrdered(level) => (
                NORMAL_STYLE_ID,
                self.numbering(&NumberFormat::Decimal, level),
            ),
            ParagraphKind::ListUnordered(level) => (
                NORMAL_STYLE_ID,
                self.numbering(&NumberFormat::Bullet, level),
            ),
            ParagraphKind::Body | ParagraphKind::Preformatted => (NORMAL_STYLE_ID, None),
        };
        ParagraphProperties {
            style: Some(style.to_string()),
            numbering,
        }
    }

    fn numbering(&self, format: &NumberFormat, level: u8) -> Option<NumberingRef> {
        num_id_for(&self.doc.numbering, format).map(|num_id| NumberingRef { num_id, level })
    }

    /// Replays an insertion (`delta > 0`) or deletion (`delta < 0`) of
    /// blocks at `at` on the iterator that made it and its ancestors.
    fn blocks_changed(&mut self, id: SectionId, at: usize, delta: isize) {
        let shift = |index: usize| at.max(index.saturating_add_signed(delta));

        let s = &mut self.sections[id.0];
        s.iteration_end = s.iteration_end.map(|ie| if at <= ie { shift(ie) } else { ie });

        let mut cur = s.parent;
        while let Some(p) = cur {
            // Edits made below an ancestor land after its head block, so its
            // start and last head never move.
            let a = &mut self.sections[p.0];
            if at <= a.end {
                log::debug!("Adding {delta} blocks to section at {}", a.start);
                a.end = shift(a.end);
            }
            a.iteration_end = a.iteration_end.map(|ie| if at <= ie { shift(ie) } else { ie });
            cur = a.parent;
        }
    }
}
