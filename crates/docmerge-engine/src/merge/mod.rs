//! # Merge
//!
//! Fills a template's merge fields from hierarchical data.
//!
//! Sections are visited depth first. A section whose head names fields from
//! a list is duplicated until every record has a copy, and its children are
//! merged against that record alone (plus whatever relates to it). A head
//! that is nothing but one body-text field is replaced by the value rendered
//! as Markdown; other fields are replaced inline with the value flattened to
//! plain text. Missing data renders the placeholder [`NONE_PLACEHOLDER`].

pub mod data;
pub mod relation;

use std::path::Path;

use crate::document::Document;
use crate::io::{self, IoError};
use crate::markdown::{markdown_to_plain_text, render_markdown};
use crate::section::{DocSections, ParagraphReplacer, SectionId};

pub use data::{Bindings, MergeData, ObjectData, Record, value_to_text};
pub use relation::{Relation, RelationKind, RelationRule, RelationTable, Unrelated};

/// Markdown rendered in place of a section with no data.
pub const NONE_PLACEHOLDER: &str = "*None.*";

/// A loaded template, ready to be merged with data any number of times.
#[derive(Debug, Clone)]
pub struct MergeDocument {
    template: Document,
}

impl MergeDocument {
    pub fn load(path: &Path) -> Result<Self, IoError> {
        Ok(Self::from_document(io::load_document(path)?))
    }

    pub fn from_document(template: Document) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &Document {
        &self.template
    }

    /// Merges `data` into a copy of the template.
    pub fn merge(&self, data: Bindings, related: &dyn Relation) -> Document {
        log::info!(
            "Merging {} object types into {} blocks",
            data.len(),
            self.template.body.len()
        );
        let mut sections = DocSections::new(self.template.clone());
        let root = sections.root();
        let mut data = MergeData::new(data, related);
        interpolate_sections(&mut sections, root, &mut data);
        let merged = sections.into_document();
        log::info!("Merged document has {} blocks", merged.body.len());
        merged
    }

    /// Merges `data` and saves the result to `output_path`.
    pub fn write(
        &self,
        output_path: &Path,
        data: Bindings,
        related: &dyn Relation,
    ) -> Result<(), IoError> {
        io::save_document(output_path, &self.merge(data, related))
    }
}

fn interpolate_sections(sections: &mut DocSections, id: SectionId, data: &mut MergeData<'_>) {
    while sections.next_section(id) {
        let fields = sections.fields(id);
        let only_field = match fields.first() {
            Some(name) if fields.len() == 1 && sections.paragraph_is_only_field(id) => Some(name),
            _ => None,
        };

        if let Some(name) = only_field {
            let (value, last) = data.get_data(name);
            if !last {
                sections.duplicate(id);
            }
            match value {
                Some(markdown) => render_markdown(&markdown, &mut ParagraphReplacer::new(sections, id)),
                None => render_placeholder(sections, id),
            }
        } else {
            let values: Vec<_> = fields
                .iter()
                .map(|name| (name, data.get_data(name)))
                .collect();
            if values.iter().any(|(_, (_, last))| !last) {
                sections.duplicate(id);
            }
            if values.iter().any(|(_, (value, _))| value.is_none()) {
                render_placeholder(sections, id);
            } else {
                for (name, (value, _)) in &values {
                    let plain = markdown_to_plain_text(value.as_deref().unwrap_or_default());
                    sections.replace_field(id, name, &plain);
                }
                if let Some(child) = sections.deeper(id) {
                    let mut child_data = data.deeper_data();
                    interpolate_sections(sections, child, &mut child_data);
                    sections.release(child);
                }
            }
        }

        if sections.at_iteration_end(id) {
            data.reset_iterations();
        } else {
            data.next_section();
        }
    }
}

/// Replaces the whole section with [`NONE_PLACEHOLDER`].
fn render_placeholder(sections: &mut DocSections, id: SectionId) {
    sections.remove_nonfirst_paragraphs(id);
    render_markdown(NONE_PLACEHOLDER, &mut ParagraphReplacer::new(sections, id));
}
