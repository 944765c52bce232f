pub mod document;
pub mod export;
pub mod io;
pub mod markdown;
pub mod merge;
pub mod outline;
pub mod section;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{Block, Document, DocumentError, Inline, Run, RunFormat};
pub use io::*;
pub use markdown::{DocumentBuilder, ParagraphKind, PlainTextBuilder, render_markdown};
pub use merge::{
    Bindings, MergeData, MergeDocument, ObjectData, Record, Relation, RelationRule, RelationTable,
    Unrelated,
};
pub use section::{DocSections, ParagraphReplacer, SectionId};
