//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters. The parser reads these
//! constants; it never hardcodes `**` or `[[`.
//!
//! - **`Emphasis`**: `**`, `__`, `*`, `_` and their flanking rules
//! - **`CodeSpan`**: backtick raw zone
//! - **`WikiLink`** / **`MarkdownLink`**: `[[target|alias]]` and `[text](url)`

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, EmphasisKind};
pub use link::{MarkdownLink, WikiLink};
