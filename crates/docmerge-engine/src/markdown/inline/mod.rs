//! # Inline Parsing
//!
//! Layered inline parsing over the text of one block.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` tree (Text, Strong, Emphasis, Code, Link)
//! - **`kinds`**: inline types with owned delimiters
//! - **`cursor`**: `Cursor` for character-by-character scanning
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
