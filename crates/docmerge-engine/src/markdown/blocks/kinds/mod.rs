//! Block-specific types that own their syntax delimiters.
//!
//! - **`CodeFence`**: backtick/tilde fences
//! - **`ListMarker`**: bullet (`*`, `+`, `-`) and numbered (`1.`) markers

pub mod code_fence;
pub mod list_marker;

pub use code_fence::{CodeFence, FenceSig};
pub use list_marker::ListMarker;
