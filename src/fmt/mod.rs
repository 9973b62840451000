// src/fmt/mod.rs
//! Rendering of transformed programs back to source text.
//!
//! Import and export declarations are re-printed canonically from the tree;
//! everything else is emitted from the original source, with the attribute
//! regions of reordered elements spliced in place.

pub mod config;
mod formatter;
mod printer;

pub use config::{FileKind, GroupSeparator, SortConfig, DEFAULT_MARKER};
pub use formatter::{sort_source, SortError, SortResult};
