// src/fmt/config.rs
//! Configuration for the sorting pass.

use std::path::Path;

use crate::transform::compare::SortDirection;

/// Default payload for marker-based group separation. Passed explicitly to
/// both the grouper and the text cleanup; nothing reads it implicitly.
pub const DEFAULT_MARKER: &str = "@spansort-group-break";

/// How the import grouper separates adjacent groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSeparator {
    /// Annotate the last declaration of each group; the printer emits the
    /// blank line directly.
    BlankLine,
    /// Inject a synthetic marker statement with this payload and strip it
    /// from the rendered text afterwards. Compatibility path for host
    /// renderers that cannot honor annotations.
    Marker(String),
}

/// Options controlling the sorting pass.
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Direction for named import specifiers. Exports always sort ascending.
    pub import_specifiers: SortDirection,
    /// Direction for whole import declarations within a group.
    pub declarations: SortDirection,
    pub group_separator: GroupSeparator,
}

impl SortConfig {
    /// The default configuration: everything ascending, blank lines by
    /// annotation.
    pub fn canonical() -> Self {
        Self {
            import_specifiers: SortDirection::Ascending,
            declarations: SortDirection::Ascending,
            group_separator: GroupSeparator::BlankLine,
        }
    }

    /// Canonical directions, but separating groups with a marker statement
    /// that is stripped from the rendered text.
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            group_separator: GroupSeparator::Marker(marker.into()),
            ..Self::canonical()
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::canonical()
    }
}

/// The two registered file kinds. Both route through the identical
/// transform; the distinction exists only for extension dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// .js, .jsx, .mjs, .cjs
    Script,
    /// .ts, .tsx, .mts, .cts
    TypedScript,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Option<FileKind> {
        let ext = path.extension()?.to_str()?;
        match ext {
            "js" | "jsx" | "mjs" | "cjs" => Some(FileKind::Script),
            "ts" | "tsx" | "mts" | "cts" => Some(FileKind::TypedScript),
            _ => None,
        }
    }
}
