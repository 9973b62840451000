// src/transform/compare.rs
//! Span-length comparison for sibling nodes.
//!
//! Nodes order by the length of their source span, with the length of an
//! optional name sub-span as the tie-break. Nodes that tie on both keys keep
//! their encounter order under a stable sort; a total ordering is
//! deliberately not guaranteed.

use std::cmp::Ordering;

use crate::frontend::ast::{Attribute, ImportDecl, Specifier};
use crate::frontend::Span;

/// Sort direction for a span-length comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A node the span comparator can measure.
pub trait Measured {
    fn span(&self) -> Span;

    /// Sub-span of the node's own name, if it has one. Spread attributes
    /// have none.
    fn name_span(&self) -> Option<Span> {
        None
    }
}

impl Measured for Attribute {
    fn span(&self) -> Span {
        self.span
    }

    fn name_span(&self) -> Option<Span> {
        self.name_span
    }
}

impl Measured for Specifier {
    fn span(&self) -> Span {
        self.span
    }

    fn name_span(&self) -> Option<Span> {
        Some(self.name_span)
    }
}

/// Order two sibling nodes by span length, breaking ties on name-span
/// length. A missing name span leaves the tie unresolved.
pub fn compare_by_span<T: Measured>(a: &T, b: &T, direction: SortDirection) -> Ordering {
    let (a_len, b_len) = (a.span().len(), b.span().len());
    let ordering = if a_len == b_len {
        match (a.name_span(), b.name_span()) {
            (Some(a_name), Some(b_name)) => a_name.len().cmp(&b_name.len()),
            _ => Ordering::Equal,
        }
    } else {
        a_len.cmp(&b_len)
    };
    apply_direction(ordering, direction)
}

/// Order two whole import declarations by the length of their full source
/// span. This is the bucket-internal ordering used by the import grouper; it
/// shares the span-length metric with [`compare_by_span`] but is its own
/// comparator on purpose.
pub fn compare_decl_spans(a: &ImportDecl, b: &ImportDecl, direction: SortDirection) -> Ordering {
    apply_direction(a.span.len().cmp(&b.span.len()), direction)
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
