// src/transform/attributes.rs
//! Attribute reordering for opening elements.

use crate::frontend::ast::Element;
use crate::transform::compare::{compare_by_span, SortDirection};

/// Reorder an element's attributes shortest-span-first, recursing into
/// elements nested inside attribute values. Elements with zero or one
/// attribute pass through unchanged.
pub fn sort_element(mut element: Element) -> Element {
    element
        .attributes
        .sort_by(|a, b| compare_by_span(a, b, SortDirection::Ascending));
    for attribute in &mut element.attributes {
        let nested = std::mem::take(&mut attribute.nested);
        attribute.nested = nested.into_iter().map(sort_element).collect();
    }
    element
}
