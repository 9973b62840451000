// src/fmt/formatter.rs
//! Entry point for sorting a single source text.
//!
//! Coordinates parsing, the reordering pass, and rendering.

use miette::Diagnostic;
use pretty::Arena;
use thiserror::Error;

use super::config::{GroupSeparator, SortConfig};
use super::printer;
use crate::errors::ParserError;
use crate::frontend;
use crate::transform::{self, sentinel};

/// Render width. Every doc the printer builds is text joined by hardlines,
/// so no line ever reflows at this boundary.
const RENDER_WIDTH: usize = 100;

/// Error type for sorting operations.
#[derive(Debug, Error, Diagnostic)]
pub enum SortError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParserError),
}

/// Result of sorting source code.
#[derive(Debug)]
pub struct SortResult {
    /// The sorted output
    pub output: String,
    /// Whether the output differs from the input
    pub changed: bool,
}

/// Sort source code and return the sorted result.
pub fn sort_source(source: &str, config: &SortConfig) -> Result<SortResult, SortError> {
    let program = frontend::parse(source)?;
    let program = transform::apply(program, config);

    let arena = Arena::new();
    let doc = printer::print_program(&arena, &program, source);
    let mut output = String::new();
    doc.render_fmt(RENDER_WIDTH, &mut output)
        .expect("render to string cannot fail");

    if let GroupSeparator::Marker(marker) = &config.group_separator {
        output = sentinel::strip_markers(&output, marker);
    }

    // Ensure trailing newline
    if !output.ends_with('\n') {
        output.push('\n');
    }

    let changed = output != source;
    Ok(SortResult { output, changed })
}
