// src/transform/mod.rs
//! The reordering pass.
//!
//! One explicit walk over an owned tree: every statement is rewritten by a
//! pure value-in/value-out transform dispatched on its kind, then the
//! program-level import grouping runs once over the result.

pub mod attributes;
pub mod compare;
pub mod groups;
pub mod sentinel;
pub mod specifiers;

pub use compare::{compare_by_span, compare_decl_spans, Measured, SortDirection};

use crate::fmt::config::SortConfig;
use crate::frontend::ast::{Program, RawStmt, Stmt, StmtKind};

/// Apply the full reordering pass to a parsed program.
pub fn apply(program: Program, config: &SortConfig) -> Program {
    let Program {
        body,
        trailing_comments,
    } = program;
    let body = body
        .into_iter()
        .map(|stmt| transform_stmt(stmt, config))
        .collect();
    groups::group_imports(
        Program {
            body,
            trailing_comments,
        },
        config,
    )
}

fn transform_stmt(mut stmt: Stmt, config: &SortConfig) -> Stmt {
    stmt.kind = match stmt.kind {
        StmtKind::Import(decl) => {
            StmtKind::Import(specifiers::sort_import(decl, config.import_specifiers))
        }
        StmtKind::Export(decl) => StmtKind::Export(specifiers::sort_export(decl)),
        StmtKind::Raw(raw) => StmtKind::Raw(RawStmt {
            elements: raw
                .elements
                .into_iter()
                .map(attributes::sort_element)
                .collect(),
        }),
        marker @ StmtKind::Marker(_) => marker,
    };
    stmt
}
