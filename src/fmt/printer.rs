// src/fmt/printer.rs
//! Program to pretty::Doc conversion.
//!
//! Statements are joined with hardlines, doubled where the blank-line
//! annotation is set. Import and export declarations print canonically;
//! raw statements print as their original source slice with the reordered
//! attribute regions spliced back in.

use pretty::{Arena, DocAllocator, DocBuilder};

use crate::frontend::ast::{
    Attribute, Element, ExportDecl, ImportDecl, Program, RawStmt, Specifier, Stmt, StmtKind,
};
use crate::frontend::Span;
use crate::transform::sentinel;

/// Pretty-print a program to a Doc.
pub fn print_program<'a>(
    arena: &'a Arena<'a>,
    program: &Program,
    source: &str,
) -> DocBuilder<'a, Arena<'a>> {
    let mut docs = Vec::new();
    let count = program.body.len();
    for (index, stmt) in program.body.iter().enumerate() {
        docs.push(print_stmt(arena, stmt, source));
        if index + 1 < count || !program.trailing_comments.is_empty() {
            docs.push(arena.hardline());
            if stmt.blank_line_after {
                docs.push(arena.hardline());
            }
        }
    }
    for (index, comment) in program.trailing_comments.iter().enumerate() {
        if index > 0 {
            docs.push(arena.hardline());
        }
        docs.push(arena.text(comment.text(source).to_string()));
    }
    arena.concat(docs)
}

fn print_stmt<'a>(
    arena: &'a Arena<'a>,
    stmt: &Stmt,
    source: &str,
) -> DocBuilder<'a, Arena<'a>> {
    let mut doc = arena.nil();
    for comment in &stmt.leading_comments {
        doc = doc
            .append(arena.text(comment.text(source).to_string()))
            .append(arena.hardline());
    }
    let text = match &stmt.kind {
        StmtKind::Import(decl) => print_import(decl, source),
        StmtKind::Export(decl) => print_export(decl, source),
        StmtKind::Raw(raw) => print_raw(stmt.span, raw, source),
        StmtKind::Marker(payload) => sentinel::marker_statement(payload),
    };
    doc = doc.append(arena.text(text));
    if let Some(comment) = stmt.trailing_comment {
        doc = doc
            .append(arena.text(" "))
            .append(arena.text(comment.text(source).to_string()));
    }
    doc
}

/// Canonical re-print of an import declaration. The module path keeps its
/// original quoting; the named list prints as `{a, b}`.
pub fn print_import(decl: &ImportDecl, source: &str) -> String {
    let mut out = String::from("import ");
    if decl.type_only {
        out.push_str("type ");
    }
    if !decl.is_bare() {
        let mut clauses = Vec::new();
        if let Some(default) = decl.default {
            clauses.push(default.span.text(source).to_string());
        }
        if let Some(namespace) = decl.namespace {
            clauses.push(format!("* as {}", namespace.span.text(source)));
        }
        if !decl.named.is_empty() {
            clauses.push(specifier_list(&decl.named, source));
        }
        out.push_str(&clauses.join(", "));
        out.push_str(" from ");
    }
    out.push_str(decl.source.span.text(source));
    out.push(';');
    out
}

pub fn print_export(decl: &ExportDecl, source: &str) -> String {
    let mut out = String::from("export ");
    if decl.type_only {
        out.push_str("type ");
    }
    out.push_str(&specifier_list(&decl.named, source));
    if let Some(from) = &decl.source {
        out.push_str(" from ");
        out.push_str(from.span.text(source));
    }
    out.push(';');
    out
}

fn specifier_list(specifiers: &[Specifier], source: &str) -> String {
    let names: Vec<&str> = specifiers.iter().map(|s| s.span.text(source)).collect();
    format!("{{{}}}", names.join(", "))
}

fn print_raw(span: Span, raw: &RawStmt, source: &str) -> String {
    let mut edits = Vec::new();
    for element in &raw.elements {
        collect_element_edits(element, source, &mut edits);
    }
    apply_edits(span, source, edits)
}

/// Record a splice replacing this element's attribute region with its
/// attributes in their current order, one space apart. Elements with fewer
/// than two attributes need no splice of their own but may still contain
/// reordered elements inside attribute values.
fn collect_element_edits(element: &Element, source: &str, edits: &mut Vec<(Span, String)>) {
    if element.attributes.len() > 1 {
        if let Some(region) = element.attrs_region {
            let replacement = element
                .attributes
                .iter()
                .map(|attribute| attribute_text(attribute, source))
                .collect::<Vec<_>>()
                .join(" ");
            edits.push((region, replacement));
            return;
        }
    }
    for attribute in &element.attributes {
        for nested in &attribute.nested {
            collect_element_edits(nested, source, edits);
        }
    }
}

fn attribute_text(attribute: &Attribute, source: &str) -> String {
    let mut edits = Vec::new();
    for nested in &attribute.nested {
        collect_element_edits(nested, source, &mut edits);
    }
    apply_edits(attribute.span, source, edits)
}

/// Apply a set of non-overlapping source edits to the slice covered by
/// `span`, rebasing each edit's offsets onto the slice.
fn apply_edits(span: Span, source: &str, mut edits: Vec<(Span, String)>) -> String {
    let mut text = span.text(source).to_string();
    edits.sort_by(|a, b| b.0.start.cmp(&a.0.start));
    for (region, replacement) in edits {
        let lo = region.start - span.start;
        let hi = region.end - span.start;
        text.replace_range(lo..hi, &replacement);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parse;

    fn first_import(source: &str) -> String {
        let program = parse(source).unwrap();
        match &program.body[0].kind {
            StmtKind::Import(decl) => print_import(decl, source),
            other => panic!("expected import, got {:?}", other),
        }
    }

    #[test]
    fn import_prints_all_clauses() {
        assert_eq!(
            first_import("import def, { a, b as c } from 'pkg';"),
            "import def, {a, b as c} from 'pkg';"
        );
        assert_eq!(
            first_import("import * as ns from \"pkg\";"),
            "import * as ns from \"pkg\";"
        );
        assert_eq!(first_import("import \"./fx\";"), "import \"./fx\";");
        assert_eq!(
            first_import("import type { T } from 'types';"),
            "import type {T} from 'types';"
        );
    }

    #[test]
    fn export_prints_source_clause() {
        let source = "export { a, b } from \"pkg\";";
        let program = parse(source).unwrap();
        match &program.body[0].kind {
            StmtKind::Export(decl) => {
                assert_eq!(print_export(decl, source), "export {a, b} from \"pkg\";");
            }
            other => panic!("expected export, got {:?}", other),
        }
    }

    #[test]
    fn raw_splice_reorders_nested_attribute_regions() {
        let source = r#"const x = <Outer icon={<Inner bb="22" a="1" />} b="2" />;"#;
        let program = parse(source).unwrap();
        let program = crate::transform::apply(program, &crate::fmt::SortConfig::canonical());
        let stmt = &program.body[0];
        match &stmt.kind {
            StmtKind::Raw(raw) => {
                assert_eq!(
                    print_raw(stmt.span, raw, source),
                    r#"const x = <Outer b="2" icon={<Inner a="1" bb="22" />} />;"#
                );
            }
            other => panic!("expected raw, got {:?}", other),
        }
    }

    #[test]
    fn raw_without_elements_is_verbatim() {
        let source = "const answer = 40 + 2;";
        let program = parse(source).unwrap();
        let stmt = &program.body[0];
        match &stmt.kind {
            StmtKind::Raw(raw) => {
                assert_eq!(print_raw(stmt.span, raw, source), source);
            }
            other => panic!("expected raw, got {:?}", other),
        }
    }
}
