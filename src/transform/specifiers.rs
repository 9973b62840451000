// src/transform/specifiers.rs
//! Specifier reordering for import and export declarations.

use crate::frontend::ast::{ExportDecl, ImportDecl};
use crate::transform::compare::{compare_by_span, SortDirection};

/// Reorder an import declaration's named specifiers in the configured
/// direction. Bare imports and single-specifier lists pass through
/// unchanged.
pub fn sort_import(mut decl: ImportDecl, direction: SortDirection) -> ImportDecl {
    decl.named
        .sort_by(|a, b| compare_by_span(a, b, direction));
    decl
}

/// Reorder an export declaration's specifiers. Exports always sort
/// ascending.
pub fn sort_export(mut decl: ExportDecl) -> ExportDecl {
    decl.named
        .sort_by(|a, b| compare_by_span(a, b, SortDirection::Ascending));
    decl
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::{Program, StmtKind};
    use crate::frontend::parse;

    fn first_import(program: Program) -> ImportDecl {
        match program.body.into_iter().next().unwrap().kind {
            StmtKind::Import(decl) => decl,
            other => panic!("expected import, got {:?}", other),
        }
    }

    fn first_export(program: Program) -> ExportDecl {
        match program.body.into_iter().next().unwrap().kind {
            StmtKind::Export(decl) => decl,
            other => panic!("expected export, got {:?}", other),
        }
    }

    #[test]
    fn import_specifiers_sort_ascending() {
        let source = "import { longest, a, mid } from 'pkg';";
        let decl = first_import(parse(source).unwrap());
        let decl = sort_import(decl, SortDirection::Ascending);
        let names: Vec<_> = decl.named.iter().map(|s| s.span.text(source)).collect();
        assert_eq!(names, vec!["a", "mid", "longest"]);
    }

    #[test]
    fn import_specifiers_sort_descending() {
        let source = "import { longest, a, mid } from 'pkg';";
        let decl = first_import(parse(source).unwrap());
        let decl = sort_import(decl, SortDirection::Descending);
        let names: Vec<_> = decl.named.iter().map(|s| s.span.text(source)).collect();
        assert_eq!(names, vec!["longest", "mid", "a"]);
    }

    #[test]
    fn renamed_specifier_sorts_by_full_extent() {
        let source = "import { a as veryLongLocal, medium } from 'pkg';";
        let decl = first_import(parse(source).unwrap());
        let decl = sort_import(decl, SortDirection::Ascending);
        let names: Vec<_> = decl.named.iter().map(|s| s.span.text(source)).collect();
        assert_eq!(names, vec!["medium", "a as veryLongLocal"]);
    }

    #[test]
    fn export_specifiers_always_sort_ascending() {
        let source = "export { bbb, a, cc };";
        let decl = first_export(parse(source).unwrap());
        let decl = sort_export(decl);
        let names: Vec<_> = decl.named.iter().map(|s| s.span.text(source)).collect();
        assert_eq!(names, vec!["a", "cc", "bbb"]);
    }

    #[test]
    fn bare_import_is_untouched() {
        let source = "import './effects';";
        let decl = first_import(parse(source).unwrap());
        let decl = sort_import(decl, SortDirection::Ascending);
        assert!(decl.is_bare());
    }
}
