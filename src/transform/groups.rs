// src/transform/groups.rs
//! Import grouping.
//!
//! All top-level import declarations are hoisted to the front of the program
//! and partitioned into four groups in fixed output order: named imports
//! from packages, named imports from local files, bare imports from
//! packages, bare imports from local files. A path is file-local when it
//! starts with `.`. Each group is ordered internally by declaration span
//! length; adjacent non-empty groups are separated by one blank line. The
//! remaining statements keep their original relative order.

use crate::fmt::config::{GroupSeparator, SortConfig};
use crate::frontend::ast::{ImportDecl, Program, Stmt, StmtKind};
use crate::transform::compare::compare_decl_spans;

/// Partition of a program's import declarations into the four output
/// groups, in output order.
#[derive(Debug, Default)]
pub struct ImportGroups {
    pub named_module: Vec<Stmt>,
    pub named_file: Vec<Stmt>,
    pub bare_module: Vec<Stmt>,
    pub bare_file: Vec<Stmt>,
}

impl ImportGroups {
    fn push(&mut self, stmt: Stmt) {
        let decl = expect_import(&stmt);
        let group = match (decl.is_bare(), decl.is_file_local()) {
            (false, false) => &mut self.named_module,
            (false, true) => &mut self.named_file,
            (true, false) => &mut self.bare_module,
            (true, true) => &mut self.bare_file,
        };
        group.push(stmt);
    }

    fn groups_mut(&mut self) -> [&mut Vec<Stmt>; 4] {
        [
            &mut self.named_module,
            &mut self.named_file,
            &mut self.bare_module,
            &mut self.bare_file,
        ]
    }

    pub fn total(&self) -> usize {
        self.named_module.len() + self.named_file.len() + self.bare_module.len()
            + self.bare_file.len()
    }
}

/// Split a program body into its import declarations (partitioned into
/// groups, encounter order preserved) and everything else.
pub fn partition(body: Vec<Stmt>) -> (ImportGroups, Vec<Stmt>) {
    let mut groups = ImportGroups::default();
    let mut rest = Vec::new();
    for stmt in body {
        if matches!(stmt.kind, StmtKind::Import(_)) {
            groups.push(stmt);
        } else {
            rest.push(stmt);
        }
    }
    (groups, rest)
}

/// Hoist and group a program's imports. A program with no imports passes
/// through unchanged.
pub fn group_imports(program: Program, config: &SortConfig) -> Program {
    if !program
        .body
        .iter()
        .any(|s| matches!(s.kind, StmtKind::Import(_)))
    {
        return program;
    }

    let Program {
        body,
        trailing_comments,
    } = program;
    let (mut groups, rest) = partition(body);

    tracing::debug!(
        named_module = groups.named_module.len(),
        named_file = groups.named_file.len(),
        bare_module = groups.bare_module.len(),
        bare_file = groups.bare_file.len(),
        rest = rest.len(),
        "grouping imports"
    );

    let mut new_body: Vec<Stmt> = Vec::new();
    for group in groups.groups_mut() {
        if group.is_empty() {
            continue;
        }
        group.sort_by(|a, b| {
            compare_decl_spans(expect_import(a), expect_import(b), config.declarations)
        });
        if !new_body.is_empty() {
            match &config.group_separator {
                GroupSeparator::BlankLine => {
                    if let Some(last) = new_body.last_mut() {
                        last.blank_line_after = true;
                    }
                }
                GroupSeparator::Marker(payload) => {
                    new_body.push(Stmt::marker(payload.clone()));
                }
            }
        }
        for mut stmt in group.drain(..) {
            // Original blank-line positions no longer apply once hoisted
            stmt.blank_line_after = false;
            new_body.push(stmt);
        }
    }

    if !rest.is_empty() {
        if let Some(last) = new_body.last_mut() {
            last.blank_line_after = true;
        }
    }
    new_body.extend(rest);

    Program {
        body: new_body,
        trailing_comments,
    }
}

fn expect_import(stmt: &Stmt) -> &ImportDecl {
    match &stmt.kind {
        StmtKind::Import(decl) => decl,
        other => unreachable!("import group holds a non-import statement: {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parse;

    fn sources(stmts: &[Stmt]) -> Vec<String> {
        stmts
            .iter()
            .filter_map(|s| match &s.kind {
                StmtKind::Import(decl) => Some(decl.source.value.clone()),
                _ => None,
            })
            .collect()
    }

    fn body_kinds(program: &Program) -> Vec<&'static str> {
        program
            .body
            .iter()
            .map(|s| match &s.kind {
                StmtKind::Import(_) => "import",
                StmtKind::Export(_) => "export",
                StmtKind::Raw(_) => "raw",
                StmtKind::Marker(_) => "marker",
            })
            .collect()
    }

    const MIXED: &str = "\
import b from \"b\";
import \"./x\";
const before = 1;
import { z, a } from \"pkg\";
import \"polyfill\";
import { c } from \"./local\";
const after = 2;
";

    #[test]
    fn partition_is_complete_and_disjoint() {
        let program = parse(MIXED).unwrap();
        let (groups, rest) = partition(program.body);
        assert_eq!(groups.total(), 5);
        assert_eq!(rest.len(), 2);
        assert_eq!(groups.named_module.len(), 2);
        assert_eq!(groups.named_file.len(), 1);
        assert_eq!(groups.bare_module.len(), 1);
        assert_eq!(groups.bare_file.len(), 1);
    }

    #[test]
    fn file_groups_hold_only_relative_paths() {
        let program = parse(MIXED).unwrap();
        let (groups, _) = partition(program.body);
        for stmt in groups.named_file.iter().chain(&groups.bare_file) {
            match &stmt.kind {
                StmtKind::Import(decl) => assert!(decl.source.value.starts_with('.')),
                _ => unreachable!(),
            }
        }
        for stmt in groups.named_module.iter().chain(&groups.bare_module) {
            match &stmt.kind {
                StmtKind::Import(decl) => assert!(!decl.source.value.starts_with('.')),
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn imports_hoist_above_other_statements() {
        let program = parse(MIXED).unwrap();
        let grouped = group_imports(program, &SortConfig::canonical());
        let kinds = body_kinds(&grouped);
        assert_eq!(
            kinds,
            vec!["import", "import", "import", "import", "import", "raw", "raw"]
        );
    }

    #[test]
    fn rest_keeps_original_relative_order() {
        let program = parse(MIXED).unwrap();
        let source = MIXED;
        let grouped = group_imports(program, &SortConfig::canonical());
        let raws: Vec<_> = grouped
            .body
            .iter()
            .filter(|s| matches!(s.kind, StmtKind::Raw(_)))
            .map(|s| s.span.text(source))
            .collect();
        assert_eq!(raws, vec!["const before = 1;", "const after = 2;"]);
    }

    #[test]
    fn groups_order_by_declaration_span() {
        let program = parse(MIXED).unwrap();
        let grouped = group_imports(program, &SortConfig::canonical());
        // named_module: `import b from "b";` (18) before
        // `import { z, a } from "pkg";` (27)
        let named_module = sources(&grouped.body[..2]);
        assert_eq!(named_module, vec!["b", "pkg"]);
    }

    #[test]
    fn blank_lines_separate_adjacent_nonempty_groups() {
        let program = parse(MIXED).unwrap();
        let grouped = group_imports(program, &SortConfig::canonical());
        let blanks: Vec<bool> = grouped.body.iter().map(|s| s.blank_line_after).collect();
        // Groups end at indices 1 (named_module), 2 (named_file),
        // 3 (bare_module), 4 (bare_file, followed by rest).
        assert_eq!(blanks, vec![false, true, true, true, true, false, false]);
    }

    #[test]
    fn markers_sit_between_groups_when_configured() {
        let program = parse(MIXED).unwrap();
        let grouped = group_imports(program, &SortConfig::with_marker("BREAK"));
        let kinds = body_kinds(&grouped);
        assert_eq!(
            kinds,
            vec![
                "import", "import", "marker", "import", "marker", "import", "marker", "import",
                "raw", "raw"
            ]
        );
    }

    #[test]
    fn no_imports_is_a_no_op() {
        let source = "const a = 1;\nconst b = 2;\n";
        let program = parse(source).unwrap();
        let grouped = group_imports(program, &SortConfig::canonical());
        assert_eq!(body_kinds(&grouped), vec!["raw", "raw"]);
        assert!(!grouped.body[0].blank_line_after);
    }

    #[test]
    fn empty_program_is_a_no_op() {
        let program = parse("").unwrap();
        let grouped = group_imports(program, &SortConfig::canonical());
        assert!(grouped.body.is_empty());
    }
}
