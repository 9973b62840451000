// src/frontend/ast.rs

use crate::frontend::Span;

/// A complete parsed program: an ordered sequence of top-level statements
/// plus any comments trailing the last statement.
#[derive(Debug)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub trailing_comments: Vec<Span>,
}

/// One top-level statement.
///
/// `blank_line_after` is the blank-line side channel: the parser sets it when
/// the original source had an empty line between this statement and the next,
/// and the import grouper sets it to separate import groups. The printer
/// honors it directly, so no synthetic statement ever has to survive a
/// render pass.
#[derive(Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
    /// Comments on their own lines immediately above this statement
    pub leading_comments: Vec<Span>,
    /// Comment on the same line, after the statement
    pub trailing_comment: Option<Span>,
    pub blank_line_after: bool,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self {
            kind,
            span,
            leading_comments: Vec::new(),
            trailing_comment: None,
            blank_line_after: false,
        }
    }

    /// A synthetic group-separator statement carrying the given payload.
    pub fn marker(payload: String) -> Self {
        Self::new(StmtKind::Marker(payload), Span::default())
    }
}

#[derive(Debug)]
pub enum StmtKind {
    Import(ImportDecl),
    Export(ExportDecl),
    Raw(RawStmt),
    /// Synthetic separator statement, never present in parsed source
    Marker(String),
}

/// An import declaration.
///
/// Only the named brace list participates in specifier sorting; the default
/// and namespace bindings sit in grammatically fixed slots.
#[derive(Debug)]
pub struct ImportDecl {
    /// TS `import type` form
    pub type_only: bool,
    pub default: Option<Binding>,
    pub namespace: Option<Binding>,
    pub named: Vec<Specifier>,
    pub source: StringLit,
    pub span: Span,
}

impl ImportDecl {
    /// A side-effect-only import with no bound names.
    pub fn is_bare(&self) -> bool {
        self.default.is_none() && self.namespace.is_none() && self.named.is_empty()
    }

    /// Whether the module path is file-local (starts with a `.`).
    pub fn is_file_local(&self) -> bool {
        self.source.value.starts_with('.')
    }
}

/// An `export [type] { ... } [from "..."]` declaration. Other export forms
/// parse as raw statements.
#[derive(Debug)]
pub struct ExportDecl {
    pub type_only: bool,
    pub named: Vec<Specifier>,
    pub source: Option<StringLit>,
    pub span: Span,
}

/// A single bound name (default or namespace binding).
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub span: Span,
}

/// One named specifier in an import/export brace list, e.g. `a` or `a as b`.
#[derive(Debug, Clone, Copy)]
pub struct Specifier {
    /// Full extent, `as`-clause included
    pub span: Span,
    /// The imported/exported name itself
    pub name_span: Span,
}

/// A string literal with its unquoted value.
#[derive(Debug, Clone)]
pub struct StringLit {
    pub span: Span,
    pub value: String,
}

/// Any statement the parser does not model structurally. The original text
/// is kept verbatim; only the attribute lists of the elements discovered
/// inside it are rewritten.
#[derive(Debug)]
pub struct RawStmt {
    pub elements: Vec<Element>,
}

/// A tag-like opening element, e.g. `<X a="1" {...rest}>`.
#[derive(Debug)]
pub struct Element {
    pub name_span: Span,
    pub attributes: Vec<Attribute>,
    /// Source region covering the whole attribute list, captured before any
    /// reordering
    pub attrs_region: Option<Span>,
    pub span: Span,
}

/// One attribute of an opening element. Spread attributes have no name.
#[derive(Debug)]
pub struct Attribute {
    pub span: Span,
    pub name_span: Option<Span>,
    /// Elements found inside this attribute's braced value
    pub nested: Vec<Element>,
}
