// src/errors/parser.rs
//! Parser errors (E1xxx).

use crate::errors::LexerError;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ParserError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexer(#[from] LexerError),

    #[error("expected a module path, found '{found}'")]
    #[diagnostic(code(E1001), help("import sources must be plain string literals"))]
    ExpectedModulePath {
        found: String,
        #[label("expected a string literal")]
        span: SourceSpan,
    },

    #[error("expected {expected}, found '{found}'")]
    #[diagnostic(code(E1002))]
    ExpectedToken {
        expected: String,
        found: String,
        #[label("unexpected token")]
        span: SourceSpan,
    },

    #[error("unclosed specifier list")]
    #[diagnostic(code(E1003), help("add a closing '}}'"))]
    UnclosedSpecifierList {
        #[label("list opened here")]
        span: SourceSpan,
    },

    #[error("expected an import or export specifier, found '{found}'")]
    #[diagnostic(code(E1004))]
    ExpectedSpecifier {
        found: String,
        #[label("expected a name")]
        span: SourceSpan,
    },
}
