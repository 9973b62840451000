// src/errors/lexer.rs
//! Lexer errors (E0xxx).

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum LexerError {
    #[error("unterminated string literal")]
    #[diagnostic(code(E0001), help("add a closing quote before the end of the line"))]
    UnterminatedString {
        #[label("string starts here")]
        span: SourceSpan,
    },

    #[error("unterminated template literal")]
    #[diagnostic(code(E0002), help("add a closing '`' to terminate the template"))]
    UnterminatedTemplate {
        #[label("template starts here")]
        span: SourceSpan,
    },

    #[error("unterminated block comment")]
    #[diagnostic(code(E0003), help("add a closing '*/'"))]
    UnterminatedComment {
        #[label("comment starts here")]
        span: SourceSpan,
    },
}
