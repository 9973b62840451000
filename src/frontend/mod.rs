// src/frontend/mod.rs
pub mod ast;
pub mod elements;
pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::Lexer;
pub use parser::{parse, Parser};
pub use token::{Span, Token, TokenKind};
