// src/frontend/token.rs

/// Byte-offset range of a node or token in the source text.
///
/// `end` is exclusive, so `end >= start` always holds and `len()` is never
/// negative. Line and column describe the start position (1-indexed) and are
/// only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the source text this span covers.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Smallest span covering both `self` and `other`.
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line.min(other.line),
            column: if other.line < self.line {
                other.column
            } else {
                self.column
            },
        }
    }

    /// Slice the source text this span covers.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start..self.end]
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Token kinds for the lenient scan.
///
/// Only the punctuation the parser dispatches on gets its own kind; every
/// other operator collapses into `Punct`. Multi-character operators lex as
/// runs of single-character tokens, which is enough for boundary detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Number,
    /// Single- or double-quoted string literal, quotes included
    String,
    /// Backtick template literal, interpolations included
    Template,
    /// Regular-expression literal
    Regex,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Semi,
    Comma,
    Dot,
    /// `...`
    Ellipsis,
    Eq,
    /// `=>`
    Arrow,
    Colon,
    Star,
    Slash,
    /// Any other operator or punctuation character
    Punct,
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Source text of this token.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        self.span.text(source)
    }
}
