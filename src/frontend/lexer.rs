// src/frontend/lexer.rs
//! Lenient lexer for JS/TS-ish source.
//!
//! The lexer is precise about the constructs that can hide structural
//! characters (strings, template literals, comments, regex literals) and
//! deliberately loose about everything else: multi-character operators lex as
//! runs of single-character `Punct` tokens, and unknown characters become
//! `Punct` rather than errors. Comment spans are collected on the side so the
//! parser can re-attach them to statements.

use crate::errors::LexerError;
use crate::frontend::token::{Span, Token, TokenKind};

/// Identifiers that may directly precede a regex literal even though an
/// identifier normally ends an expression.
const REGEX_PRECEDING_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "case",
    "delete",
    "in",
    "of",
    "instanceof",
    "new",
    "void",
    "do",
    "else",
];

pub struct Lexer<'src> {
    source: &'src str,
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    start: usize,
    current: usize,
    line: u32,
    column: u32,
    start_line: u32,
    start_column: u32,
    prev_kind: Option<TokenKind>,
    prev_ident_keyword: bool,
    comments: Vec<Span>,
    errors: Vec<LexerError>,
}

/// Lex the entire source, returning the token stream (terminated by an `Eof`
/// token), the skipped comment spans, and any collected errors.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Span>, Vec<LexerError>) {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    let comments = std::mem::take(&mut lexer.comments);
    let errors = lexer.take_errors();
    (tokens, comments, errors)
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            prev_kind: None,
            prev_ident_keyword: false,
            comments: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Take all collected errors, leaving the internal list empty.
    pub fn take_errors(&mut self) -> Vec<LexerError> {
        std::mem::take(&mut self.errors)
    }

    /// Check if any errors have been collected.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Spans of all comments skipped so far.
    pub fn comments(&self) -> &[Span] {
        &self.comments
    }

    /// Get the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ';' => TokenKind::Semi,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '*' => TokenKind::Star,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            '.' => {
                if self.peek() == Some('.') && self.peek2() == Some('.') {
                    self.advance();
                    self.advance();
                    TokenKind::Ellipsis
                } else {
                    TokenKind::Dot
                }
            }
            '=' => {
                if self.match_char('>') {
                    TokenKind::Arrow
                } else if self.peek() == Some('=') {
                    while self.peek() == Some('=') {
                        self.advance();
                    }
                    TokenKind::Punct
                } else {
                    TokenKind::Eq
                }
            }
            '/' => self.slash(),
            '"' | '\'' => self.string(c),
            '`' => self.template(),
            c if is_ident_start(c) => {
                while matches!(self.peek(), Some(c) if is_ident_continue(c)) {
                    self.advance();
                }
                TokenKind::Ident
            }
            c if c.is_ascii_digit() => {
                while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '.' || c == '_')
                {
                    self.advance();
                }
                TokenKind::Number
            }
            _ => TokenKind::Punct,
        };

        self.make_token(kind)
    }

    fn make_token(&mut self, kind: TokenKind) -> Token {
        let span = Span::new(self.start, self.current, self.start_line, self.start_column);
        if kind != TokenKind::Eof {
            self.prev_ident_keyword = kind == TokenKind::Ident
                && REGEX_PRECEDING_KEYWORDS.contains(&span.text(self.source));
            self.prev_kind = Some(kind);
        }
        Token::new(kind, span)
    }

    /// Advance to the next character, updating byte offset and line/column.
    fn advance(&mut self) -> Option<char> {
        let (i, c) = self.chars.next()?;
        self.current = i + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek2(&self) -> Option<char> {
        self.chars.clone().nth(1).map(|(_, c)| c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip whitespace and comments, recording comment spans.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek2() == Some('/') => {
                    let (start, line, column) = (self.current, self.line, self.column);
                    while !matches!(self.peek(), None | Some('\n')) {
                        self.advance();
                    }
                    self.comments.push(Span::new(start, self.current, line, column));
                }
                Some('/') if self.peek2() == Some('*') => {
                    let (start, line, column) = (self.current, self.line, self.column);
                    self.advance();
                    self.advance();
                    loop {
                        match self.peek() {
                            None => {
                                self.errors.push(LexerError::UnterminatedComment {
                                    span: Span::new(start, self.current, line, column).into(),
                                });
                                break;
                            }
                            Some('*') if self.peek2() == Some('/') => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            Some(_) => {
                                self.advance();
                            }
                        }
                    }
                    self.comments.push(Span::new(start, self.current, line, column));
                }
                _ => break,
            }
        }
    }

    /// Consume a string literal body. The opening quote is already consumed.
    fn string(&mut self, quote: char) -> TokenKind {
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.errors.push(LexerError::UnterminatedString {
                        span: self.partial_span().into(),
                    });
                    break;
                }
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        TokenKind::String
    }

    /// Consume a template literal as one token, tracking `${ }` nesting so
    /// braces and quotes inside interpolations do not end the literal early.
    fn template(&mut self) -> TokenKind {
        let mut brace_depth = 0u32;
        loop {
            match self.peek() {
                None => {
                    self.errors.push(LexerError::UnterminatedTemplate {
                        span: self.partial_span().into(),
                    });
                    break;
                }
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some('`') if brace_depth == 0 => {
                    self.advance();
                    break;
                }
                Some('$') if self.peek2() == Some('{') => {
                    self.advance();
                    self.advance();
                    brace_depth += 1;
                }
                Some('{') if brace_depth > 0 => {
                    self.advance();
                    brace_depth += 1;
                }
                Some('}') if brace_depth > 0 => {
                    self.advance();
                    brace_depth -= 1;
                }
                Some(q @ ('"' | '\'')) if brace_depth > 0 => {
                    self.advance();
                    self.string(q);
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        TokenKind::Template
    }

    /// A `/` that is not a comment: regex literal in expression position,
    /// otherwise a plain slash.
    fn slash(&mut self) -> TokenKind {
        if !self.regex_position() {
            return TokenKind::Slash;
        }

        // Look ahead for a closing '/' on the same line before committing.
        let rest = &self.source[self.current..];
        let mut in_class = false;
        let mut escaped = false;
        let mut close = None;
        for (i, c) in rest.char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '\n' => break,
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => {
                    close = Some(i);
                    break;
                }
                _ => {}
            }
        }

        let Some(close) = close else {
            return TokenKind::Slash;
        };

        let target = self.current + close + 1;
        while self.current < target {
            self.advance();
        }
        // Flags
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.advance();
        }
        TokenKind::Regex
    }

    /// A `/` begins a regex literal only where an expression may start.
    fn regex_position(&self) -> bool {
        if self.prev_ident_keyword {
            return true;
        }
        !matches!(
            self.prev_kind,
            Some(
                TokenKind::Ident
                    | TokenKind::Number
                    | TokenKind::String
                    | TokenKind::Template
                    | TokenKind::Regex
                    | TokenKind::RParen
                    | TokenKind::RBracket
            )
        )
    }

    fn partial_span(&self) -> Span {
        Span::new(self.start, self.current, self.start_line, self.start_column)
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, _, errors) = tokenize(source);
        assert!(errors.is_empty(), "unexpected lexer errors: {:?}", errors);
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn basic_import_tokens() {
        assert_eq!(
            kinds("import { a } from 'x';"),
            vec![
                TokenKind::Ident,
                TokenKind::LBrace,
                TokenKind::Ident,
                TokenKind::RBrace,
                TokenKind::Ident,
                TokenKind::String,
                TokenKind::Semi,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn string_with_escapes() {
        let (tokens, _, errors) = tokenize(r#"'it\'s' "a\"b""#);
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[0].text(r#"'it\'s' "a\"b""#), r"'it\'s'");
    }

    #[test]
    fn template_with_nested_interpolation() {
        let source = "`a ${fn({ b: '}' })} c`;";
        let (tokens, _, errors) = tokenize(source);
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Template);
        assert_eq!(tokens[1].kind, TokenKind::Semi);
    }

    #[test]
    fn comments_are_collected_not_tokenized() {
        let source = "a; // line\n/* block */ b;";
        let (tokens, comments, errors) = tokenize(source);
        assert!(errors.is_empty());
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text(source), "// line");
        assert_eq!(comments[1].text(source), "/* block */");
        let idents = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Ident)
            .count();
        assert_eq!(idents, 2);
    }

    #[test]
    fn regex_literal_in_expression_position() {
        let source = "const r = /\"[a-z]+\"/g;";
        let (tokens, _, errors) = tokenize(source);
        assert!(errors.is_empty());
        let regex = tokens.iter().find(|t| t.kind == TokenKind::Regex).unwrap();
        assert_eq!(regex.text(source), "/\"[a-z]+\"/g");
    }

    #[test]
    fn division_is_not_a_regex() {
        let source = "a / b / c";
        let (tokens, _, _) = tokenize(source);
        let slashes = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Slash)
            .count();
        assert_eq!(slashes, 2);
    }

    #[test]
    fn regex_after_return_keyword() {
        let source = "return /ab/;";
        let (tokens, _, _) = tokenize(source);
        assert_eq!(tokens[1].kind, TokenKind::Regex);
    }

    #[test]
    fn ellipsis_and_arrow() {
        assert_eq!(
            kinds("...x => y"),
            vec![
                TokenKind::Ellipsis,
                TokenKind::Ident,
                TokenKind::Arrow,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let (_, _, errors) = tokenize("'abc");
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LexerError::UnterminatedString { .. }));
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        let (_, _, errors) = tokenize("a; /* never closed");
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LexerError::UnterminatedComment { .. }));
    }
}
