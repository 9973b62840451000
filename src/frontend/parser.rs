// src/frontend/parser.rs
//! Top-level statement splitter and module-header parser.
//!
//! Import and export declarations are parsed precisely; every other
//! statement is kept as a raw token run sliced verbatim from the source.
//! Statement boundaries are a semicolon at nesting depth zero, or a newline
//! where the previous token can end a statement and the next token does not
//! continue one (the usual ASI reading; an opening paren or bracket on a new
//! line is treated as a new statement).

use crate::errors::ParserError;
use crate::frontend::ast::*;
use crate::frontend::elements::scan_elements;
use crate::frontend::lexer;
use crate::frontend::token::{Span, Token, TokenKind};

pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    comments: Vec<Span>,
    pos: usize,
}

/// Parse source text into a program.
pub fn parse(source: &str) -> Result<Program, ParserError> {
    Parser::new(source)?.parse_program()
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Result<Self, ParserError> {
        let (tokens, comments, errors) = lexer::tokenize(source);
        if let Some(first) = errors.into_iter().next() {
            return Err(ParserError::Lexer(first));
        }
        Ok(Self {
            source,
            tokens,
            comments,
            pos: 0,
        })
    }

    pub fn parse_program(&mut self) -> Result<Program, ParserError> {
        let mut body = Vec::new();
        while !self.at_eof() {
            // Stray empty statements
            if self.match_kind(TokenKind::Semi) {
                continue;
            }
            let stmt = self.statement()?;
            body.push(stmt);
        }
        let mut program = Program {
            body,
            trailing_comments: Vec::new(),
        };
        self.attach_trivia(&mut program);
        tracing::debug!(statements = program.body.len(), "parsed program");
        Ok(program)
    }

    fn statement(&mut self) -> Result<Stmt, ParserError> {
        if self.check_ident("import") {
            // Dynamic import() and import.meta are expressions, not declarations
            let next = self.peek_next().kind;
            if !matches!(next, TokenKind::LParen | TokenKind::Dot) {
                return self.import_decl();
            }
        }
        if self.check_ident("export") {
            let next = *self.peek_next();
            let named_export = next.kind == TokenKind::LBrace
                || (next.kind == TokenKind::Ident
                    && next.span.text(self.source) == "type"
                    && self.kind_at(self.pos + 2) == TokenKind::LBrace);
            if named_export {
                return self.export_decl();
            }
        }
        self.raw_statement()
    }

    fn import_decl(&mut self) -> Result<Stmt, ParserError> {
        let start = *self.current();
        self.advance(); // 'import'

        let mut type_only = false;
        if self.check_ident("type") && self.type_clause_follows() {
            type_only = true;
            self.advance();
        }

        // Bare import: import "side-effect";
        if self.check(TokenKind::String) {
            let source = self.string_lit()?;
            let span = self.decl_span(start);
            return Ok(Stmt::new(
                StmtKind::Import(ImportDecl {
                    type_only,
                    default: None,
                    namespace: None,
                    named: Vec::new(),
                    source,
                    span,
                }),
                span,
            ));
        }

        let mut default = None;
        let mut namespace = None;
        let mut named = Vec::new();

        if self.check(TokenKind::Ident) && !self.check_ident("from") {
            default = Some(Binding {
                span: self.current().span,
            });
            self.advance();
            if self.match_kind(TokenKind::Comma) {
                self.import_clause_rest(&mut namespace, &mut named)?;
            }
        } else {
            self.import_clause_rest(&mut namespace, &mut named)?;
        }

        self.expect_ident("from")?;
        let source = self.string_lit()?;
        let span = self.decl_span(start);
        Ok(Stmt::new(
            StmtKind::Import(ImportDecl {
                type_only,
                default,
                namespace,
                named,
                source,
                span,
            }),
            span,
        ))
    }

    /// The part of an import clause after any default binding: `* as ns` or
    /// a named brace list.
    fn import_clause_rest(
        &mut self,
        namespace: &mut Option<Binding>,
        named: &mut Vec<Specifier>,
    ) -> Result<(), ParserError> {
        if self.match_kind(TokenKind::Star) {
            self.expect_ident("as")?;
            if !self.check(TokenKind::Ident) {
                return Err(self.expected("a namespace name"));
            }
            *namespace = Some(Binding {
                span: self.current().span,
            });
            self.advance();
        } else if self.check(TokenKind::LBrace) {
            *named = self.specifier_list()?;
        } else {
            return Err(self.expected("'{' or '*'"));
        }
        Ok(())
    }

    /// Whether `type` here is the TS type-only prefix rather than a binding
    /// named `type` (as in `import type from "x"`).
    fn type_clause_follows(&self) -> bool {
        let next = self.peek_next();
        match next.kind {
            TokenKind::LBrace | TokenKind::Star => true,
            TokenKind::Ident => next.span.text(self.source) != "from",
            _ => false,
        }
    }

    fn export_decl(&mut self) -> Result<Stmt, ParserError> {
        let start = *self.current();
        self.advance(); // 'export'

        let type_only = if self.check_ident("type") && self.peek_next().kind == TokenKind::LBrace
        {
            self.advance();
            true
        } else {
            false
        };

        let named = self.specifier_list()?;
        let source = if self.check_ident("from") {
            self.advance();
            Some(self.string_lit()?)
        } else {
            None
        };
        let span = self.decl_span(start);
        Ok(Stmt::new(
            StmtKind::Export(ExportDecl {
                type_only,
                named,
                source,
                span,
            }),
            span,
        ))
    }

    fn specifier_list(&mut self) -> Result<Vec<Specifier>, ParserError> {
        let open = *self.current();
        self.advance(); // '{'
        let mut specifiers = Vec::new();
        loop {
            if self.match_kind(TokenKind::RBrace) {
                break;
            }
            if self.at_eof() {
                return Err(ParserError::UnclosedSpecifierList {
                    span: open.span.into(),
                });
            }
            specifiers.push(self.specifier()?);
            if !self.match_kind(TokenKind::Comma) {
                if self.match_kind(TokenKind::RBrace) {
                    break;
                }
                return Err(self.expected("',' or '}'"));
            }
        }
        Ok(specifiers)
    }

    fn specifier(&mut self) -> Result<Specifier, ParserError> {
        let first = *self.current();

        // TS `type` prefix inside the braces; `type as t` exports a binding
        // actually named `type`.
        if first.kind == TokenKind::Ident && first.span.text(self.source) == "type" {
            let next = *self.peek_next();
            let is_prefix = matches!(next.kind, TokenKind::Ident | TokenKind::String)
                && next.span.text(self.source) != "as";
            if is_prefix {
                self.advance();
            }
        }

        let name_tok = *self.current();
        if !matches!(name_tok.kind, TokenKind::Ident | TokenKind::String) {
            return Err(ParserError::ExpectedSpecifier {
                found: self.current_text().to_string(),
                span: name_tok.span.into(),
            });
        }
        self.advance();

        let mut end = name_tok.span.end;
        if self.check_ident("as") {
            self.advance();
            let local = *self.current();
            if !matches!(local.kind, TokenKind::Ident | TokenKind::String) {
                return Err(ParserError::ExpectedSpecifier {
                    found: self.current_text().to_string(),
                    span: local.span.into(),
                });
            }
            end = local.span.end;
            self.advance();
        }

        Ok(Specifier {
            span: Span {
                start: first.span.start,
                end,
                line: first.span.line,
                column: first.span.column,
            },
            name_span: name_tok.span,
        })
    }

    fn string_lit(&mut self) -> Result<StringLit, ParserError> {
        if !self.check(TokenKind::String) {
            return Err(ParserError::ExpectedModulePath {
                found: self.current_text().to_string(),
                span: self.current().span.into(),
            });
        }
        let tok = *self.current();
        self.advance();
        let raw = tok.span.text(self.source);
        let value = if raw.len() >= 2 {
            raw[1..raw.len() - 1].to_string()
        } else {
            String::new()
        };
        Ok(StringLit {
            span: tok.span,
            value,
        })
    }

    /// Everything else: consume one statement's worth of tokens and keep the
    /// slice, scanning it for opening elements.
    fn raw_statement(&mut self) -> Result<Stmt, ParserError> {
        let start_pos = self.pos;
        let start = *self.current();
        let mut depth: u32 = 0;

        loop {
            if self.at_eof() {
                break;
            }
            let tok = *self.current();
            if depth == 0 && self.pos > start_pos && self.boundary_before(tok) {
                break;
            }
            match tok.kind {
                TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            self.advance();
            if depth == 0 && tok.kind == TokenKind::Semi {
                break;
            }
        }

        let end_pos = self.pos;
        let end = self.tokens[end_pos - 1].span.end;
        let span = Span {
            start: start.span.start,
            end,
            line: start.span.line,
            column: start.span.column,
        };
        let elements = scan_elements(&self.tokens[start_pos..end_pos], self.source);
        Ok(Stmt::new(StmtKind::Raw(RawStmt { elements }), span))
    }

    /// ASI-style boundary: the statement ends before `tok` if a newline
    /// separates it from the previous token, the previous token can end a
    /// statement, and `tok` does not continue one.
    fn boundary_before(&self, tok: Token) -> bool {
        let prev = self.tokens[self.pos - 1];
        if !has_newline(self.source, prev.span.end, tok.span.start) {
            return false;
        }
        if !can_end_statement(prev.kind) {
            return false;
        }
        !continues_statement(tok, self.source)
    }

    /// Attach leading/trailing comments to statements and compute the
    /// blank-line-after flags from the original source gaps.
    fn attach_trivia(&mut self, program: &mut Program) {
        let comments = std::mem::take(&mut self.comments);
        let mut ci = 0;

        for stmt in &mut program.body {
            let (start, end) = (stmt.span.start, stmt.span.end);
            // Comments on their own lines above the statement
            while ci < comments.len() && comments[ci].end <= start {
                stmt.leading_comments.push(comments[ci]);
                ci += 1;
            }
            // Comments inside the statement span are already part of its
            // source slice
            while ci < comments.len() && comments[ci].start < end {
                ci += 1;
            }
            // Same-line comment after the statement
            if ci < comments.len() && !has_newline(self.source, end, comments[ci].start) {
                stmt.trailing_comment = Some(comments[ci]);
                ci += 1;
            }
        }
        program.trailing_comments = comments[ci..].to_vec();

        for i in 0..program.body.len().saturating_sub(1) {
            let gap_start = program.body[i]
                .trailing_comment
                .map(|c| c.end)
                .unwrap_or(program.body[i].span.end);
            let next = &program.body[i + 1];
            let gap_end = next
                .leading_comments
                .first()
                .map(|c| c.start)
                .unwrap_or(next.span.start);
            let gap = &self.source[gap_start..gap_end];
            if gap.matches('\n').count() >= 2 {
                program.body[i].blank_line_after = true;
            }
        }
    }

    // Cursor helpers

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_next(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)]
    }

    fn kind_at(&self, pos: usize) -> TokenKind {
        self.tokens
            .get(pos)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn at_eof(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    fn advance(&mut self) {
        if !self.at_eof() {
            self.pos += 1;
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn check_ident(&self, text: &str) -> bool {
        let tok = self.current();
        tok.kind == TokenKind::Ident && tok.span.text(self.source) == text
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_ident(&mut self, text: &str) -> Result<(), ParserError> {
        if self.check_ident(text) {
            self.advance();
            Ok(())
        } else {
            Err(self.expected(&format!("'{}'", text)))
        }
    }

    fn expected(&self, expected: &str) -> ParserError {
        ParserError::ExpectedToken {
            expected: expected.to_string(),
            found: self.current_text().to_string(),
            span: self.current().span.into(),
        }
    }

    fn current_text(&self) -> &str {
        let tok = self.current();
        if tok.kind == TokenKind::Eof {
            "end of input"
        } else {
            tok.span.text(self.source)
        }
    }

    /// Span of a declaration from its first token through the optional
    /// terminating semicolon.
    fn decl_span(&mut self, start: Token) -> Span {
        if self.check(TokenKind::Semi) {
            self.advance();
        }
        let end = self.tokens[self.pos - 1].span.end;
        Span {
            start: start.span.start,
            end,
            line: start.span.line,
            column: start.span.column,
        }
    }
}

fn has_newline(source: &str, from: usize, to: usize) -> bool {
    source[from..to].contains('\n')
}

fn can_end_statement(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ident
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Template
            | TokenKind::Regex
            | TokenKind::RParen
            | TokenKind::RBracket
            | TokenKind::RBrace
    )
}

fn continues_statement(tok: Token, source: &str) -> bool {
    match tok.kind {
        TokenKind::Dot
        | TokenKind::Comma
        | TokenKind::Punct
        | TokenKind::Eq
        | TokenKind::Arrow
        | TokenKind::Colon
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Lt
        | TokenKind::Gt
        | TokenKind::Ellipsis => true,
        TokenKind::Ident => matches!(
            tok.span.text(source),
            "else" | "catch" | "finally" | "while" | "instanceof" | "in" | "of"
        ),
        _ => false,
    }
}
