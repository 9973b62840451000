// src/frontend/elements.rs
//! Backtracking scan for tag-like opening elements inside a raw statement's
//! token run.
//!
//! A `<` followed by an identifier is tried as an opening tag whenever the
//! preceding token could not end an expression (so comparisons and generics
//! fall through). If the attribute grammar stops matching before the tag
//! closes, the candidate is abandoned and scanning resumes after the `<`.

use crate::frontend::ast::{Attribute, Element};
use crate::frontend::token::{Span, Token, TokenKind};

/// Identifiers after which an expression (and therefore a tag) may start.
const EXPRESSION_KEYWORDS: &[&str] = &[
    "return", "default", "case", "do", "else", "typeof", "void", "in", "of", "instanceof",
    "yield", "await",
];

/// Find every opening element in `tokens`, in source order, including
/// elements nested inside braced attribute values.
pub fn scan_elements(tokens: &[Token], source: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].kind == TokenKind::Lt
            && matches!(tokens.get(i + 1), Some(t) if t.kind == TokenKind::Ident)
            && tag_position(i.checked_sub(1).map(|p| &tokens[p]), source)
        {
            if let Some((element, next)) = try_opening_tag(tokens, i, source) {
                elements.push(element);
                i = next;
                continue;
            }
        }
        i += 1;
    }
    elements
}

/// Whether a tag may start after the given token.
fn tag_position(prev: Option<&Token>, source: &str) -> bool {
    let Some(prev) = prev else {
        return true;
    };
    match prev.kind {
        TokenKind::Ident => EXPRESSION_KEYWORDS.contains(&prev.text(source)),
        TokenKind::Number
        | TokenKind::String
        | TokenKind::Template
        | TokenKind::Regex
        | TokenKind::RParen
        | TokenKind::RBracket => false,
        _ => true,
    }
}

/// Parse an opening tag starting at the `<` at `start`. Returns the element
/// and the index just past the closing `>` or `/>`, or `None` if this is not
/// an opening tag after all.
fn try_opening_tag(tokens: &[Token], start: usize, source: &str) -> Option<(Element, usize)> {
    let lt = &tokens[start];
    let mut j = start + 1;

    let name_tok = tokens.get(j)?;
    if name_tok.kind != TokenKind::Ident {
        return None;
    }
    let mut name_span = name_tok.span;
    j += 1;

    // Dotted and namespaced tag names: <Foo.Bar>, <svg:rect>. Parts must be
    // adjacent in the source, with no whitespace.
    while let (Some(sep), Some(part)) = (tokens.get(j), tokens.get(j + 1)) {
        let joins = matches!(sep.kind, TokenKind::Dot | TokenKind::Colon)
            && part.kind == TokenKind::Ident
            && sep.span.start == name_span.end
            && part.span.start == sep.span.end;
        if !joins {
            break;
        }
        name_span = name_span.merge(part.span);
        j += 2;
    }

    let mut attributes = Vec::new();
    loop {
        let tok = tokens.get(j)?;
        match tok.kind {
            TokenKind::Gt => {
                j += 1;
                break;
            }
            TokenKind::Slash
                if matches!(tokens.get(j + 1), Some(t) if t.kind == TokenKind::Gt) =>
            {
                j += 2;
                break;
            }
            TokenKind::Ident => {
                let (attr, next) = named_attribute(tokens, j, source)?;
                attributes.push(attr);
                j = next;
            }
            TokenKind::LBrace => {
                // Spread attribute: {...expr}
                let (nested, span, next) = braced(tokens, j, source)?;
                attributes.push(Attribute {
                    span,
                    name_span: None,
                    nested,
                });
                j = next;
            }
            _ => return None,
        }
    }

    let last = &tokens[j - 1];
    let span = Span {
        start: lt.span.start,
        end: last.span.end,
        line: lt.span.line,
        column: lt.span.column,
    };
    let attrs_region = match (attributes.first(), attributes.last()) {
        (Some(first), Some(last)) => Some(Span {
            start: first.span.start,
            end: last.span.end,
            line: first.span.line,
            column: first.span.column,
        }),
        _ => None,
    };
    Some((
        Element {
            name_span,
            attributes,
            attrs_region,
            span,
        },
        j,
    ))
}

/// Parse a named attribute at `j`: `name`, `name="..."`, or `name={expr}`.
/// Dashed and namespaced names (`data-x`, `xlink:href`) are merged.
fn named_attribute(tokens: &[Token], j: usize, source: &str) -> Option<(Attribute, usize)> {
    let first = &tokens[j];
    let mut name_span = first.span;
    let mut k = j + 1;

    while let (Some(sep), Some(part)) = (tokens.get(k), tokens.get(k + 1)) {
        let is_dash = sep.kind == TokenKind::Punct && sep.text(source) == "-";
        let joins = (is_dash || sep.kind == TokenKind::Colon)
            && part.kind == TokenKind::Ident
            && sep.span.start == name_span.end
            && part.span.start == sep.span.end;
        if !joins {
            break;
        }
        name_span = name_span.merge(part.span);
        k += 2;
    }

    let mut nested = Vec::new();
    let mut end = name_span.end;
    if matches!(tokens.get(k), Some(t) if t.kind == TokenKind::Eq) {
        k += 1;
        let value = tokens.get(k)?;
        match value.kind {
            TokenKind::String | TokenKind::Template | TokenKind::Number => {
                end = value.span.end;
                k += 1;
            }
            TokenKind::LBrace => {
                let (inner, span, next) = braced(tokens, k, source)?;
                nested = inner;
                end = span.end;
                k = next;
            }
            _ => return None,
        }
    }

    let span = Span {
        start: first.span.start,
        end,
        line: first.span.line,
        column: first.span.column,
    };
    Some((
        Attribute {
            span,
            name_span: Some(name_span),
            nested,
        },
        k,
    ))
}

/// Consume a balanced `{ ... }` starting at `j`, scanning the inside for
/// nested elements. Returns the nested elements, the span including both
/// braces, and the index just past the closing brace.
fn braced(tokens: &[Token], j: usize, source: &str) -> Option<(Vec<Element>, Span, usize)> {
    let open = &tokens[j];
    let mut depth = 1u32;
    let mut k = j + 1;
    while let Some(tok) = tokens.get(k) {
        match tok.kind {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => {
                depth -= 1;
                if depth == 0 {
                    let nested = scan_elements(&tokens[j + 1..k], source);
                    let span = Span {
                        start: open.span.start,
                        end: tok.span.end,
                        line: open.span.line,
                        column: open.span.column,
                    };
                    return Some((nested, span, k + 1));
                }
            }
            _ => {}
        }
        k += 1;
    }
    None
}
