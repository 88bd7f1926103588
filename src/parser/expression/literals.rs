//! Literal parsing helpers for atoms.

use crate::parser::ast::{Expr, ExprKind, NumberLiteral};
use crate::{SyntaxKind, Token};

/// Resolve `\"` and `\'` in a single forward scan.
///
/// Any other backslash is kept as written.
pub(super) fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        let escaped = if ch == '\\' {
            chars.next_if(|c| matches!(c, '"' | '\''))
        } else {
            None
        };
        out.push(escaped.unwrap_or(ch));
    }
    out
}

/// Strip the surrounding `quote` characters and resolve escapes.
fn quoted_body(text: &str, quote: char) -> String {
    let body = text
        .strip_prefix(quote)
        .and_then(|s| s.strip_suffix(quote))
        .unwrap_or(text);
    unescape(body)
}

/// Build the leaf for a literal token, or `None` if `tok` is not a literal.
pub(super) fn literal_expr(tok: &Token<'_>) -> Option<Expr> {
    let kind = match tok.kind {
        SyntaxKind::T_INT | SyntaxKind::T_REAL => ExprKind::Number(NumberLiteral {
            raw: tok.text.to_string(),
            is_real: tok.kind == SyntaxKind::T_REAL,
        }),
        SyntaxKind::K_TRUE => ExprKind::Bool(true),
        SyntaxKind::K_FALSE => ExprKind::Bool(false),
        SyntaxKind::T_STRING => ExprKind::String(quoted_body(tok.text, '"')),
        SyntaxKind::T_SINGLE_QUOTED => ExprKind::SingleQuoted(quoted_body(tok.text, '\'')),
        _ => return None,
    };
    Some(Expr::new(kind, tok.span.clone()))
}
