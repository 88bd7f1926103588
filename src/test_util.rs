//! Helpers for constructing expression nodes and asserting parser errors in
//! tests.
//!
//! Builders produce nodes with an empty span; compare them against parser
//! output through [`Expr::to_sexpr`] or [`assert_parses_to`], which ignore
//! spans.

use crate::{
    Expected, LexErrorKind, SyntaxKind, TelError,
    parser::ast::{BinaryOp, Expr, ExprKind, NumberLiteral, TaxonSlug},
    parse,
};

/// Typed wrapper for taxon and function names.
#[derive(Debug, Clone)]
pub struct Name(String);

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Self(s)
    }
}

fn node(kind: ExprKind) -> Expr {
    Expr::new(kind, 0..0)
}

/// Construct an integer [`ExprKind::Number`].
#[must_use]
pub fn lit_int(raw: &str) -> Expr {
    node(ExprKind::Number(NumberLiteral {
        raw: raw.into(),
        is_real: false,
    }))
}

/// Construct a real [`ExprKind::Number`].
#[must_use]
pub fn lit_real(raw: &str) -> Expr {
    node(ExprKind::Number(NumberLiteral {
        raw: raw.into(),
        is_real: true,
    }))
}

/// Construct a boolean [`ExprKind::Bool`].
#[must_use]
pub fn lit_bool(b: bool) -> Expr {
    node(ExprKind::Bool(b))
}

/// Construct a string constant from its unescaped contents.
#[must_use]
pub fn lit_str(s: &str) -> Expr {
    node(ExprKind::String(s.into()))
}

/// Construct a single-quoted element from its unescaped contents.
#[must_use]
pub fn lit_single(s: &str) -> Expr {
    node(ExprKind::SingleQuoted(s.into()))
}

/// Construct a plain taxon slug with no prefix or suffixes.
#[must_use]
pub fn taxon(name: impl Into<Name>) -> Expr {
    taxon_slug(false, name, None, None)
}

/// Construct a taxon slug with every field given.
#[must_use]
pub fn taxon_slug(
    optional: bool,
    name: impl Into<Name>,
    namespace: Option<&str>,
    tag: Option<&str>,
) -> Expr {
    let name: Name = name.into();
    node(ExprKind::Taxon(TaxonSlug {
        optional,
        name: name.0,
        namespace: namespace.map(str::to_string),
        tag: tag.map(str::to_string),
    }))
}

/// Construct a function call [`ExprKind::Call`].
#[must_use]
pub fn call(name: impl Into<Name>, args: Vec<Expr>) -> Expr {
    let name: Name = name.into();
    node(ExprKind::Call { name: name.0, args })
}

/// Construct a binary expression.
#[must_use]
pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    node(ExprKind::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    })
}

/// Construct `not expr`.
#[must_use]
pub fn not(expr: Expr) -> Expr {
    node(ExprKind::Not(Box::new(expr)))
}

/// Construct `expr is [not] null`.
#[must_use]
pub fn null_test(expr: Expr, negated: bool) -> Expr {
    node(ExprKind::NullTest {
        expr: Box::new(expr),
        negated,
    })
}

/// Parse `src`, panicking with the rendered error on failure.
///
/// # Panics
/// Panics if `src` is not valid TEL.
#[track_caller]
#[must_use]
pub fn parse_ok(src: &str) -> Expr {
    parse(src).unwrap_or_else(|e| panic!("source {src:?} failed: {e}"))
}

/// Parse `src`, expecting failure.
///
/// # Panics
/// Panics if `src` parses.
#[track_caller]
#[must_use]
pub fn parse_err(src: &str) -> TelError {
    match parse(src) {
        Ok(expr) => panic!("source {src:?} parsed as {}", expr.to_sexpr()),
        Err(e) => e,
    }
}

/// Assert that `src` parses into the same shape as `expected`, ignoring
/// spans.
///
/// # Panics
/// Panics if parsing fails or the trees differ.
#[track_caller]
pub fn assert_parses_to(src: &str, expected: &Expr) {
    assert_eq!(parse_ok(src).to_sexpr(), expected.to_sexpr(), "source {src:?}");
}

/// Assert that `src` fails with a [`TelError::Parse`] expecting `expected`
/// at byte `offset`.
///
/// # Panics
/// Panics if `src` parses or fails differently.
#[track_caller]
pub fn assert_parse_error(src: &str, expected: Expected, found: SyntaxKind, offset: usize) {
    match parse_err(src) {
        TelError::Parse(err) => {
            assert_eq!(err.expected, expected, "source {src:?}: {err}");
            assert_eq!(err.found, found, "source {src:?}: {err}");
            assert_eq!(err.position.offset, offset, "source {src:?}: {err}");
        }
        other => panic!("source {src:?}: expected parse error, got {other:?}"),
    }
}

/// Assert that `src` fails in the lexer with `kind` at byte `offset`.
///
/// # Panics
/// Panics if `src` lexes or fails differently.
#[track_caller]
pub fn assert_lex_error(src: &str, kind: LexErrorKind, offset: usize) {
    match parse_err(src) {
        TelError::Lex(err) => {
            assert_eq!(err.kind, kind, "source {src:?}: {err}");
            assert_eq!(err.position.offset, offset, "source {src:?}: {err}");
        }
        other => panic!("source {src:?}: expected lex error, got {other:?}"),
    }
}
