//! Shared test utilities for integration tests.
//!
//! These helpers wrap the public entry points with panicking accessors. They
//! mirror a subset of the `tel::test_util` module without requiring the
//! `test-support` feature, so integration tests compile against the published
//! library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use tel::{SyntaxKind, TelError, Token, ast::Expr, parse, tokenize};

/// Parse `src`, panicking with the rendered error on failure.
#[track_caller]
#[must_use]
pub fn parse_ok(src: &str) -> Expr {
    parse(src).unwrap_or_else(|e| panic!("source {src:?} failed: {e}"))
}

/// Parse `src`, expecting failure.
#[track_caller]
#[must_use]
pub fn parse_err(src: &str) -> TelError {
    match parse(src) {
        Ok(expr) => panic!("source {src:?} parsed as {}", expr.to_sexpr()),
        Err(e) => e,
    }
}

/// Parse `src` and render it as an S-expression.
#[track_caller]
#[must_use]
pub fn sexpr(src: &str) -> String {
    parse_ok(src).to_sexpr()
}

/// Tokenise `src`, panicking on lexical errors.
#[track_caller]
#[must_use]
pub fn tokens(src: &str) -> Vec<Token<'_>> {
    tokenize(src).unwrap_or_else(|e| panic!("source {src:?} failed: {e}"))
}

/// Kinds of the significant tokens of `src`, `T_EOF` included.
#[track_caller]
#[must_use]
pub fn kinds(src: &str) -> Vec<SyntaxKind> {
    tokens(src).iter().map(|t| t.kind).collect()
}
