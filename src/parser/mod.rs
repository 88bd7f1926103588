//! TEL parser entry points.
//!
//! [`parse`] turns source text into an [`ast::Expr`]; [`parse_full`]
//! additionally keeps the token sequence and a lossless `rowan` syntax tree
//! for tooling such as highlighting or formatting. Both are pure: every call
//! tokenises its own input and shares nothing with other calls.

use rowan::GreenNode;

use crate::error::TelError;
use crate::{SyntaxNode, Token, tokenize, tokenize_with_trivia};

pub mod ast;
mod cst_builder;
mod expression;
pub(crate) mod token_stream;

#[cfg(test)]
mod tests;

/// Nesting limit applied by [`parse`] and [`parse_full`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Result of [`parse_full`].
#[derive(Debug, Clone)]
pub struct Parsed<'src> {
    expr: ast::Expr,
    tokens: Vec<Token<'src>>,
    green: GreenNode,
}

impl<'src> Parsed<'src> {
    /// Access the typed expression tree.
    #[must_use]
    pub fn expr(&self) -> &ast::Expr {
        &self.expr
    }

    /// Take ownership of the expression tree.
    #[must_use]
    pub fn into_expr(self) -> ast::Expr {
        self.expr
    }

    /// Significant tokens, ending with `T_EOF`.
    #[must_use]
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// Access the `rowan` green tree.
    #[must_use]
    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// Root of the lossless syntax tree; its text equals the source.
    #[must_use]
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }
}

/// Parse a TEL expression.
///
/// # Examples
///
/// ```rust
/// let expr = tel::parse("1 + 2 * 3").expect("valid expression");
/// assert_eq!(expr.to_sexpr(), "(+ 1 (* 2 3))");
/// ```
///
/// # Errors
/// Returns the single [`TelError`] that makes `src` invalid TEL.
pub fn parse(src: &str) -> Result<ast::Expr, TelError> {
    parse_with_max_depth(src, DEFAULT_MAX_DEPTH)
}

/// Parse a TEL expression, allowing at most `max_depth` nested levels of
/// brackets, `not` operands and call arguments.
///
/// # Errors
/// As [`parse`], plus [`TelError::NestingTooDeep`] past the limit.
pub fn parse_with_max_depth(src: &str, max_depth: usize) -> Result<ast::Expr, TelError> {
    let tokens = tokenize(src)?;
    expression::parse_tokens(&tokens, max_depth).inspect_err(|e| log::debug!("parse failed: {e}"))
}

/// Parse a TEL expression, keeping its tokens and syntax tree.
///
/// # Errors
/// Fails exactly when [`parse`] fails.
pub fn parse_full(src: &str) -> Result<Parsed<'_>, TelError> {
    let all_tokens = tokenize_with_trivia(src)?;
    let tokens: Vec<Token<'_>> = all_tokens
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .cloned()
        .collect();
    let expr = expression::parse_tokens(&tokens, DEFAULT_MAX_DEPTH)
        .inspect_err(|e| log::debug!("parse failed: {e}"))?;
    let green = cst_builder::build_green_tree(&all_tokens, &expr);
    Ok(Parsed {
        expr,
        tokens,
        green,
    })
}
