//! Core Pratt parser implementation and entry point.
//!
//! This module defines the [`Pratt`] struct and [`parse_tokens`], which runs
//! it over a token slice and insists the whole input is consumed.

use crate::error::TelError;
use crate::parser::ast::Expr;
use crate::parser::token_stream::TokenStream;
use crate::Token;

pub(super) struct Pratt<'t, 'src> {
    pub(super) ts: TokenStream<'t, 'src>,
    depth: usize,
    max_depth: usize,
}

/// Parse a complete expression from `tokens`.
///
/// `tokens` must come from [`crate::tokenize`]; everything up to the `T_EOF`
/// terminator has to belong to a single expression.
///
/// # Errors
/// Returns the first syntax error, [`TelError::TrailingInput`] when tokens
/// remain after the expression, or [`TelError::NestingTooDeep`] once nesting
/// exceeds `max_depth`.
pub(crate) fn parse_tokens(tokens: &[Token<'_>], max_depth: usize) -> Result<Expr, TelError> {
    let mut parser = Pratt::new(tokens, max_depth);
    let expr = parser.parse_expr(0)?;
    parser.expect_end()?;
    Ok(expr)
}

impl<'t, 'src> Pratt<'t, 'src> {
    #[must_use]
    pub(super) fn new(tokens: &'t [Token<'src>], max_depth: usize) -> Self {
        Self {
            ts: TokenStream::new(tokens),
            depth: 0,
            max_depth,
        }
    }

    /// Parse an expression whose operators bind at least as tightly as
    /// `min_bp`.
    ///
    /// Each call counts as one nesting level; chains of same-level operators
    /// are folded in a loop and do not nest.
    pub(super) fn parse_expr(&mut self, min_bp: u8) -> Result<Expr, TelError> {
        self.enter()?;
        let result = self
            .parse_prefix()
            .and_then(|lhs| self.parse_infix(lhs, min_bp));
        self.depth -= 1;
        result
    }

    fn enter(&mut self) -> Result<(), TelError> {
        if self.depth >= self.max_depth {
            let position = self.ts.peek().position;
            log::trace!("nesting limit {} reached at {position:?}", self.max_depth);
            return Err(TelError::NestingTooDeep {
                position,
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn expect_end(&self) -> Result<(), TelError> {
        if self.ts.at_eof() {
            return Ok(());
        }
        let tok = self.ts.peek();
        Err(TelError::TrailingInput {
            position: tok.position,
            found: tok.kind,
            text: tok.text.to_string(),
        })
    }
}
