//! Parsing of atoms and the prefix `not` for the Pratt parser.

use crate::SyntaxKind;
use crate::error::{Expected, TelError};
use crate::parser::ast::{Expr, ExprKind, NOT_BP, TaxonSlug};

use super::literals::literal_expr;
use super::pratt::Pratt;

impl Pratt<'_, '_> {
    pub(super) fn parse_prefix(&mut self) -> Result<Expr, TelError> {
        if let Some(lit) = literal_expr(self.ts.peek()) {
            self.ts.advance();
            return Ok(lit);
        }
        match self.ts.peek_kind() {
            SyntaxKind::K_NOT => self.parse_not(),
            SyntaxKind::T_LPAREN => self.parse_bracketed(),
            SyntaxKind::T_WORD if self.ts.peek_nth_kind(1) == SyntaxKind::T_LPAREN => {
                self.parse_call()
            }
            SyntaxKind::T_WORD | SyntaxKind::T_QUESTION => self.parse_taxon(),
            _ => Err(self.ts.unexpected(Expected::Expression)),
        }
    }

    fn parse_not(&mut self) -> Result<Expr, TelError> {
        let not = self.ts.advance();
        let operand = self.parse_expr(NOT_BP)?;
        let span = not.span.start..operand.span.end;
        Ok(Expr::new(ExprKind::Not(Box::new(operand)), span))
    }

    /// `( expr )`; the inner node's span is widened over the brackets.
    fn parse_bracketed(&mut self) -> Result<Expr, TelError> {
        let open = self.ts.advance();
        let mut inner = self.parse_expr(0)?;
        let close = self
            .ts
            .expect(SyntaxKind::T_RPAREN, Expected::ClosingBracket)?;
        inner.span = open.span.start..close.span.end;
        Ok(inner)
    }

    fn parse_call(&mut self) -> Result<Expr, TelError> {
        let name = self.ts.advance();
        self.ts.advance(); // '(' already peeked
        let mut args = Vec::new();
        let close = if let Some(close) = self.ts.eat(SyntaxKind::T_RPAREN) {
            close
        } else {
            loop {
                args.push(self.parse_expr(0)?);
                if let Some(close) = self.ts.eat(SyntaxKind::T_RPAREN) {
                    break close;
                }
                self.ts
                    .expect(SyntaxKind::T_COMMA, Expected::CommaOrClosingBracket)?;
            }
        };
        Ok(Expr::new(
            ExprKind::Call {
                name: name.text.to_string(),
                args,
            },
            name.span.start..close.span.end,
        ))
    }

    /// `[?] name [| namespace] [: tag]`.
    fn parse_taxon(&mut self) -> Result<Expr, TelError> {
        let question = self.ts.eat(SyntaxKind::T_QUESTION);
        let name = self.ts.expect(SyntaxKind::T_WORD, Expected::TaxonName)?;
        let start = question.as_ref().map_or(name.span.start, |q| q.span.start);
        let mut end = name.span.end;

        let namespace = if self.ts.eat(SyntaxKind::T_PIPE).is_some() {
            let word = self.ts.expect(SyntaxKind::T_WORD, Expected::TaxonName)?;
            end = word.span.end;
            Some(word.text.to_string())
        } else {
            None
        };
        let tag = if self.ts.eat(SyntaxKind::T_COLON).is_some() {
            let word = self.ts.expect(SyntaxKind::T_WORD, Expected::TaxonName)?;
            end = word.span.end;
            Some(word.text.to_string())
        } else {
            None
        };

        Ok(Expr::new(
            ExprKind::Taxon(TaxonSlug {
                optional: question.is_some(),
                name: name.text.to_string(),
                namespace,
                tag,
            }),
            start..end,
        ))
    }
}
