//! Infix operator handling for the Pratt parser.
//!
//! Binary operators and the postfix `is [not] null` test share one loop, so a
//! null test applies to everything folded so far and further operators may
//! follow it.

use crate::SyntaxKind;
use crate::error::{Expected, TelError};
use crate::parser::ast::{Expr, ExprKind, NULL_TEST_BP, infix_binding_power};

use super::pratt::Pratt;

impl Pratt<'_, '_> {
    pub(super) fn parse_infix(&mut self, mut lhs: Expr, min_bp: u8) -> Result<Expr, TelError> {
        loop {
            let kind = self.ts.peek_kind();
            if kind == SyntaxKind::K_IS {
                if NULL_TEST_BP < min_bp {
                    break;
                }
                lhs = self.parse_null_test(lhs)?;
                continue;
            }
            let Some((l_bp, r_bp, op)) = infix_binding_power(kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            self.ts.advance();
            let rhs = self.parse_expr(r_bp)?;
            let span = lhs.span.start..rhs.span.end;
            lhs = Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }
        Ok(lhs)
    }

    fn parse_null_test(&mut self, expr: Expr) -> Result<Expr, TelError> {
        self.ts.advance(); // 'is' already peeked
        let negated = self.ts.eat(SyntaxKind::K_NOT).is_some();
        let null = self.ts.expect(SyntaxKind::K_NULL, Expected::Null)?;
        let span = expr.span.start..null.span.end;
        Ok(Expr::new(
            ExprKind::NullTest {
                expr: Box::new(expr),
                negated,
            },
            span,
        ))
    }
}
