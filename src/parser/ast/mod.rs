//! Typed expression tree produced by the parser.
//!
//! The tree is a closed set of node kinds, so consumers handle every variant
//! through exhaustive matching. Rendering back to TEL lives in `render`, the
//! binding-power table in `precedence`.

mod expr;
mod precedence;
mod render;

pub use expr::{BinaryOp, Expr, ExprKind, NumberLiteral, TaxonSlug};
pub(crate) use precedence::{NOT_BP, NULL_TEST_BP, infix_binding_power};
