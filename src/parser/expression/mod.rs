//! Pratt parser for TEL expressions.
//!
//! The implementation is split across submodules for clarity: [`pratt`]
//! hosts the core parser and depth guard, [`prefix`] handles atoms and the
//! prefix `not`, [`infix`] folds binary operators and the postfix null test,
//! and [`literals`] resolves escapes in quoted literals.

mod infix;
mod literals;
mod pratt;
mod prefix;

pub(crate) use pratt::parse_tokens;
