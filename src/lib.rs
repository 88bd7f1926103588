//! Library crate for the Taxon Expression Language (TEL).
//!
//! Exposes the lexer, the expression parser and the typed syntax tree that
//! downstream evaluators walk. Evaluation itself is left to consumers.

#![forbid(unsafe_code)]

pub mod error;
pub mod language;
pub mod parser;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use error::{Expected, LexError, LexErrorKind, ParseError, TelError};
pub use language::{SyntaxKind, SyntaxNode, TelLanguage};
pub use parser::{DEFAULT_MAX_DEPTH, Parsed, ast, parse, parse_full, parse_with_max_depth};
pub use tokenizer::{Position, Span, Token, tokenize, tokenize_with_trivia};
