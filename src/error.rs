//! Diagnostics surfaced by the lexer and the parser.
//!
//! Every failure is terminal for a single parse call, so the public entry
//! points return exactly one [`TelError`]. Each variant carries the
//! [`Position`] of the offending input.

use std::fmt;

use thiserror::Error;

use crate::{Position, SyntaxKind};

/// What went wrong while splitting the source into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that starts no token.
    UnexpectedCharacter(char),
    /// A quoted literal opened with the given quote and never closed.
    UnterminatedLiteral(char),
}

/// A lexical failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} on line {}, position {}", position.line, position.column)]
pub struct LexError {
    /// Where the offending input starts.
    pub position: Position,
    /// The failure itself.
    pub kind: LexErrorKind,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => write!(f, "unexpected symbol {ch:?}"),
            Self::UnterminatedLiteral('"') => f.write_str("unterminated string constant"),
            Self::UnterminatedLiteral(_) => f.write_str("unterminated single-quoted element"),
        }
    }
}

/// Short label for the set of tokens the parser would have accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Start of an atom: literal, bracket, function call or taxon slug.
    Expression,
    /// `)` closing a bracketed expression or an argument list.
    ClosingBracket,
    /// `,` or `)` after a function argument.
    CommaOrClosingBracket,
    /// A word naming a taxon, its namespace or its tag.
    TaxonName,
    /// `null` after `is` or `is not`.
    Null,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Expression => "expression",
            Self::ClosingBracket => "closing bracket",
            Self::CommaOrClosingBracket => "',' or closing bracket",
            Self::TaxonName => "taxon name",
            Self::Null => "'null'",
        })
    }
}

/// An unexpected token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "expected {expected}, found {} on line {}, position {}",
    found_label(*found, text),
    position.line,
    position.column
)]
pub struct ParseError {
    /// Where the unexpected token starts.
    pub position: Position,
    /// What the parser was looking for.
    pub expected: Expected,
    /// Kind of the token actually found.
    pub found: SyntaxKind,
    /// Source text of the token actually found (empty at end of input).
    pub text: String,
}

/// Any failure of a single parse call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TelError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A complete expression was followed by more tokens.
    #[error(
        "unexpected trailing input {} on line {}, position {}",
        found_label(*found, text),
        position.line,
        position.column
    )]
    TrailingInput {
        position: Position,
        found: SyntaxKind,
        text: String,
    },
    /// Brackets, `not` or call arguments nest deeper than allowed.
    #[error(
        "expression nests deeper than {limit} levels on line {}, position {}",
        position.line,
        position.column
    )]
    NestingTooDeep { position: Position, limit: usize },
}

impl TelError {
    /// Position of the offending input.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Lex(e) => e.position,
            Self::Parse(e) => e.position,
            Self::TrailingInput { position, .. } | Self::NestingTooDeep { position, .. } => {
                *position
            }
        }
    }
}

fn found_label(kind: SyntaxKind, text: &str) -> String {
    if text.is_empty() {
        kind.describe().to_string()
    } else {
        format!("\"{text}\"")
    }
}
