//! `rowan` integration and TEL syntax kinds.
//!
//! This module defines the `SyntaxKind` enum covering every token the lexer
//! emits and the node kinds used by the lossless syntax tree. The
//! `TelLanguage` newtype implements `rowan::Language` using conversions
//! provided by `num_derive`.

use std::fmt;

use num_derive::{FromPrimitive as FromPrimitiveDerive, ToPrimitive as ToPrimitiveDerive};
use num_traits::{FromPrimitive, ToPrimitive};
use rowan::Language as RowanLanguage;
use rowan::SyntaxKind as RowanSyntaxKind;

/// Every possible token or node in the TEL syntax tree.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitiveDerive, ToPrimitiveDerive,
)]
#[repr(u16)]
#[expect(non_camel_case_types, reason = "kind names mirror the T_/K_/N_ prefixes used in diagnostics")]
pub enum SyntaxKind {
    // Tokens
    T_WHITESPACE,
    T_INT,
    T_REAL,
    T_WORD,
    T_STRING,
    T_SINGLE_QUOTED,
    T_LPAREN,
    T_RPAREN,
    T_PIPE,
    T_COLON,
    T_COMMA,
    T_EQEQ,
    T_NEQ,
    T_GT,
    T_LT,
    T_GTE,
    T_LTE,
    T_PLUS,
    T_MINUS,
    T_STAR,
    T_SLASH,
    T_QUESTION,
    T_EOF,
    // Keywords
    K_TRUE,
    K_FALSE,
    K_NOT,
    K_IS,
    K_NULL,
    K_AND,
    K_OR,
    // Nodes
    N_ROOT,
    N_BINARY_EXPR,
    N_NOT_EXPR,
    N_NULL_TEST,
    N_LITERAL,
    N_CALL,
    N_TAXON,
    // Special
    N_ERROR,
}

impl SyntaxKind {
    /// Whether the kind is trivia that the parser never sees.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::T_WHITESPACE)
    }

    /// Whether the kind is one of the exact-casing keywords.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::K_TRUE
                | Self::K_FALSE
                | Self::K_NOT
                | Self::K_IS
                | Self::K_NULL
                | Self::K_AND
                | Self::K_OR
        )
    }

    /// Short human-readable label used in diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::T_WHITESPACE => "whitespace",
            Self::T_INT => "integer",
            Self::T_REAL => "real number",
            Self::T_WORD => "word",
            Self::T_STRING => "string constant",
            Self::T_SINGLE_QUOTED => "single-quoted element",
            Self::T_LPAREN => "'('",
            Self::T_RPAREN => "')'",
            Self::T_PIPE => "'|'",
            Self::T_COLON => "':'",
            Self::T_COMMA => "','",
            Self::T_EQEQ => "'=='",
            Self::T_NEQ => "'!='",
            Self::T_GT => "'>'",
            Self::T_LT => "'<'",
            Self::T_GTE => "'>='",
            Self::T_LTE => "'<='",
            Self::T_PLUS => "'+'",
            Self::T_MINUS => "'-'",
            Self::T_STAR => "'*'",
            Self::T_SLASH => "'/'",
            Self::T_QUESTION => "'?'",
            Self::T_EOF => "end of input",
            Self::K_TRUE | Self::K_FALSE => "boolean",
            Self::K_NOT => "'not'",
            Self::K_IS => "'is'",
            Self::K_NULL => "'null'",
            Self::K_AND => "'and'",
            Self::K_OR => "'or'",
            Self::N_ROOT
            | Self::N_BINARY_EXPR
            | Self::N_NOT_EXPR
            | Self::N_NULL_TEST
            | Self::N_LITERAL
            | Self::N_CALL
            | Self::N_TAXON => "expression",
            Self::N_ERROR => "error",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Newtype wrapper allowing `rowan` to store `SyntaxKind` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TelLanguage;

impl RowanLanguage for TelLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: RowanSyntaxKind) -> Self::Kind {
        SyntaxKind::from_u16(raw.0).unwrap_or(SyntaxKind::N_ERROR)
    }

    fn kind_to_raw(kind: Self::Kind) -> RowanSyntaxKind {
        RowanSyntaxKind(
            kind.to_u16()
                .unwrap_or_else(|| unreachable!("all SyntaxKind variants map to u16")),
        )
    }
}

/// A node in the TEL syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<TelLanguage>;
