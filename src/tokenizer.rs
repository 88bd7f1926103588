//! Lexical analysis for TEL source.
//!
//! This module exposes `tokenize` and `tokenize_with_trivia`, which convert
//! raw source text into a sequence of positioned [`Token`]s terminated by a
//! single `T_EOF` token. It uses the `logos` crate to recognise tokens by
//! maximal munch, then classifies words against a static keyword map so only
//! the exact listed spellings become keywords.

use logos::Logos;
use phf::phf_map;

use crate::SyntaxKind;
use crate::error::{LexError, LexErrorKind, TelError};

/// Byte range for a token or expression within the source.
pub type Span = std::ops::Range<usize>;

/// Location of a token in the source.
///
/// `line` and `column` are 1-based; `column` counts characters, `offset`
/// counts bytes from the start of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    const START: Self = Self {
        line: 1,
        column: 1,
        offset: 0,
    };

    /// Position reached after consuming `text` from `self`.
    fn after(mut self, text: &str) -> Self {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += text.len();
        self
    }
}

/// A single lexed token borrowing its text from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: SyntaxKind,
    pub text: &'src str,
    pub span: Span,
    pub position: Position,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r"-?[0-9]+\.[0-9]+")]
    Real,
    #[regex(r"-?[0-9]+")]
    Int,
    #[regex(r"[a-zA-Z_][a-zA-Z_0-9$]*")]
    Word,
    #[regex(r#""(\\"|[^"])*""#)]
    String,
    #[regex(r"'(\\'|[^'])*'")]
    SingleQuoted,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("|")]
    Pipe,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("||")]
    OrOr,
    #[token("&&")]
    AndAnd,
    #[token("==")]
    EqEq,
    #[token("!=")]
    Neq,
    #[token(">=")]
    Gte,
    #[token("<=")]
    Lte,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("?")]
    Question,
}

/// Maps exact keyword spellings to their `SyntaxKind`.
///
/// Only the lower-case and upper-case spellings are listed: `True` or `nOt`
/// stay plain words.
static KEYWORDS: phf::Map<&'static str, SyntaxKind> = phf_map! {
    "true" => SyntaxKind::K_TRUE,
    "TRUE" => SyntaxKind::K_TRUE,
    "false" => SyntaxKind::K_FALSE,
    "FALSE" => SyntaxKind::K_FALSE,
    "not" => SyntaxKind::K_NOT,
    "NOT" => SyntaxKind::K_NOT,
    "is" => SyntaxKind::K_IS,
    "IS" => SyntaxKind::K_IS,
    "null" => SyntaxKind::K_NULL,
    "NULL" => SyntaxKind::K_NULL,
    "and" => SyntaxKind::K_AND,
    "AND" => SyntaxKind::K_AND,
    "or" => SyntaxKind::K_OR,
    "OR" => SyntaxKind::K_OR,
};

fn keyword_kind(word: &str) -> Option<SyntaxKind> {
    KEYWORDS.get(word).copied()
}

fn classify(token: RawToken, text: &str) -> SyntaxKind {
    match token {
        RawToken::Whitespace => SyntaxKind::T_WHITESPACE,
        RawToken::Real => SyntaxKind::T_REAL,
        RawToken::Int => SyntaxKind::T_INT,
        RawToken::Word => keyword_kind(text).unwrap_or(SyntaxKind::T_WORD),
        RawToken::String => SyntaxKind::T_STRING,
        RawToken::SingleQuoted => SyntaxKind::T_SINGLE_QUOTED,
        RawToken::LParen => SyntaxKind::T_LPAREN,
        RawToken::RParen => SyntaxKind::T_RPAREN,
        RawToken::Pipe => SyntaxKind::T_PIPE,
        RawToken::Colon => SyntaxKind::T_COLON,
        RawToken::Comma => SyntaxKind::T_COMMA,
        RawToken::OrOr => SyntaxKind::K_OR,
        RawToken::AndAnd => SyntaxKind::K_AND,
        RawToken::EqEq => SyntaxKind::T_EQEQ,
        RawToken::Neq => SyntaxKind::T_NEQ,
        RawToken::Gte => SyntaxKind::T_GTE,
        RawToken::Lte => SyntaxKind::T_LTE,
        RawToken::Gt => SyntaxKind::T_GT,
        RawToken::Lt => SyntaxKind::T_LT,
        RawToken::Plus => SyntaxKind::T_PLUS,
        RawToken::Minus => SyntaxKind::T_MINUS,
        RawToken::Star => SyntaxKind::T_STAR,
        RawToken::Slash => SyntaxKind::T_SLASH,
        RawToken::Question => SyntaxKind::T_QUESTION,
    }
}

/// Describe the input `logos` rejected at `position`.
///
/// A rejected quote means the literal it opens never closes; anything else is
/// a character no rule accepts.
fn lex_error(src: &str, position: Position) -> LexError {
    let ch = src
        .get(position.offset..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or('\0');
    let kind = match ch {
        '"' | '\'' => LexErrorKind::UnterminatedLiteral(ch),
        other => LexErrorKind::UnexpectedCharacter(other),
    };
    LexError { position, kind }
}

fn tokenize_impl(src: &str) -> Result<Vec<Token<'_>>, TelError> {
    let mut lexer = RawToken::lexer(src);
    let mut position = Position::START;
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        // logos spans are contiguous, so the running position tracks `span.start`.
        debug_assert_eq!(position.offset, span.start);
        let Ok(raw) = result else {
            let err = lex_error(src, position);
            log::debug!("tokenize failed: {err}");
            return Err(err.into());
        };
        out.push(Token {
            kind: classify(raw, text),
            text,
            span,
            position,
        });
        position = position.after(text);
    }
    out.push(Token {
        kind: SyntaxKind::T_EOF,
        text: "",
        span: src.len()..src.len(),
        position,
    });
    Ok(out)
}

/// Tokenise the source, excluding whitespace.
///
/// The result always ends with exactly one `T_EOF` token, which is all an
/// empty or blank source produces.
///
/// # Examples
///
/// ```rust
/// use tel::{tokenize, SyntaxKind};
///
/// let tokens = tokenize("a + 1").expect("valid source");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [SyntaxKind::T_WORD, SyntaxKind::T_PLUS, SyntaxKind::T_INT, SyntaxKind::T_EOF]
/// );
/// ```
///
/// # Errors
/// Returns [`TelError::Lex`] on the first character that starts no token, or
/// on a quoted literal that is never closed.
pub fn tokenize(src: &str) -> Result<Vec<Token<'_>>, TelError> {
    let mut tokens = tokenize_impl(src)?;
    tokens.retain(|t| !t.kind.is_trivia());
    log::debug!("tokenized {} bytes into {} tokens", src.len(), tokens.len());
    Ok(tokens)
}

/// Tokenise the provided TEL source, keeping whitespace tokens.
///
/// Concatenating the text of every token reproduces `src`.
///
/// # Errors
/// Fails exactly when [`tokenize`] fails.
pub fn tokenize_with_trivia(src: &str) -> Result<Vec<Token<'_>>, TelError> {
    tokenize_impl(src)
}
