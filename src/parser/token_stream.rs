//! Token stream utilities.
//!
//! Provides a cursor over the lexer's output for single-token-lookahead
//! parsing. The cursor never moves past the trailing `T_EOF` token, so
//! lookahead cannot run off the end of the input.
//!
//! ```ignore
//! let tokens = tokenize("f(x)")?;
//! let mut stream = TokenStream::new(&tokens);
//! assert_eq!(stream.peek_kind(), SyntaxKind::T_WORD);
//! assert_eq!(stream.peek_nth_kind(1), SyntaxKind::T_LPAREN);
//! stream.advance();
//! assert_eq!(stream.cursor(), 1);
//! ```

use crate::error::{Expected, ParseError, TelError};
use crate::{Position, SyntaxKind, Token};

#[derive(Debug)]
pub(crate) struct TokenStream<'t, 'src> {
    tokens: &'t [Token<'src>],
    cursor: usize,
    /// Returned by lookahead when `tokens` lacks its `T_EOF` terminator.
    eof: Token<'src>,
}

impl<'t, 'src> TokenStream<'t, 'src> {
    /// Constructs a new `TokenStream` over tokens produced by [`crate::tokenize`].
    ///
    /// The stream starts with the cursor at the beginning of the token slice.
    #[must_use]
    pub(crate) fn new(tokens: &'t [Token<'src>]) -> Self {
        let end = tokens.last().map_or(
            Position {
                line: 1,
                column: 1,
                offset: 0,
            },
            |t| t.position,
        );
        Self {
            tokens,
            cursor: 0,
            eof: Token {
                kind: SyntaxKind::T_EOF,
                text: "",
                span: end.offset..end.offset,
                position: end,
            },
        }
    }

    /// Returns the current cursor position within the token stream.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the token at the cursor without consuming it.
    #[must_use]
    pub(crate) fn peek(&self) -> &Token<'src> {
        self.peek_nth(0)
    }

    /// Returns the token `n` places after the cursor, or `T_EOF` past the end.
    #[must_use]
    pub(crate) fn peek_nth(&self, n: usize) -> &Token<'src> {
        self.tokens.get(self.cursor + n).unwrap_or(&self.eof)
    }

    #[must_use]
    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        self.peek().kind
    }

    #[must_use]
    pub(crate) fn peek_nth_kind(&self, n: usize) -> SyntaxKind {
        self.peek_nth(n).kind
    }

    /// Whether the cursor rests on the end of input.
    #[must_use]
    pub(crate) fn at_eof(&self) -> bool {
        self.tokens
            .get(self.cursor)
            .is_none_or(|t| t.kind == SyntaxKind::T_EOF)
    }

    /// Returns the current token and moves past it.
    ///
    /// At the end of input the cursor stays put and `T_EOF` is returned
    /// again.
    pub(crate) fn advance(&mut self) -> Token<'src> {
        let tok = self.peek().clone();
        if !self.at_eof() {
            self.cursor += 1;
        }
        tok
    }

    /// Consumes the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> Option<Token<'src>> {
        (self.peek_kind() == kind).then(|| self.advance())
    }

    /// Requires the current token to be of a specific kind.
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing `expected` and the token found.
    pub(crate) fn expect(
        &mut self,
        kind: SyntaxKind,
        expected: Expected,
    ) -> Result<Token<'src>, TelError> {
        self.eat(kind).ok_or_else(|| self.unexpected(expected))
    }

    /// Builds the error for an unexpected current token.
    #[must_use]
    pub(crate) fn unexpected(&self, expected: Expected) -> TelError {
        let found = self.peek();
        ParseError {
            position: found.position,
            expected,
            found: found.kind,
            text: found.text.to_string(),
        }
        .into()
    }
}
