//! A cursor over the scanned tokens.

use crate::lexer::Token;

/// The tokens produced by a [`Lexer`][crate::lexer::Lexer], and a position
/// in them.
///
/// The cursor can move forward and back, and tokens can be pushed back in
/// front of it. The parsing engine and the expression parser share one cursor
/// during a run, so whatever one consumes the other doesn't see.
///
/// ```
/// # use parser::lexer::{Token, TokenCursor};
/// let mut cursor = TokenCursor::new(vec![Token::identifier("a")]);
/// assert!(cursor.has_next());
/// let a = cursor.next().unwrap();
/// assert!(!cursor.has_next());
/// cursor.push_back(a);
/// assert_eq!(cursor.peek().map(Token::value), Some("a"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenCursor {
            tokens,
            position: 0,
        }
    }

    /// Are there tokens left ahead of the cursor?
    pub fn has_next(&self) -> bool {
        self.position < self.tokens.len()
    }

    /// The next token, without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Is there a token behind the cursor?
    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Move back one token, returning it.
    pub fn previous(&mut self) -> Option<&Token> {
        if self.has_previous() {
            self.position -= 1;
            self.tokens.get(self.position)
        } else {
            None
        }
    }

    /// Insert a token at the cursor, so it's the next one consumed.
    pub fn push_back(&mut self, token: Token) {
        self.tokens.insert(self.position, token);
    }

    /// The number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The tokens which haven't been consumed yet.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.position..]
    }

    /// All the tokens, consumed or not.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Iterator for TokenCursor {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned()?;
        self.position += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.tokens.len() - self.position;
        (n, Some(n))
    }
}

impl From<Vec<Token>> for TokenCursor {
    fn from(tokens: Vec<Token>) -> Self {
        TokenCursor::new(tokens)
    }
}
