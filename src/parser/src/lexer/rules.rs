//! The rules of the lexical grammar
//!
//! The scanner walks the input one character at a time, in one of four modes.
//! Text is collected into a buffer, and each time the buffer is flushed the
//! text becomes one raw token for the [`Vocabulary`][super::Vocabulary] to
//! classify.

use std::{iter::Peekable, str::Chars};

/// What the scanner is in the middle of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    Quoted(char),
    Number { seen_dot: bool },
}

/// Splits input into raw token text.
pub(crate) struct Scanner<'i, 's> {
    chars: Peekable<Chars<'i>>,
    special_chars: &'s [char],
    mode: Mode,
    buffer: String,
    raw: Vec<String>,
}

impl<'i, 's> Scanner<'i, 's> {
    pub(crate) fn new(input: &'i str, special_chars: &'s [char]) -> Self {
        Scanner {
            chars: input.chars().peekable(),
            special_chars,
            mode: Mode::Normal,
            buffer: String::new(),
            raw: Vec::new(),
        }
    }

    /// Scan all the input, returning the raw text of each token in order.
    pub(crate) fn scan(mut self) -> Vec<String> {
        while let Some(c) = self.peek() {
            match self.mode {
                Mode::Normal => self.normal(c),
                Mode::Quoted(quote) => self.quoted(c, quote),
                Mode::Number { seen_dot } => self.number(c, seen_dot),
            }
        }

        self.flush();
        self.raw
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    /// Append the next character to the buffer.
    fn take(&mut self) {
        if let Some(c) = self.advance() {
            self.buffer.push(c);
        }
    }

    /// Emit whatever is in the buffer as a token. Does nothing if the buffer
    /// is empty.
    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.raw.push(std::mem::take(&mut self.buffer));
        }
    }

    fn normal(&mut self, c: char) {
        if c.is_whitespace() {
            self.flush();
            self.advance();
        } else if c == '\'' || c == '"' {
            self.mode = Mode::Quoted(c);
            self.take();
        } else if c.is_ascii_digit() {
            self.flush();
            self.mode = Mode::Number { seen_dot: false };
            self.take();
        } else if self.special_chars.contains(&c) {
            self.flush();
            self.take();
            self.flush();
        } else {
            self.take();
        }
    }

    fn quoted(&mut self, c: char, quote: char) {
        self.take();

        if c == '\\' {
            // The escaped character is kept as is, whatever it is.
            self.take();
        } else if c == quote {
            self.flush();
            self.mode = Mode::Normal;
        }
    }

    /// Anything which doesn't continue the number is left for the normal
    /// rules to deal with.
    fn number(&mut self, c: char, seen_dot: bool) {
        if c.is_ascii_digit() {
            self.take();
        } else if c == '.' && !seen_dot {
            self.mode = Mode::Number { seen_dot: true };
            self.take();
        } else {
            self.flush();
            self.mode = Mode::Normal;
        }
    }
}
