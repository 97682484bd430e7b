//! Lexing - converting input into [`Token`]s.
//!
//! Before the state table can be run, we need to sweep over the input and
//! break it apart into meaningful atoms called [`Token`]s. This happens in two
//! steps: the scanner splits the text apart using whitespace, quotes, numbers
//! and the grammar's special characters, and then each piece of text is
//! classified by the grammar's [`Vocabulary`].
//!
//! Lexing never fails. Text that doesn't look like anything in particular is
//! an identifier, and an unclosed quote just runs to the end of the input. It's
//! up to the state table to reject those tokens.

mod cursor;
mod rules;
mod token;
mod vocabulary;

use log::debug;

pub use crate::lexer::{
    cursor::TokenCursor,
    token::{Kind, Token},
    vocabulary::Vocabulary,
};

use crate::lexer::rules::Scanner;

/// A [`Lexer`] breaks input into classified [`Token`]s.
///
/// # Example
///
/// ```
/// # use parser::lexer::{Kind, Lexer, Vocabulary};
/// let mut vocabulary = Vocabulary::new();
/// vocabulary.char(';');
///
/// let lexer = Lexer::new(vocabulary).with_special_chars([';']);
/// let tokens = lexer.tokenize("x;");
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens.tokens()[1].kind(), Kind::Char);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    vocabulary: Vocabulary,
    special_chars: Vec<char>,
}

impl Lexer {
    /// The characters which are split out as their own tokens unless the
    /// grammar says otherwise.
    pub const DEFAULT_SPECIAL_CHARS: [char; 7] =
        [',', '.', '(', ')', '?', '{', '}'];

    /// Create a new lexer using the default special characters.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Lexer {
            vocabulary,
            special_chars: Lexer::DEFAULT_SPECIAL_CHARS.to_vec(),
        }
    }

    /// Replace the set of special characters.
    pub fn with_special_chars(
        mut self,
        chars: impl IntoIterator<Item = char>,
    ) -> Self {
        self.special_chars = chars.into_iter().collect();
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn special_chars(&self) -> &[char] {
        &self.special_chars
    }

    /// Break some input into tokens.
    pub fn tokenize(&self, input: &str) -> TokenCursor {
        let raw = Scanner::new(input, &self.special_chars).scan();
        self.classify_all(raw)
    }

    /// Classify strings which have already been split apart, one token per
    /// string.
    pub fn tokenize_strings<I, S>(&self, strings: I) -> TokenCursor
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.classify_all(strings)
    }

    fn classify_all<I, S>(&self, raw: I) -> TokenCursor
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<Token> = raw
            .into_iter()
            .map(|text| self.vocabulary.classify(text.as_ref()))
            .collect();

        debug!("lexed {} tokens", tokens.len());

        TokenCursor::new(tokens)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new(Vocabulary::default())
    }
}
