//! The words and symbols a grammar declares.

use std::collections::BTreeSet;

use crate::{
    lexer::{Kind, Token},
    matcher::{Matcher, Pattern},
};

/// The keywords, operators and single character tokens of a grammar.
///
/// Registering a token returns the exact [`Matcher`] to use for it in the
/// state table, and also tells the lexer how to classify the token's text.
///
/// ```
/// # use parser::lexer::{Kind, Vocabulary};
/// let mut vocabulary = Vocabulary::new();
/// let select = vocabulary.keyword("select");
///
/// assert_eq!(select.label(), "SELECT");
/// assert_eq!(vocabulary.classify("Select").kind(), Kind::Keyword);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Always upper case.
    keywords: BTreeSet<String>,
    operators: BTreeSet<String>,
    chars: BTreeSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Vocabulary::default()
    }

    /// Register a keyword. Keywords are matched without regard to case, and
    /// classified tokens are upper-cased.
    pub fn keyword(&mut self, word: &str) -> Matcher {
        let word = word.to_ascii_uppercase();
        self.keywords.insert(word.clone());
        Matcher::Exact(Token::keyword(word))
    }

    /// Register an operator.
    pub fn operator(&mut self, op: &str) -> Matcher {
        self.operators.insert(op.to_owned());
        Matcher::Exact(Token::operator(op))
    }

    /// Register a single character token. For it to be split out of the
    /// surrounding text it usually also needs to be one of the lexer's
    /// special characters.
    pub fn char(&mut self, c: char) -> Matcher {
        let text = c.to_string();
        self.chars.insert(text.clone());
        Matcher::Exact(Token::char(text))
    }

    /// Has `text` been registered as anything?
    pub fn contains(&self, text: &str) -> bool {
        self.keywords.contains(&text.to_ascii_uppercase())
            || self.operators.contains(text)
            || self.chars.contains(text)
    }

    /// Classify some raw text.
    ///
    /// Keywords are checked first, then operators, then single characters,
    /// then numbers and quoted strings. Anything else is an identifier.
    pub fn classify(&self, raw: &str) -> Token {
        let upper = raw.to_ascii_uppercase();

        if self.keywords.contains(&upper) {
            Token::keyword(upper)
        } else if self.operators.contains(raw) {
            Token::operator(raw)
        } else if self.chars.contains(raw) {
            Token::char(raw)
        } else if Pattern::Numeric.matches(raw) {
            Token::new(Kind::NumericString, raw)
        } else if is_quoted(raw) {
            Token::new(Kind::CharString, raw)
        } else {
            Token::identifier(raw)
        }
    }
}

/// Does the text start and end with the same quote? This doesn't check that
/// the string is properly closed, see [`Matcher::CHAR_STRING`] for that.
fn is_quoted(raw: &str) -> bool {
    let first = raw.chars().next();
    let last = raw.chars().last();

    raw.chars().count() >= 2
        && matches!(first, Some('\'' | '"'))
        && first == last
}
