//! # Tokens
//!
//! Each token is an individual lexeme in the input, the smallest unit a
//! grammar's state table deals with.
//!
//! Tokens provide both the raw text they were scanned from, and the `Kind`
//! the [`Vocabulary`][crate::lexer::Vocabulary] classified them as. Tokens are
//! always concrete: the wildcard descriptors grammars place into their state
//! tables are [`Matcher`][crate::matcher::Matcher]s, not tokens.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// An individual lexeme.
#[derive(Debug, Clone, Eq)]
pub struct Token {
    /// The semantic kind of thing the token is. See `Kind` for more.
    pub(crate) kind: Kind,

    /// The body of the token, as classified. This is the raw scanned text,
    /// except that keywords are upper-cased.
    pub(crate) value: String,
}

impl Token {
    /// Create a new token of some kind.
    pub fn new(kind: Kind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    /// A keyword, e.g. `SELECT`.
    pub fn keyword(value: impl Into<String>) -> Self {
        Token::new(Kind::Keyword, value)
    }

    /// An operator, e.g. `<=`.
    pub fn operator(value: impl Into<String>) -> Self {
        Token::new(Kind::Operator, value)
    }

    /// A single character token, e.g. `;`.
    pub fn char(value: impl Into<String>) -> Self {
        Token::new(Kind::Char, value)
    }

    /// An identifier, e.g. `employee`.
    pub fn identifier(value: impl Into<String>) -> Self {
        Token::new(Kind::Identifier, value)
    }

    /// The kind of token this is.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The text of the token.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Does this token's value equal `text`, using the comparison rules of
    /// its kind?
    pub fn value_eq(&self, text: &str) -> bool {
        if self.kind.is_exact() {
            self.value.eq_ignore_ascii_case(text)
        } else {
            self.value == text
        }
    }

    /// Take the value, dropping the kind.
    pub fn into_value(self) -> String {
        self.value
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Token) -> bool {
        self.kind == other.kind && self.value_eq(&other.value)
    }
}

// Must agree with `PartialEq`, so exact kinds hash case-folded.
impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        if self.kind.is_exact() {
            self.value.to_ascii_uppercase().hash(state);
        } else {
            self.value.hash(state);
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A [`Token`]'s kind is the classification the vocabulary gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Words registered by the grammar as keywords. Matched without regard
    /// to case.
    Keyword,
    /// Symbols (or words) registered by the grammar as operators.
    Operator,
    /// Single characters registered by the grammar, usually punctuation.
    Char,

    /// Anything else, like `foo`. Note that this is the fallback, so it's not
    /// a promise the text is a well-formed identifier.
    Identifier,
    /// Numbers like `12` or `3.25`.
    NumericString,
    /// Quoted strings like `'hello'` or `"it\"s"`, quotes included.
    CharString,
    /// The literals `true` and `false`.
    BooleanString,
}

impl Kind {
    /// The user-facing name of this kind of token.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Keyword => "keyword",
            Kind::Operator => "operator",
            Kind::Char => "character",
            Kind::Identifier => "identifier",
            Kind::NumericString => "number",
            Kind::CharString => "string",
            Kind::BooleanString => "boolean",
        }
    }

    /// Is this a kind whose tokens are compared by exact value, rather than
    /// by a pattern?
    pub fn is_exact(&self) -> bool {
        matches!(self, Kind::Keyword | Kind::Operator | Kind::Char)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
