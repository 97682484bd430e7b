//! Matchers decide which tokens a transition accepts.
//!
//! Grammars never put [`Token`]s directly into a state table. Instead they use
//! a [`Matcher`], which is either an exact token (as returned when registering
//! with a [`Vocabulary`][crate::lexer::Vocabulary]), one of the built-in
//! [`Pattern`]s, or a combination of other matchers.
//!
//! Every matcher has a label, which is what shows up when a state table is
//! printed. Two matchers are equal when they describe the same thing, so two
//! separately built `Pattern::Identifier` matchers are equal, and regex
//! patterns are equal when their sources are.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{lexer::Token, Error};

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("identifier pattern")
});

static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("numeric pattern")
});

static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("integer pattern"));

/// Something that accepts or rejects tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
    /// Accepts every token.
    Any,
    /// Accepts tokens with this value, ignoring ASCII case.
    Exact(Token),
    /// Accepts tokens whose raw text fits a pattern.
    Pattern(Pattern),
    /// Accepts a token if any of the members do.
    AnyOf(Vec<Matcher>),
    /// Accepts exactly the tokens the inner matcher rejects.
    Not(Box<Matcher>),
}

impl Matcher {
    /// Accepts identifiers, like `foo_2`.
    pub const IDENTIFIER: Matcher = Matcher::Pattern(Pattern::Identifier);

    /// Accepts numbers, like `12` or `3.25`.
    pub const NUMERIC: Matcher = Matcher::Pattern(Pattern::Numeric);

    /// Accepts whole numbers only.
    pub const ANY_INTEGER: Matcher = Matcher::Pattern(Pattern::AnyInteger);

    /// Accepts properly closed quoted strings.
    pub const CHAR_STRING: Matcher = Matcher::Pattern(Pattern::CharString);

    /// Accepts `true` and `false`.
    pub const BOOLEAN: Matcher = Matcher::Pattern(Pattern::Boolean);

    /// A matcher for tokens whose whole raw text matches `source`.
    pub fn regex(source: &str) -> Result<Matcher, Error> {
        Ok(Matcher::Pattern(Pattern::Regex(RegexPattern::new(source)?)))
    }

    /// A matcher accepting anything any of `members` accept.
    pub fn any_of(members: impl IntoIterator<Item = Matcher>) -> Matcher {
        Matcher::AnyOf(members.into_iter().collect())
    }

    /// A matcher accepting anything `inner` rejects.
    pub fn negate(inner: Matcher) -> Matcher {
        Matcher::Not(Box::new(inner))
    }

    /// Does this matcher accept the token?
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            Matcher::Any => true,
            Matcher::Exact(exact) => exact.value.eq_ignore_ascii_case(&token.value),
            Matcher::Pattern(pattern) => pattern.matches(&token.value),
            Matcher::AnyOf(members) => members.iter().any(|m| m.matches(token)),
            Matcher::Not(inner) => !inner.matches(token),
        }
    }

    /// The label used when printing state tables.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl From<Token> for Matcher {
    fn from(token: Token) -> Matcher {
        Matcher::Exact(token)
    }
}

impl From<Pattern> for Matcher {
    fn from(pattern: Pattern) -> Matcher {
        Matcher::Pattern(pattern)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Matcher::Any => write!(f, "MATCH_ANY"),
            Matcher::Exact(token) => write!(f, "{}", token.value),
            Matcher::Pattern(pattern) => write!(f, "{}", pattern),
            Matcher::AnyOf(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i != 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
            Matcher::Not(inner) => write!(f, "negated({})", inner),
        }
    }
}

/// The built-in patterns.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// `[A-Za-z][A-Za-z0-9_]*`
    Identifier,
    /// `[0-9]+(\.[0-9]+)?`
    Numeric,
    /// `[0-9]+`
    AnyInteger,
    /// A single or double quoted string, closed by the same kind of quote.
    CharString,
    /// `true` or `false`.
    Boolean,
    /// A caller supplied regular expression.
    Regex(RegexPattern),
}

impl Pattern {
    /// Does the raw text of a token fit this pattern?
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Identifier => IDENTIFIER.is_match(text),
            Pattern::Numeric => NUMERIC.is_match(text),
            Pattern::AnyInteger => INTEGER.is_match(text),
            Pattern::CharString => is_closed_string(text),
            Pattern::Boolean => text == "true" || text == "false",
            Pattern::Regex(regex) => regex.is_match(text),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Pattern::Identifier => write!(f, "Identifier"),
            Pattern::Numeric => write!(f, "NumericString"),
            Pattern::AnyInteger => write!(f, "NumericString.ANY_INTEGER"),
            Pattern::CharString => write!(f, "CharString"),
            Pattern::Boolean => write!(f, "BooleanString"),
            Pattern::Regex(regex) => write!(f, "Regex: {}", regex.source()),
        }
    }
}

/// A compiled regular expression which must match a token's whole text.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    source: String,
    regex: Regex,
}

impl RegexPattern {
    /// Compile a pattern. The source is anchored at both ends.
    pub fn new(source: &str) -> Result<Self, Error> {
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(RegexPattern {
            source: source.to_owned(),
            regex,
        })
    }

    /// The pattern as it was given, without anchors.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for RegexPattern {
    fn eq(&self, other: &RegexPattern) -> bool {
        self.source == other.source
    }
}

/// Is `text` a quoted string that's closed by an unescaped quote of the kind
/// it was opened with, and nowhere before that?
fn is_closed_string(text: &str) -> bool {
    let mut chars = text.chars();

    let quote = match chars.next() {
        Some(q @ ('\'' | '"')) => q,
        _ => return false,
    };

    while let Some(c) = chars.next() {
        if c == '\\' {
            if chars.next().is_none() {
                return false;
            }
        } else if c == quote {
            return chars.next().is_none();
        }
    }

    false
}
