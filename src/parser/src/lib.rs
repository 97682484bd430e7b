//! A toolkit for writing small table-driven parsers, and a lexer.
//!
//! [`Parser`] doesn't parse a specific language. Instead a grammar is written
//! as a state table: each state has an ordered list of transitions, each with
//! a [`Matcher`] deciding which tokens it accepts, a destination state, and an
//! optional [`Action`][parser::Action] which folds the token into a result.
//! This suits command-like languages where the shape of the input is mostly
//! flat, like `SELECT a, b FROM c`.
//!
//! It scans the whole input up front with a [`Lexer`][crate::lexer::Lexer],
//! which classifies text using the keywords, operators and characters a
//! grammar registers with its [`Vocabulary`][crate::lexer::Vocabulary].
//!
//! Infix expressions don't fit well in a state table, so there are tools for
//! building expression trees with operator precedence and parentheses in the
//! [`expression`] module. An action can hand the token cursor to an
//! [`ExpressionParser`][expression::ExpressionParser] part way through a run.

pub mod error;
pub mod expression;
pub mod lexer;
pub mod matcher;
pub mod operator;
pub mod parser;

pub use crate::{
    error::Error, expression::Error as ExpressionError, matcher::Matcher,
    parser::Parser,
};

/// Implementing this trait describes a grammar's state table, so the grammar
/// can be built and used by name.
pub trait Grammar {
    /// What a successful parse produces.
    type Output;

    /// Build the grammar's parser, with its lexer and state table.
    fn parser() -> Parser<Self::Output>;

    /// Parse some input with a freshly built parser.
    ///
    /// When parsing more than once, it's cheaper to keep the result of
    /// [`Grammar::parser`] around.
    fn parse(input: &str) -> Result<Self::Output, Error> {
        Self::parser().parse(input)
    }
}
