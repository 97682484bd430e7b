//! Parser errors

use thiserror::Error;

use crate::expression;

/// Everything that can go wrong during a run.
///
/// None of these are recoverable, the first error ends the run.
#[derive(Debug, Error)]
pub enum Error {
    /// None of the current state's transitions accept the token.
    #[error("no match for token={token} in state={state}")]
    NoMatch { token: String, state: usize },

    /// The token matched a transition that doesn't lead anywhere.
    #[error("no next state for token {token}")]
    NoNextState { token: String, state: usize },

    /// An action tried to parse an expression and it was malformed.
    #[error(transparent)]
    Expression(#[from] expression::Error),

    /// A regular expression given to a matcher didn't compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
