//! Expression errors

use thiserror::Error;

/// Structural problems with an expression.
///
/// These are distinct from the engine's errors, which are about tokens the
/// state table didn't expect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("expected closing parenthesis but found {found}")]
    UnclosedParenthesis { found: String },

    #[error("closing parenthesis without an opening one")]
    UnopenedParenthesis,

    #[error("missing operand after {after}")]
    MissingOperand { after: String },

    #[error("unexpected {found} after a complete expression")]
    TrailingInput { found: String },

    #[error("parentheses nested too deeply")]
    DepthExceeded,
}

/// How a missing item is described in errors.
pub(crate) const END_OF_INPUT: &str = "end of input";
