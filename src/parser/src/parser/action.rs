//! Transition actions

use std::{fmt, rc::Rc};

use crate::{lexer::TokenCursor, Error};

type Fold<R> = dyn Fn(&str, R) -> R;
type TryFold<R> = dyn Fn(&str, R) -> Result<R, Error>;
type CursorFold<R> = dyn Fn(&str, R, &mut TokenCursor) -> Result<R, Error>;

/// What to do with the result when a transition is taken.
///
/// Actions are given the text of the token that was matched and the result so
/// far, and return the new result. Actions are cheap to clone, so one action
/// can be shared by several transitions.
pub struct Action<R>(Rc<Kind<R>>);

enum Kind<R> {
    Fold(Box<Fold<R>>),
    TryFold(Box<TryFold<R>>),
    WithCursor(Box<CursorFold<R>>),
}

impl<R> Action<R> {
    /// An action which can't fail.
    pub fn fold(f: impl Fn(&str, R) -> R + 'static) -> Self {
        Action(Rc::new(Kind::Fold(Box::new(f))))
    }

    /// An action which can fail, ending the run.
    pub fn try_fold(
        f: impl Fn(&str, R) -> Result<R, Error> + 'static,
    ) -> Self {
        Action(Rc::new(Kind::TryFold(Box::new(f))))
    }

    /// An action which is also handed the cursor, so it can consume more
    /// tokens itself. The engine carries on from wherever the action leaves
    /// the cursor.
    pub fn with_cursor(
        f: impl Fn(&str, R, &mut TokenCursor) -> Result<R, Error> + 'static,
    ) -> Self {
        Action(Rc::new(Kind::WithCursor(Box::new(f))))
    }

    pub(crate) fn apply(
        &self,
        text: &str,
        result: R,
        cursor: &mut TokenCursor,
    ) -> Result<R, Error> {
        match self.0.as_ref() {
            Kind::Fold(f) => Ok(f(text, result)),
            Kind::TryFold(f) => f(text, result),
            Kind::WithCursor(f) => f(text, result, cursor),
        }
    }
}

impl<R> Clone for Action<R> {
    fn clone(&self) -> Self {
        Action(Rc::clone(&self.0))
    }
}

impl<R> fmt::Debug for Action<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.0.as_ref() {
            Kind::Fold(_) => "fold",
            Kind::TryFold(_) => "try_fold",
            Kind::WithCursor(_) => "with_cursor",
        };
        write!(f, "Action({})", kind)
    }
}
