//! The table-driven parsing engine.

mod action;
mod table;

use std::{collections::BTreeSet, fmt, io};

use log::trace;

use crate::{
    error::Error,
    lexer::{Lexer, TokenCursor},
    matcher::Matcher,
};

pub use crate::parser::{
    action::Action,
    table::{StateTable, Transition},
};

/// A finite state machine which folds tokens into a result of type `R`.
///
/// A run starts in state `0` with a fresh result from the initializer. Each
/// token is checked against the current state's transitions in the order they
/// were added, and the first one which matches is taken: its action (if any)
/// updates the result, and the machine moves to the destination state. The run
/// ends when the tokens run out, or when a terminal state is reached.
///
/// # Example
///
/// ```
/// # use parser::{lexer::{Lexer, Vocabulary}, matcher::Matcher};
/// # use parser::parser::{Action, Parser};
/// let mut vocabulary = Vocabulary::new();
/// let plus = vocabulary.operator("+");
///
/// let mut parser = Parser::new(Lexer::new(vocabulary));
/// parser
///     .add_transition(0, Matcher::NUMERIC, 1, Some(Action::fold(add)))
///     .add_transition(1, plus, 0, None);
///
/// fn add(text: &str, sum: u32) -> u32 {
///     sum + text.parse::<u32>().unwrap_or(0)
/// }
///
/// assert_eq!(parser.parse("1 + 2 + 3").unwrap(), 6);
/// ```
pub struct Parser<R> {
    lexer: Lexer,
    table: StateTable<R>,
    terminal_states: BTreeSet<usize>,
    initializer: Box<dyn Fn() -> R>,
}

impl<R: Default + 'static> Parser<R> {
    /// Create a parser whose results start as `R::default()`.
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_initializer(lexer, R::default)
    }
}

impl<R> Parser<R> {
    /// Create a parser whose results start as whatever `initializer`
    /// returns. It's called once at the start of each run.
    pub fn with_initializer(
        lexer: Lexer,
        initializer: impl Fn() -> R + 'static,
    ) -> Self {
        Parser {
            lexer,
            table: StateTable::new(),
            terminal_states: BTreeSet::new(),
            initializer: Box::new(initializer),
        }
    }

    /// Add a transition out of `state`. A negative `next` state means taking
    /// this transition is an error.
    ///
    /// Transitions can be added to states in any order.
    pub fn add_transition(
        &mut self,
        state: usize,
        matcher: impl Into<Matcher>,
        next: isize,
        action: Option<Action<R>>,
    ) -> &mut Self {
        let transition = Transition::new(matcher.into(), next, action);
        self.table.add(state, transition);
        self
    }

    /// Mark states as terminal. Reaching one ends the run successfully, even
    /// if there are tokens left.
    pub fn terminal_states(
        &mut self,
        states: impl IntoIterator<Item = usize>,
    ) -> &mut Self {
        self.terminal_states.extend(states);
        self
    }

    pub fn is_terminal(&self, state: usize) -> bool {
        self.terminal_states.contains(&state)
    }

    pub fn table(&self) -> &StateTable<R> {
        &self.table
    }

    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    /// Break some input into tokens, using this parser's lexer.
    pub fn tokenize(&self, input: &str) -> TokenCursor {
        self.lexer.tokenize(input)
    }

    /// Tokenize and then run the input.
    pub fn parse(&self, input: &str) -> Result<R, Error> {
        let mut cursor = self.tokenize(input);
        self.run(&mut cursor)
    }

    /// Run the state machine over the tokens left in `cursor`.
    pub fn run(&self, cursor: &mut TokenCursor) -> Result<R, Error> {
        let mut result = (self.initializer)();
        let mut state = 0;

        while let Some(token) = cursor.next() {
            let (index, transition) = self
                .table
                .transitions(state)
                .iter()
                .enumerate()
                .find(|(_, t)| t.matcher().matches(&token))
                .ok_or_else(|| Error::NoMatch {
                    token: token.value().to_owned(),
                    state,
                })?;

            let next = transition.next_state().ok_or_else(|| {
                Error::NoNextState {
                    token: token.value().to_owned(),
                    state,
                }
            })?;

            trace!(
                "state {}: '{}' matched transition {} ({}) to {}",
                state,
                token,
                index,
                transition.matcher(),
                next
            );

            if let Some(action) = transition.action() {
                result = action.apply(token.value(), result, cursor)?;
            }

            state = next;

            if self.is_terminal(state) {
                trace!("reached terminal state {}", state);
                return Ok(result);
            }
        }

        trace!("ran out of tokens in state {}", state);
        Ok(result)
    }

    /// Write the table out, one transition per line.
    pub fn print_state_table<W: io::Write>(
        &self,
        out: &mut W,
    ) -> io::Result<()> {
        for (state, transition) in self.table.iter() {
            writeln!(
                out,
                "{} {} {}",
                state,
                transition.matcher(),
                transition.next()
            )?;
        }
        Ok(())
    }
}

impl<R> fmt::Debug for Parser<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Parser")
            .field("lexer", &self.lexer)
            .field("states", &self.table.len())
            .field("terminal_states", &self.terminal_states)
            .finish()
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;
    use crate::lexer::Vocabulary;

    /// Collects every token it sees.
    fn collecting() -> Parser<Vec<String>> {
        let mut parser = Parser::new(Lexer::default());
        parser.add_transition(
            0,
            Matcher::Any,
            0,
            Some(Action::fold(|text, mut seen: Vec<String>| {
                seen.push(text.to_owned());
                seen
            })),
        );
        parser
    }

    #[test]
    fn empty_input() {
        assert!(collecting().parse("").unwrap().is_empty());
    }

    #[test]
    fn self_loop_consumes_everything() {
        let seen = collecting().parse("a b c").unwrap();
        assert_eq!(seen, ["a", "b", "c"]);
    }

    #[test]
    fn terminal_state_stops_early() {
        let mut parser = collecting();
        parser
            .add_transition(0, Matcher::Any, 1, None)
            .terminal_states([1]);
        // The self loop is tried first, so nothing ever reaches state 1.
        assert_eq!(parser.parse("a b").unwrap(), ["a", "b"]);

        let mut parser: Parser<Vec<String>> = Parser::new(Lexer::default());
        parser
            .add_transition(0, Matcher::Any, 1, None)
            .terminal_states([1]);
        let mut cursor = parser.tokenize("a b");
        parser.run(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn no_match() {
        let mut vocabulary = Vocabulary::new();
        let semi = vocabulary.char(';');
        let mut parser: Parser<()> =
            Parser::new(Lexer::new(vocabulary).with_special_chars([';']));
        parser.add_transition(0, semi, 0, None);

        match parser.parse(";;x") {
            Err(Error::NoMatch { token, state }) => {
                assert_eq!(token, "x");
                assert_eq!(state, 0);
            }
            other => panic!("expected no match, got {:?}", other),
        }
    }

    #[test]
    fn gap_states_have_no_transitions() {
        let mut parser: Parser<()> = Parser::new(Lexer::default());
        parser
            .add_transition(0, Matcher::Any, 1, None)
            .add_transition(2, Matcher::Any, 2, None);

        assert!(matches!(
            parser.parse("a b"),
            Err(Error::NoMatch { state: 1, .. })
        ));
    }

    #[test]
    fn negative_destination() {
        let mut parser: Parser<u8> = Parser::new(Lexer::default());
        parser.add_transition(
            0,
            Matcher::Any,
            -1,
            Some(Action::fold(|_, _| unreachable!())),
        );

        match parser.parse("a") {
            Err(Error::NoNextState { token, state }) => {
                assert_eq!(token, "a");
                assert_eq!(state, 0);
            }
            other => panic!("expected no next state, got {:?}", other),
        }
    }

    #[test]
    fn initializer_runs_per_parse() {
        let mut parser = Parser::with_initializer(Lexer::default(), || 10);
        parser.add_transition(
            0,
            Matcher::Any,
            0,
            Some(Action::fold(|_, n| n + 1)),
        );

        assert_eq!(parser.parse("a b").unwrap(), 12);
        assert_eq!(parser.parse("a").unwrap(), 11);
    }

    #[test]
    fn print_table() {
        let mut vocabulary = Vocabulary::new();
        let select = vocabulary.keyword("select");
        let mut parser: Parser<()> = Parser::new(Lexer::new(vocabulary));
        parser
            .add_transition(1, Matcher::IDENTIFIER, -1, None)
            .add_transition(0, select, 1, None);

        let mut out = Vec::new();
        parser.print_state_table(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 SELECT 1\n1 Identifier -1\n"
        );
    }
}
