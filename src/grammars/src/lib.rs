//! Sample grammars built with the [`parser`] crate.
//!
//! - [`Select`]: a tiny SQL-like `SELECT` statement.
//! - [`Assignment`]: `target = expression;` where the expression is parsed by
//!   an [`ExpressionParser`][parser::expression::ExpressionParser] from inside
//!   a state table action.
//! - [`BuilderAssignment`]: the same statement, but the state table walks the
//!   expression itself and feeds an
//!   [`ExpressionBuilder`][parser::expression::ExpressionBuilder].
//!
//! The grammars can be picked by name with [`GrammarName`].

pub mod assignment;
pub mod builder;
pub mod select;

use std::{fmt, io, str::FromStr};

use log::info;

use parser::{lexer::Lexer, Error, Grammar, Parser};

pub use crate::{
    assignment::{Assignment, AssignmentStatement},
    builder::{BuilderAssignment, BuilderStatement},
    select::{Select, SelectCommand},
};

/// The grammars available by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarName {
    Select,
    Assignment,
    Builder,
}

impl GrammarName {
    pub const ALL: [GrammarName; 3] = [
        GrammarName::Select,
        GrammarName::Assignment,
        GrammarName::Builder,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GrammarName::Select => "select",
            GrammarName::Assignment => "assignment",
            GrammarName::Builder => "builder",
        }
    }

    /// Build the grammar's parser.
    pub fn load(&self) -> LoadedGrammar {
        info!("building the {} grammar", self);

        match self {
            GrammarName::Select => LoadedGrammar::Select(Select::parser()),
            GrammarName::Assignment => {
                LoadedGrammar::Assignment(Assignment::parser())
            }
            GrammarName::Builder => {
                LoadedGrammar::Builder(BuilderAssignment::parser())
            }
        }
    }
}

impl fmt::Display for GrammarName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grammar '{0}', expected one of: select, assignment, builder")]
pub struct UnknownGrammar(pub String);

impl FromStr for GrammarName {
    type Err = UnknownGrammar;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GrammarName::ALL
            .into_iter()
            .find(|name| name.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownGrammar(s.to_owned()))
    }
}

/// A built grammar, ready to parse with. The results are rendered as strings
/// so grammars with different outputs can be used the same way.
#[derive(Debug)]
pub enum LoadedGrammar {
    Select(Parser<SelectCommand>),
    Assignment(Parser<AssignmentStatement>),
    Builder(Parser<BuilderStatement>),
}

impl LoadedGrammar {
    pub fn parse(&self, input: &str) -> Result<String, Error> {
        match self {
            LoadedGrammar::Select(p) => p.parse(input).map(|r| r.to_string()),
            LoadedGrammar::Assignment(p) => {
                p.parse(input).map(|r| r.to_string())
            }
            LoadedGrammar::Builder(p) => p.parse(input).map(|r| r.to_string()),
        }
    }

    pub fn print_state_table<W: io::Write>(
        &self,
        out: &mut W,
    ) -> io::Result<()> {
        match self {
            LoadedGrammar::Select(p) => p.print_state_table(out),
            LoadedGrammar::Assignment(p) => p.print_state_table(out),
            LoadedGrammar::Builder(p) => p.print_state_table(out),
        }
    }

    pub fn lexer(&self) -> &Lexer {
        match self {
            LoadedGrammar::Select(p) => p.lexer(),
            LoadedGrammar::Assignment(p) => p.lexer(),
            LoadedGrammar::Builder(p) => p.lexer(),
        }
    }
}
