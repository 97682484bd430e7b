//! Assignment statements, where the state table itself walks the right hand
//! side and feeds it to an [`ExpressionBuilder`].
//!
//! Only the arithmetic operators are accepted by the table, but the builder
//! knows the full set.

use std::fmt;

use parser::{
    expression::{Expression, ExpressionBuilder},
    lexer::{Lexer, Vocabulary},
    parser::Action,
    Grammar, Matcher, Parser,
};

use crate::assignment::{register_operators, SPECIAL_CHARS};

/// The state reached when the statement is complete.
pub const DONE: usize = 999;

#[derive(Debug, Clone)]
pub struct BuilderStatement {
    pub target: String,
    pub builder: ExpressionBuilder<String>,
    pub tree: Expression<String>,
}

impl BuilderStatement {
    pub fn new() -> Self {
        BuilderStatement {
            target: String::new(),
            builder: ExpressionBuilder::default(),
            tree: Expression::empty(),
        }
    }
}

impl Default for BuilderStatement {
    fn default() -> Self {
        BuilderStatement::new()
    }
}

impl fmt::Display for BuilderStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.tree)
    }
}

/// The builder assignment grammar.
pub struct BuilderAssignment;

impl Grammar for BuilderAssignment {
    type Output = BuilderStatement;

    fn parser() -> Parser<BuilderStatement> {
        let mut vocabulary = Vocabulary::new();
        let equals = vocabulary.char('=');
        let semicolon = vocabulary.char(';');
        let open = vocabulary.char('(');
        let close = vocabulary.char(')');
        register_operators(&mut vocabulary);

        let arithmetic = Matcher::any_of(
            ["+", "-", "*", "/", "%"]
                .into_iter()
                .map(|op| vocabulary.operator(op)),
        );

        let lexer = Lexer::new(vocabulary).with_special_chars(SPECIAL_CHARS);

        let push = Action::fold(|text, mut statement: BuilderStatement| {
            statement.builder.add(text.to_owned());
            statement
        });

        let mut parser =
            Parser::with_initializer(lexer, BuilderStatement::new);
        parser
            .add_transition(
                0,
                Matcher::IDENTIFIER,
                1,
                Some(Action::fold(|target, mut statement: BuilderStatement| {
                    statement.target = target.to_owned();
                    statement
                })),
            )
            .add_transition(1, equals, 2, None)
            // expecting an operand
            .add_transition(2, Matcher::IDENTIFIER, 3, Some(push.clone()))
            .add_transition(2, Matcher::NUMERIC, 3, Some(push.clone()))
            .add_transition(2, open, 2, Some(push.clone()))
            // expecting an operator
            .add_transition(3, arithmetic, 2, Some(push.clone()))
            .add_transition(3, close, 3, Some(push))
            .add_transition(
                3,
                semicolon,
                DONE as isize,
                Some(Action::try_fold(|_, mut statement: BuilderStatement| {
                    statement.tree = statement.builder.evaluate()?;
                    Ok(statement)
                })),
            )
            .terminal_states([DONE]);

        parser
    }
}
