//! Assignment statements, where the right hand side is handed off to an
//! [`ExpressionParser`] part way through the run.
//!
//! ```text
//! target = expression ;
//! ```

use std::fmt;

use log::debug;

use parser::{
    expression::{Expression, ExpressionParser},
    lexer::{Lexer, Token, Vocabulary},
    operator::OperatorTiers,
    parser::Action,
    Grammar, Matcher, Parser,
};

/// The characters split out of the input by the assignment grammars.
pub(crate) const SPECIAL_CHARS: [char; 6] = ['+', '-', '=', ';', '(', ')'];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentStatement {
    pub target: String,
    pub expression: Expression<Token>,
}

impl fmt::Display for AssignmentStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.expression)
    }
}

/// The assignment grammar.
pub struct Assignment;

impl Grammar for Assignment {
    type Output = AssignmentStatement;

    fn parser() -> Parser<AssignmentStatement> {
        let mut vocabulary = Vocabulary::new();
        let equals = vocabulary.char('=');
        let semicolon = vocabulary.char(';');
        vocabulary.char('(');
        vocabulary.char(')');
        register_operators(&mut vocabulary);

        let lexer = Lexer::new(vocabulary).with_special_chars(SPECIAL_CHARS);

        let expressions = ExpressionParser::new(OperatorTiers::default());
        let stops = vec![semicolon.clone()];

        let mut parser = Parser::new(lexer);
        parser
            .add_transition(
                0,
                Matcher::IDENTIFIER,
                1,
                Some(Action::fold(|target, _: AssignmentStatement| {
                    AssignmentStatement {
                        target: target.to_owned(),
                        expression: Expression::empty(),
                    }
                })),
            )
            .add_transition(
                1,
                equals,
                2,
                Some(Action::with_cursor(move |_, statement, cursor| {
                    let expression = expressions.parse(cursor, &stops)?;
                    debug!("right hand side is {}", expression);

                    Ok(AssignmentStatement {
                        expression,
                        ..statement
                    })
                })),
            )
            .add_transition(2, semicolon, 2, None);

        parser
    }
}

/// Register the default operators, so they're classified as operators.
pub(crate) fn register_operators(vocabulary: &mut Vocabulary) {
    for op in ["+", "-", "*", "/", "%", "<", ">", "<=", ">=", "==", "!="] {
        vocabulary.operator(op);
    }
}
