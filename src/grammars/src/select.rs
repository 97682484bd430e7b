//! A tiny SQL-like `SELECT` statement.
//!
//! ```text
//! SELECT (* | column [, column]...) FROM table
//! ```

use std::fmt;

use parser::{
    lexer::{Lexer, Vocabulary},
    parser::Action,
    Grammar, Matcher, Parser,
};

/// What a `SELECT` asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectCommand {
    /// Was `*` used?
    pub project_all: bool,
    pub project_terms: Vec<String>,
    pub from_table: Option<String>,
}

impl fmt::Display for SelectCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SELECT ")?;

        let mut columns: Vec<&str> =
            self.project_terms.iter().map(String::as_str).collect();
        if self.project_all {
            columns.insert(0, "*");
        }
        write!(f, "{}", columns.join(", "))?;

        if let Some(table) = &self.from_table {
            write!(f, " FROM {}", table)?;
        }

        Ok(())
    }
}

/// The `SELECT` grammar.
pub struct Select;

impl Grammar for Select {
    type Output = SelectCommand;

    fn parser() -> Parser<SelectCommand> {
        let mut vocabulary = Vocabulary::new();
        let select = vocabulary.keyword("select");
        let from = vocabulary.keyword("from");
        let star = vocabulary.char('*');
        let comma = vocabulary.char(',');

        let lexer = Lexer::new(vocabulary).with_special_chars(['*', ',']);

        let begin = Action::fold(|_, _| SelectCommand::default());
        let all = Action::fold(|_, mut command: SelectCommand| {
            command.project_all = true;
            command
        });
        let term = Action::fold(|text, mut command: SelectCommand| {
            command.project_terms.push(text.to_owned());
            command
        });
        let table = Action::fold(|text, mut command: SelectCommand| {
            command.from_table = Some(text.to_owned());
            command
        });

        let mut parser = Parser::new(lexer);
        parser
            .add_transition(0, select, 1, Some(begin))
            // the column list
            .add_transition(1, star.clone(), 2, Some(all.clone()))
            .add_transition(1, Matcher::IDENTIFIER, 3, Some(term.clone()))
            .add_transition(2, from.clone(), 7, None)
            .add_transition(3, from.clone(), 7, None)
            .add_transition(3, Matcher::IDENTIFIER, 4, Some(term.clone()))
            .add_transition(3, comma.clone(), 1, None)
            .add_transition(4, Matcher::IDENTIFIER, 6, Some(term))
            .add_transition(4, star, 6, Some(all))
            .add_transition(5, comma.clone(), 1, None)
            .add_transition(6, from, 7, None)
            .add_transition(6, Matcher::IDENTIFIER, 5, None)
            .add_transition(6, comma, 1, None)
            // the table
            .add_transition(7, Matcher::IDENTIFIER, 8, Some(table));

        parser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let command = SelectCommand {
            project_all: false,
            project_terms: vec!["id".into(), "name".into()],
            from_table: Some("employee".into()),
        };
        assert_eq!(command.to_string(), "SELECT id, name FROM employee");
    }

    #[test]
    fn display_star() {
        let command = SelectCommand {
            project_all: true,
            project_terms: vec![],
            from_table: None,
        };
        assert_eq!(command.to_string(), "SELECT *");
    }
}
