//! Grammar tests
//!
//! Each sample grammar run end to end, from text to result.

use pretty_assertions::assert_eq;

use grammars::{
    builder::DONE, Assignment, BuilderAssignment, GrammarName, Select,
    SelectCommand,
};
use parser::{Error, ExpressionError, Grammar};

#[test]
fn select_star() {
    let command = Select::parse("select * from employee").unwrap();

    assert_eq!(
        command,
        SelectCommand {
            project_all: true,
            project_terms: vec![],
            from_table: Some("employee".into()),
        }
    );
}

#[test]
fn select_columns() {
    let command = Select::parse("SELECT id,name FROM employee").unwrap();

    assert!(!command.project_all);
    assert_eq!(command.project_terms, ["id", "name"]);
    assert_eq!(command.from_table.as_deref(), Some("employee"));
}

#[test]
fn select_keywords_ignore_case() {
    let command = Select::parse("Select a , b From t").unwrap();
    assert_eq!(command.to_string(), "SELECT a, b FROM t");
}

#[test]
fn select_missing_table_is_partial() {
    let command = Select::parse("select a from").unwrap();
    assert_eq!(command.from_table, None);
}

#[test]
fn select_rejects_trailing_tokens() {
    assert!(matches!(
        Select::parse("select * from a b"),
        Err(Error::NoMatch { state: 8, .. })
    ));
}

#[test]
fn select_state_table() {
    let mut out = Vec::new();
    Select::parser().print_state_table(&mut out).unwrap();
    let table = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.first(), Some(&"0 SELECT 1"));
    assert_eq!(lines.last(), Some(&"7 Identifier 8"));
    assert!(lines.contains(&"1 * 2"));
    assert!(lines.contains(&"3 , 1"));
}

#[test]
fn assignment_single_value() {
    let statement = Assignment::parse("a = 1;").unwrap();
    assert_eq!(statement.target, "a");
    assert_eq!(statement.to_string(), "a = 1");
}

#[test]
fn assignment_expressions() {
    let cases = [
        ("a = b + c;", "b c +"),
        ("a = b + c + d;", "b c + d +"),
        ("a = b + (c + d);", "b c d + +"),
        ("x = (a - b) * c;", "a b - c *"),
    ];

    let parser = Assignment::parser();
    for (input, expected) in cases {
        let statement = parser.parse(input).unwrap();
        assert_eq!(statement.expression.to_string(), expected, "{}", input);
    }
}

#[test]
fn assignment_doubled_operator() {
    match Assignment::parse("a = b + + c;") {
        Err(Error::NoMatch { token, state }) => {
            assert_eq!(token, "c");
            assert_eq!(state, 2);
        }
        other => panic!("expected no match, got {:?}", other),
    }
}

#[test]
fn assignment_unclosed_parenthesis() {
    assert!(matches!(
        Assignment::parse("a = (b + c;"),
        Err(Error::Expression(ExpressionError::UnclosedParenthesis { .. }))
    ));
}

#[test]
fn assignment_empty_right_hand_side() {
    let statement = Assignment::parse("a = ;").unwrap();
    assert!(statement.expression.is_empty());
    assert_eq!(statement.to_string(), "a = ");
}

#[test]
fn builder_assignment() {
    let cases = [
        ("a = 1;", "1"),
        ("a = b + c;", "b c +"),
        ("a = b + c + d;", "b c + d +"),
        ("a = b + (c + d);", "b c d + +"),
        ("a = b * c - d / e;", "b c * d e / -"),
    ];

    let parser = BuilderAssignment::parser();
    for (input, expected) in cases {
        let statement = parser.parse(input).unwrap();
        assert_eq!(statement.target, "a");
        assert_eq!(statement.tree.to_string(), expected, "{}", input);
    }
}

#[test]
fn builder_assignment_stops_at_done() {
    let parser = BuilderAssignment::parser();
    assert!(parser.is_terminal(DONE));

    let mut cursor = parser.tokenize("a = b; c = d;");
    let statement = parser.run(&mut cursor).unwrap();
    assert_eq!(statement.to_string(), "a = b");

    let next = parser.run(&mut cursor).unwrap();
    assert_eq!(next.to_string(), "c = d");
}

#[test]
fn builder_assignment_errors() {
    assert!(matches!(
        BuilderAssignment::parse("a = (b + c;"),
        Err(Error::Expression(ExpressionError::UnclosedParenthesis { .. }))
    ));
    assert!(matches!(
        BuilderAssignment::parse("a = b + ;"),
        Err(Error::NoMatch { state: 2, .. })
    ));
}

#[test]
fn grammars_by_name() {
    let select = GrammarName::Select.load();
    assert_eq!(
        select.parse("select * from t").unwrap(),
        "SELECT * FROM t"
    );

    let assignment: GrammarName = "assignment".parse().unwrap();
    assert_eq!(assignment.load().parse("a = b * c;").unwrap(), "a = b c *");

    let builder: GrammarName = "builder".parse().unwrap();
    assert_eq!(builder.load().parse("a = b * c;").unwrap(), "a = b c *");
}
