//! Expressions read straight off a token cursor.

use crate::{
    expression::{climb, Error, Expression},
    lexer::{Token, TokenCursor},
    matcher::Matcher,
    operator::{OperatorTiers, Tier},
};

/// Parses an expression from a [`TokenCursor`], stopping at the end of input
/// or at the first token any of the stop matchers accept.
///
/// This is meant to be called from a state table action, part way through a
/// run. Once it returns the cursor is left just after the expression, so the
/// token which stopped it is the next one the engine sees.
///
/// Operators are compared to token values ignoring ASCII case, and the
/// parentheses are the tokens `(` and `)`. Any other token is an operand.
///
/// ```
/// # use parser::{expression::ExpressionParser, lexer::{Lexer, Vocabulary}};
/// # use parser::matcher::Matcher;
/// let mut vocabulary = Vocabulary::new();
/// let semicolon = vocabulary.char(';');
///
/// let lexer = Lexer::new(vocabulary).with_special_chars(['(', ')', ';']);
/// let mut cursor = lexer.tokenize("a * (b + c); d");
///
/// let expression = ExpressionParser::default()
///     .parse(&mut cursor, &[semicolon])
///     .unwrap();
///
/// assert_eq!(expression.to_string(), "a b c + *");
/// assert_eq!(cursor.peek().map(|t| t.value()), Some(";"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExpressionParser {
    tiers: OperatorTiers<String>,
}

impl ExpressionParser {
    pub const OPEN: &'static str = "(";
    pub const CLOSE: &'static str = ")";

    pub fn new(tiers: OperatorTiers<String>) -> Self {
        ExpressionParser { tiers }
    }

    pub fn tiers(&self) -> &OperatorTiers<String> {
        &self.tiers
    }

    /// Parse an expression. If the first token is a stop token, or there are
    /// no tokens, the expression is empty.
    pub fn parse(
        &self,
        cursor: &mut TokenCursor,
        stops: &[Matcher],
    ) -> Result<Expression<Token>, Error> {
        let mut source = CursorOperands {
            cursor,
            stops,
            tiers: &self.tiers,
        };

        climb::climb(&mut source)
    }
}

struct CursorOperands<'c, 's> {
    cursor: &'c mut TokenCursor,
    stops: &'s [Matcher],
    tiers: &'s OperatorTiers<String>,
}

impl climb::Operands for CursorOperands<'_, '_> {
    type Value = Token;

    fn peek(&self) -> Option<&Token> {
        self.cursor.peek()
    }

    fn advance(&mut self) {
        self.cursor.next();
    }

    fn is_stop(&self, token: &Token) -> bool {
        self.stops.iter().any(|stop| stop.matches(token))
    }

    fn is_open(&self, token: &Token) -> bool {
        token.value() == ExpressionParser::OPEN
    }

    fn is_close(&self, token: &Token) -> bool {
        token.value() == ExpressionParser::CLOSE
    }

    fn is_operator(&self, tier: Tier, token: &Token) -> bool {
        self.tiers.contains_text(tier, token.value())
    }
}
