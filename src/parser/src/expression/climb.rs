//! Precedence climbing
//!
//! Each tier parses one operand at the next tighter tier, and then as long as
//! the next item is one of its own operators, consumes the operator and
//! another operand, folding them into a left-leaning tree:
//!
//! ```text
//! expression := logical (LOGICAL_OP logical)*
//! logical    := relation (RELATIONAL_OP relation)*
//! relation   := term (ADDITIVE_OP term)*
//! term       := factor (MULTIPLICATIVE_OP factor)*
//! factor     := '(' expression ')' | operand
//! ```
//!
//! The algorithm doesn't care where the items come from, as long as they're
//! behind an [`Operands`] implementation.

use std::fmt;

use log::{debug, trace};

use crate::{
    expression::{
        error::{Error, END_OF_INPUT},
        Expression, Node,
    },
    operator::Tier,
};

/// A source of expression items.
pub(crate) trait Operands {
    type Value: Clone + fmt::Display;

    /// The next item, without consuming it. This includes stop items.
    fn peek(&self) -> Option<&Self::Value>;

    /// Consume the next item.
    fn advance(&mut self);

    /// Does this item end the expression?
    fn is_stop(&self, value: &Self::Value) -> bool;

    fn is_open(&self, value: &Self::Value) -> bool;

    fn is_close(&self, value: &Self::Value) -> bool;

    /// Is this item an operator at `tier`?
    fn is_operator(&self, tier: Tier, value: &Self::Value) -> bool;
}

/// Build an expression from a source. The item that ended the expression, if
/// any, is not consumed.
pub(crate) fn climb<S: Operands>(
    source: &mut S,
) -> Result<Expression<S::Value>, Error> {
    match source.peek() {
        None => return Ok(Expression::empty()),
        Some(value) if source.is_stop(value) => {
            return Ok(Expression::empty())
        }
        Some(_) => {}
    }

    let mut climber = Climber { source, depth: 0 };
    let root = climber.tier(Tier::LOWEST, END_OF_INPUT)?;

    debug!("built expression {}", root);

    Ok(Expression::new(root))
}

struct Climber<'s, S> {
    source: &'s mut S,

    /// How deeply nested in parentheses we are.
    depth: usize,
}

impl<S: Operands> Climber<'_, S> {
    /// The maximum nesting of parentheses.
    const MAX_DEPTH: usize = 128;

    /// The next item, unless it's a stop item.
    fn peek(&self) -> Option<&S::Value> {
        self.source.peek().filter(|value| !self.source.is_stop(value))
    }

    /// Consume the next item if it's an operator at this tier.
    fn operator(&mut self, tier: Tier) -> Option<S::Value> {
        let op = self
            .peek()
            .filter(|value| self.source.is_operator(tier, value))
            .cloned()?;
        self.source.advance();
        trace!("{} operator {}", tier.name(), op);
        Some(op)
    }

    fn tier(
        &mut self,
        tier: Tier,
        after: &str,
    ) -> Result<Node<S::Value>, Error> {
        let mut left = self.operand(tier, after)?;

        while let Some(op) = self.operator(tier) {
            let right = self.operand(tier, &op.to_string())?;
            left = Node::branch(op, left, right);
        }

        Ok(left)
    }

    /// An operand of an operator at `tier`, which is anything at a tighter
    /// tier.
    fn operand(
        &mut self,
        tier: Tier,
        after: &str,
    ) -> Result<Node<S::Value>, Error> {
        match tier.next() {
            Some(next) => self.tier(next, after),
            None => self.factor(after),
        }
    }

    fn factor(&mut self, after: &str) -> Result<Node<S::Value>, Error> {
        let value = match self.peek() {
            Some(value) => value.clone(),
            None => {
                return Err(Error::MissingOperand {
                    after: after.to_string(),
                })
            }
        };

        if self.source.is_close(&value) {
            return Err(Error::UnopenedParenthesis);
        }

        self.source.advance();

        if !self.source.is_open(&value) {
            return Ok(Node::leaf(value));
        }

        let inner = self.depth_track(|climber| {
            climber.tier(Tier::LOWEST, &value.to_string())
        })?;

        // The closing parenthesis counts even if it's also a stop item.
        let closed = matches!(
            self.source.peek(),
            Some(close) if self.source.is_close(close)
        );

        if closed {
            self.source.advance();
            Ok(inner)
        } else {
            Err(Error::UnclosedParenthesis {
                found: self.describe_next(),
            })
        }
    }

    /// Increases the nesting depth for the duration of `inner`, failing if
    /// the limit is hit.
    fn depth_track<F, T>(&mut self, inner: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        if self.depth >= Self::MAX_DEPTH {
            return Err(Error::DepthExceeded);
        }

        self.depth += 1;
        let result = inner(self);
        self.depth -= 1;
        result
    }

    fn describe_next(&self) -> String {
        self.source
            .peek()
            .map(ToString::to_string)
            .unwrap_or_else(|| END_OF_INPUT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::OperatorTiers;

    /// A minimal source over characters, with `;` as the only stop.
    struct Chars {
        items: Vec<char>,
        position: usize,
        tiers: OperatorTiers<char>,
        stops: Vec<char>,
    }

    impl Chars {
        fn new(input: &str) -> Self {
            Chars {
                items: input.chars().filter(|c| !c.is_whitespace()).collect(),
                position: 0,
                tiers: OperatorTiers::new(['|'], ['<'], ['+', '-'], ['*']),
                stops: vec![';'],
            }
        }

        fn stopping_at(mut self, stop: char) -> Self {
            self.stops.push(stop);
            self
        }
    }

    impl Operands for Chars {
        type Value = char;

        fn peek(&self) -> Option<&char> {
            self.items.get(self.position)
        }

        fn advance(&mut self) {
            self.position += 1;
        }

        fn is_stop(&self, value: &char) -> bool {
            self.stops.contains(value)
        }

        fn is_open(&self, value: &char) -> bool {
            *value == '('
        }

        fn is_close(&self, value: &char) -> bool {
            *value == ')'
        }

        fn is_operator(&self, tier: Tier, value: &char) -> bool {
            self.tiers.contains(tier, value)
        }
    }

    fn build(input: &str) -> Result<String, Error> {
        climb(&mut Chars::new(input)).map(|e| e.to_string())
    }

    #[test]
    fn precedence() {
        assert_eq!(build("a+b*c").unwrap(), "a b c * +");
        assert_eq!(build("a*b+c").unwrap(), "a b * c +");
        assert_eq!(build("a<b|c").unwrap(), "a b < c |");
    }

    #[test]
    fn left_associative() {
        assert_eq!(build("a-b-c").unwrap(), "a b - c -");
    }

    #[test]
    fn stops_before_stop_item() {
        let mut source = Chars::new("a+b;c");
        assert_eq!(climb(&mut source).unwrap().to_string(), "a b +");
        assert_eq!(source.peek(), Some(&';'));
    }

    #[test]
    fn stops_before_unknown_operator() {
        let mut source = Chars::new("a+b c");
        assert_eq!(climb(&mut source).unwrap().to_string(), "a b +");
        assert_eq!(source.peek(), Some(&'c'));
    }

    #[test]
    fn close_paren_as_stop() {
        let mut source = Chars::new("(a+b)*c)").stopping_at(')');
        assert_eq!(climb(&mut source).unwrap().to_string(), "a b + c *");
        assert_eq!(source.peek(), Some(&')'));
    }

    #[test]
    fn empty() {
        assert_eq!(build("").unwrap(), "");
        assert_eq!(build(";").unwrap(), "");
    }

    #[test]
    fn parentheses() {
        assert_eq!(build("(a)").unwrap(), "a");
        assert_eq!(build("((a+b))*c").unwrap(), "a b + c *");
    }

    #[test]
    fn structural_errors() {
        assert_eq!(
            build("(a+b"),
            Err(Error::UnclosedParenthesis {
                found: END_OF_INPUT.into()
            })
        );
        assert_eq!(
            build("(a;"),
            Err(Error::UnclosedParenthesis { found: ";".into() })
        );
        assert_eq!(build(")"), Err(Error::UnopenedParenthesis));
        assert_eq!(build("()"), Err(Error::UnopenedParenthesis));
        assert_eq!(
            build("a+"),
            Err(Error::MissingOperand { after: "+".into() })
        );
        assert_eq!(
            build("a*;"),
            Err(Error::MissingOperand { after: "*".into() })
        );
        assert_eq!(
            build("("),
            Err(Error::MissingOperand { after: "(".into() })
        );
    }

    #[test]
    fn depth_limit() {
        let ok = format!("{}a{}", "(".repeat(128), ")".repeat(128));
        assert_eq!(build(&ok).unwrap(), "a");

        let deep = format!("{}a{}", "(".repeat(129), ")".repeat(129));
        assert_eq!(build(&deep), Err(Error::DepthExceeded));
    }
}
