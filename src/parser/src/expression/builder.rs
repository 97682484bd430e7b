//! Expressions built up from values one at a time.

use std::fmt;

use crate::{
    expression::{
        climb::{self, Operands},
        Error, Expression,
    },
    operator::{OperatorTiers, Tier},
};

/// Collects a sequence of values and builds an expression tree from them.
///
/// Unlike [`ExpressionParser`][super::ExpressionParser] this works with any
/// value type, and the whole sequence is known before the tree is built.
/// Operators and parentheses are compared with `PartialEq`.
#[derive(Debug, Clone)]
pub struct ExpressionBuilder<V> {
    tiers: OperatorTiers<V>,
    open: V,
    close: V,
    values: Vec<V>,
}

impl<V> ExpressionBuilder<V> {
    /// Create a builder using `open` and `close` as the parentheses.
    pub fn new(tiers: OperatorTiers<V>, open: V, close: V) -> Self {
        ExpressionBuilder {
            tiers,
            open,
            close,
            values: Vec::new(),
        }
    }

    /// Add the next value of the expression.
    pub fn add(&mut self, value: V) {
        self.values.push(value);
    }

    /// The values added so far.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Forget the values added so far, keeping the operators.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<V> ExpressionBuilder<V>
where
    V: Clone + PartialEq + fmt::Display,
{
    /// Build a tree from the values added so far. An empty builder gives an
    /// empty expression.
    ///
    /// Every value must be used: anything left over once the expression is
    /// complete is an error.
    pub fn evaluate(&self) -> Result<Expression<V>, Error> {
        let mut source = SliceOperands {
            builder: self,
            position: 0,
        };

        let expression = climb::climb(&mut source)?;

        match source.peek() {
            None => Ok(expression),
            Some(close) if source.is_close(close) => {
                Err(Error::UnopenedParenthesis)
            }
            Some(found) => Err(Error::TrailingInput {
                found: found.to_string(),
            }),
        }
    }
}

impl Default for ExpressionBuilder<String> {
    fn default() -> Self {
        ExpressionBuilder::new(
            OperatorTiers::default(),
            "(".to_string(),
            ")".to_string(),
        )
    }
}

impl<V: fmt::Display> fmt::Display for ExpressionBuilder<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

struct SliceOperands<'b, V> {
    builder: &'b ExpressionBuilder<V>,
    position: usize,
}

impl<V> Operands for SliceOperands<'_, V>
where
    V: Clone + PartialEq + fmt::Display,
{
    type Value = V;

    fn peek(&self) -> Option<&V> {
        self.builder.values.get(self.position)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn is_stop(&self, _: &V) -> bool {
        false
    }

    fn is_open(&self, value: &V) -> bool {
        *value == self.builder.open
    }

    fn is_close(&self, value: &V) -> bool {
        *value == self.builder.close
    }

    fn is_operator(&self, tier: Tier, value: &V) -> bool {
        self.builder.tiers.contains(tier, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[&str]) -> Result<Expression<String>, Error> {
        let mut builder = ExpressionBuilder::default();
        for value in values {
            builder.add(value.to_string());
        }
        builder.evaluate()
    }

    #[test]
    fn nothing_added() {
        let expression = build(&[]).unwrap();
        assert!(expression.is_empty());
        assert_eq!(expression.to_string(), "");
    }

    #[test]
    fn evaluate_twice() {
        let mut builder = ExpressionBuilder::default();
        builder.add("a".to_string());
        builder.add("+".to_string());
        builder.add("b".to_string());

        let first = builder.evaluate().unwrap();
        assert_eq!(first, builder.evaluate().unwrap());
        assert_eq!(builder.to_string(), "a + b");
    }

    #[test]
    fn leftovers() {
        assert_eq!(
            build(&["a", "b"]),
            Err(Error::TrailingInput { found: "b".into() })
        );
        assert_eq!(build(&["a", ")"]), Err(Error::UnopenedParenthesis));
    }

    #[test]
    fn integers() {
        let tiers = OperatorTiers::new([], [], [-1], [-2]);
        let mut builder = ExpressionBuilder::new(tiers, -3, -4);
        for v in [1, -1, 2, -2, 3] {
            builder.add(v);
        }

        let tree = builder.evaluate().unwrap();
        assert_eq!(tree.values(), [&1, &2, &3, &-2, &-1]);
    }
}
