//! Infix expressions, built into binary trees.
//!
//! An expression is a sequence of operands and binary operators, where
//! parentheses can be used for grouping. The operators are grouped into four
//! [`Tier`][crate::operator::Tier]s, and a tree is built using precedence
//! climbing.
//!
//! There are two ways to build expressions:
//!
//! - [`ExpressionParser`] consumes tokens from a shared
//!   [`TokenCursor`][crate::lexer::TokenCursor] until it finds a stop token.
//!   This is what state table actions use.
//!
//! - [`ExpressionBuilder`] collects values of any type one at a time, and
//!   builds the tree when asked.
//!
//! Both produce an [`Expression`], which prints as the post-order traversal of
//! its tree.
//!
//! ```
//! # use parser::expression::ExpressionBuilder;
//! let mut builder = ExpressionBuilder::<String>::default();
//! for value in ["a", "*", "(", "b", "+", "c", ")"] {
//!     builder.add(value.to_string());
//! }
//!
//! let tree = builder.evaluate().unwrap();
//! assert_eq!(tree.to_string(), "a b c + *");
//! ```

mod builder;
mod climb;
mod error;
mod parser;

use std::fmt;

pub use crate::expression::{
    builder::ExpressionBuilder, error::Error, parser::ExpressionParser,
};

/// A node in an expression tree.
///
/// Nodes are either leaves holding an operand, or branches holding an
/// operator with exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V> {
    value: V,
    children: Option<Box<(Node<V>, Node<V>)>>,
}

impl<V> Node<V> {
    pub fn leaf(value: V) -> Self {
        Node {
            value,
            children: None,
        }
    }

    pub fn branch(value: V, left: Node<V>, right: Node<V>) -> Self {
        Node {
            value,
            children: Some(Box::new((left, right))),
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn left(&self) -> Option<&Node<V>> {
        self.children.as_ref().map(|children| &children.0)
    }

    pub fn right(&self) -> Option<&Node<V>> {
        self.children.as_ref().map(|children| &children.1)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The nodes of this tree in post-order, i.e. the order they'd be
    /// evaluated on a stack machine.
    pub fn iter(&self) -> PostOrder<'_, V> {
        PostOrder::new(self)
    }

    /// The values of the tree in post-order.
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(Node::value).collect()
    }
}

impl<V: fmt::Display> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, node) in self.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", node.value)?;
        }
        Ok(())
    }
}

/// A post-order iterator over the nodes of a tree.
pub struct PostOrder<'a, V> {
    // Each node is pushed with whether its children have been visited yet.
    stack: Vec<(&'a Node<V>, bool)>,
}

impl<'a, V> PostOrder<'a, V> {
    fn new(root: &'a Node<V>) -> Self {
        PostOrder {
            stack: vec![(root, false)],
        }
    }
}

impl<'a, V> Iterator for PostOrder<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<&'a Node<V>> {
        loop {
            let (node, visited) = self.stack.pop()?;

            match &node.children {
                Some(children) if !visited => {
                    self.stack.push((node, true));
                    self.stack.push((&children.1, false));
                    self.stack.push((&children.0, false));
                }
                _ => return Some(node),
            }
        }
    }
}

/// The result of building an expression. This is empty when there was
/// nothing to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<V> {
    root: Option<Node<V>>,
}

impl<V> Expression<V> {
    pub fn new(root: Node<V>) -> Self {
        Expression { root: Some(root) }
    }

    pub fn empty() -> Self {
        Expression { root: None }
    }

    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_ref()
    }

    pub fn into_root(self) -> Option<Node<V>> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The values of the tree in post-order.
    pub fn values(&self) -> Vec<&V> {
        self.root.as_ref().map(Node::values).unwrap_or_default()
    }
}

impl<V> Default for Expression<V> {
    fn default() -> Self {
        Expression::empty()
    }
}

impl<V: fmt::Display> fmt::Display for Expression<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{}", root),
            None => Ok(()),
        }
    }
}
