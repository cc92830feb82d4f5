//! Logical combinators and their reduction to strict prefix notation.
//!
//! Callers may give AND/OR/NOT any number of children, but the remote engine
//! only accepts binary `&`/`|` and unary `!`. [`CompositeDomain::prepare`]
//! rewrites an N-ary node into that shape without touching the original tree:
//!
//! ```text
//! AND(a)        -> a
//! AND(a, b, c)  -> AND(a, AND(b, c))        ["&", a, "&", b, c]
//! NOT(a, b)     -> NOT(AND(a, b))           ["!", "&", a, b]
//! ```

use crate::{
    ast::{expr::Expression, operator::LogicalOperator},
    render::{Renderer, render_reduced},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// An AND/OR/NOT node over an ordered list of children.
///
/// Children are shared handles; the same handle is never stored twice.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeDomain {
    operator: LogicalOperator,
    children: Vec<Arc<Expression>>,
}

impl CompositeDomain {
    pub fn new(operator: LogicalOperator) -> Self {
        Self {
            operator,
            children: Vec::new(),
        }
    }

    /// Creates a node and adds each child in order, skipping repeated handles.
    pub fn with_children<I, E>(operator: LogicalOperator, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Expression>>,
    {
        let mut composite = Self::new(operator);
        composite.set_domains(children);
        composite
    }

    pub fn and<I, E>(children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Expression>>,
    {
        Self::with_children(LogicalOperator::And, children)
    }

    pub fn or<I, E>(children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Expression>>,
    {
        Self::with_children(LogicalOperator::Or, children)
    }

    pub fn not<I, E>(children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Expression>>,
    {
        Self::with_children(LogicalOperator::Not, children)
    }

    // Internal nodes built during reduction keep every handle they are given.
    fn from_nodes(operator: LogicalOperator, children: Vec<Arc<Expression>>) -> Self {
        Self { operator, children }
    }

    pub fn operator(&self) -> LogicalOperator {
        self.operator
    }

    pub fn set_operator(&mut self, operator: LogicalOperator) {
        self.operator = operator;
    }

    pub fn children(&self) -> &[Arc<Expression>] {
        &self.children
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Expression>> {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this exact handle (not an equal value) is a child.
    pub fn has(&self, child: &Arc<Expression>) -> bool {
        self.children.iter().any(|c| Arc::ptr_eq(c, child))
    }

    /// Appends a child and returns its handle. Adding a handle that is already
    /// present leaves the node unchanged.
    pub fn add(&mut self, child: impl Into<Arc<Expression>>) -> Arc<Expression> {
        let child = child.into();
        if self.has(&child) {
            warn!("Ignoring duplicate child in {} domain", self.operator);
        } else {
            self.children.push(Arc::clone(&child));
        }
        child
    }

    /// Removes the given handle. Returns `false` if it was not a child.
    pub fn remove(&mut self, child: &Arc<Expression>) -> bool {
        let before = self.children.len();
        self.children.retain(|c| !Arc::ptr_eq(c, child));
        self.children.len() != before
    }

    /// Replaces all children.
    pub fn set_domains<I, E>(&mut self, children: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Expression>>,
    {
        self.children.clear();
        for child in children {
            self.add(child);
        }
    }

    /// Reduces this node to the strict arity the remote engine accepts.
    ///
    /// Returns `None` when nothing is left, the lone operand when the operator
    /// can be elided, or a composite whose AND/OR nodes have exactly two
    /// children and whose NOT nodes have exactly one, all of them reduced.
    /// Children are processed in insertion order and folded to the right:
    /// the first operand is always the shallowest.
    pub fn prepare(&self) -> Option<Arc<Expression>> {
        match (self.operator, self.children.len()) {
            (_, 0) => None,
            (LogicalOperator::Not, 1) => {
                let operand = reduce(&self.children[0])?;
                Some(Self::from_nodes(LogicalOperator::Not, vec![operand]).into_node())
            }
            (_, 1) => reduce(&self.children[0]),
            (LogicalOperator::Not, _) => {
                // NOT over several operands negates their conjunction.
                let conjunction =
                    Self::from_nodes(LogicalOperator::And, self.children.clone()).prepare()?;
                Some(Self::from_nodes(LogicalOperator::Not, vec![conjunction]).into_node())
            }
            (operator, _) => {
                let operands: Vec<_> = self.children.iter().filter_map(reduce).collect();
                fold(operator, operands)
            }
        }
    }

    /// Flat prefix-notation form of this node.
    ///
    /// A node that reduces to a single terminal yields that terminal's own
    /// array; an empty node yields an empty array.
    pub fn to_array(&self) -> Vec<Value> {
        match self.prepare() {
            None => Vec::new(),
            Some(node) if node.is_composite() => {
                let mut renderer = Renderer::new();
                render_reduced(&node, &mut renderer);
                renderer.finish()
            }
            Some(node) => node.to_array(),
        }
    }

    fn into_node(self) -> Arc<Expression> {
        Arc::new(Expression::Composite(self))
    }
}

fn reduce(child: &Arc<Expression>) -> Option<Arc<Expression>> {
    match child.as_ref() {
        Expression::Composite(composite) => composite.prepare(),
        _ => Some(Arc::clone(child)),
    }
}

// `op(a, op(b, op(c, d)))` over already-reduced operands.
fn fold(operator: LogicalOperator, mut operands: Vec<Arc<Expression>>) -> Option<Arc<Expression>> {
    match operands.len() {
        0 => None,
        1 => operands.pop(),
        _ => {
            let head = operands.remove(0);
            let tail = fold(operator, operands)?;
            Some(CompositeDomain::from_nodes(operator, vec![head, tail]).into_node())
        }
    }
}
