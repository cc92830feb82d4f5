//! Defines the expression tree handed to the remote search methods.

use crate::ast::{comparison::Comparison, composite::CompositeDomain, custom::CustomDomain};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A single `field operator value` triple, e.g. `["age", ">", 18]`.
    Comparison(Comparison),

    /// A logical combinator over child expressions, e.g. `AND(a, b, c)`.
    Composite(CompositeDomain),

    /// A raw, pre-built domain fragment.
    Custom(CustomDomain),
}

impl Expression {
    /// Serialized form of this node on its own.
    ///
    /// Terminals yield their own array. Composites yield the flat prefix stream,
    /// or the array of the single terminal they reduce to.
    pub fn to_array(&self) -> Vec<Value> {
        match self {
            Expression::Comparison(cmp) => cmp.to_array(),
            Expression::Composite(composite) => composite.to_array(),
            Expression::Custom(custom) => custom.to_array(),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Expression::Composite(_))
    }

    pub fn as_composite(&self) -> Option<&CompositeDomain> {
        match self {
            Expression::Composite(composite) => Some(composite),
            _ => None,
        }
    }

    pub fn as_composite_mut(&mut self) -> Option<&mut CompositeDomain> {
        match self {
            Expression::Composite(composite) => Some(composite),
            _ => None,
        }
    }

    pub fn into_node(self) -> Arc<Expression> {
        Arc::new(self)
    }
}

impl From<Comparison> for Expression {
    fn from(cmp: Comparison) -> Self {
        Expression::Comparison(cmp)
    }
}

impl From<CompositeDomain> for Expression {
    fn from(composite: CompositeDomain) -> Self {
        Expression::Composite(composite)
    }
}

impl From<CustomDomain> for Expression {
    fn from(custom: CustomDomain) -> Self {
        Expression::Custom(custom)
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}
