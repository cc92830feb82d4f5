//! Terminal `field operator value` nodes.

use crate::{ast::operator::ComparisonOperator, error::Result};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Field name, possibly a dotted path such as `partner_id.country_id`.
    field: String,
    operator: ComparisonOperator,
    value: Value,
}

impl Comparison {
    pub fn new(field: impl Into<String>, operator: ComparisonOperator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Builds a comparison from a raw operator symbol, rejecting symbols
    /// outside the supported set.
    pub fn parse(field: impl Into<String>, operator: &str, value: impl Into<Value>) -> Result<Self> {
        Ok(Self::new(field, operator.parse()?, value))
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_field(&mut self, field: impl Into<String>) {
        self.field = field.into();
    }

    pub fn set_operator(&mut self, operator: ComparisonOperator) {
        self.operator = operator;
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// `[field, operator, value]`, value passed through untouched.
    pub fn to_array(&self) -> Vec<Value> {
        vec![
            Value::String(self.field.clone()),
            Value::String(self.operator.symbol().to_string()),
            self.value.clone(),
        ]
    }
}
