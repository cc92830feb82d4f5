//! Factory shortcuts for building expression trees.

use crate::ast::{
    comparison::Comparison, composite::CompositeDomain, custom::CustomDomain, expr::Expression,
    operator::ComparisonOperator,
};
use serde_json::Value;
use std::sync::Arc;

/// Stateless factory for expressions. Every method returns a fresh node.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomainBuilder;

impl DomainBuilder {
    pub fn and_x<I, E>(children: I) -> Expression
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Expression>>,
    {
        CompositeDomain::and(children).into()
    }

    pub fn or_x<I, E>(children: I) -> Expression
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Expression>>,
    {
        CompositeDomain::or(children).into()
    }

    pub fn not_x<I, E>(children: I) -> Expression
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Expression>>,
    {
        CompositeDomain::not(children).into()
    }

    pub fn compare(
        field: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<Value>,
    ) -> Expression {
        let value = value.into();
        let value = if operator.expects_sequence() {
            into_sequence(value)
        } else {
            value
        };
        Comparison::new(field, operator, value).into()
    }

    pub fn custom(data: Vec<Value>) -> Expression {
        CustomDomain::new(data).into()
    }

    /// Unset or equal to (`=?`).
    pub fn ueq(field: impl Into<String>, value: impl Into<Value>) -> Expression {
        Self::compare(field, ComparisonOperator::UnsetOrEqual, value)
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Expression {
        Self::compare(field, ComparisonOperator::Equal, value)
    }

    pub fn neq(field: impl Into<String>, value: impl Into<Value>) -> Expression {
        Self::compare(field, ComparisonOperator::NotEqual, value)
    }

    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Expression {
        Self::compare(field, ComparisonOperator::LessThan, value)
    }

    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Expression {
        Self::compare(field, ComparisonOperator::LessOrEqual, value)
    }

    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Expression {
        Self::compare(field, ComparisonOperator::GreaterThan, value)
    }

    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Expression {
        Self::compare(field, ComparisonOperator::GreaterOrEqual, value)
    }

    /// Pattern match. `strict` anchors the pattern (`=like`/`=ilike`); the
    /// non-strict operators are substring matches on the remote side.
    pub fn like(
        field: impl Into<String>,
        value: impl Into<Value>,
        strict: bool,
        case_sensitive: bool,
    ) -> Expression {
        Self::compare(field, ComparisonOperator::like(strict, case_sensitive), value)
    }

    pub fn not_like(
        field: impl Into<String>,
        value: impl Into<Value>,
        case_sensitive: bool,
    ) -> Expression {
        Self::compare(field, ComparisonOperator::not_like(case_sensitive), value)
    }

    /// Membership test; a scalar value is wrapped into a one-element list and
    /// `null` becomes an empty list.
    pub fn is_in(field: impl Into<String>, value: impl Into<Value>) -> Expression {
        Self::compare(field, ComparisonOperator::In, value)
    }

    pub fn not_in(field: impl Into<String>, value: impl Into<Value>) -> Expression {
        Self::compare(field, ComparisonOperator::NotIn, value)
    }
}

fn into_sequence(value: Value) -> Value {
    match value {
        Value::Array(_) => value,
        Value::Null => Value::Array(Vec::new()),
        scalar => Value::Array(vec![scalar]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn array(expr: &Expression) -> Value {
        Value::Array(expr.to_array())
    }

    #[test]
    fn test_eq_serializes_triple() {
        assert_eq!(array(&DomainBuilder::eq("age", 30)), json!(["age", "=", 30]));
    }

    #[test]
    fn test_every_shortcut_uses_its_symbol() {
        let cases = vec![
            (DomainBuilder::ueq("f", 1), "=?"),
            (DomainBuilder::eq("f", 1), "="),
            (DomainBuilder::neq("f", 1), "!="),
            (DomainBuilder::lt("f", 1), "<"),
            (DomainBuilder::lte("f", 1), "<="),
            (DomainBuilder::gt("f", 1), ">"),
            (DomainBuilder::gte("f", 1), ">="),
            (DomainBuilder::like("f", "x", true, true), "=like"),
            (DomainBuilder::like("f", "x", true, false), "=ilike"),
            (DomainBuilder::like("f", "x", false, true), "like"),
            (DomainBuilder::like("f", "x", false, false), "ilike"),
            (DomainBuilder::not_like("f", "x", true), "not like"),
            (DomainBuilder::not_like("f", "x", false), "not ilike"),
            (DomainBuilder::is_in("f", json!([1])), "in"),
            (DomainBuilder::not_in("f", json!([1])), "not in"),
        ];

        for (expr, symbol) in cases {
            assert_eq!(expr.to_array()[1], json!(symbol), "operator for {symbol}");
        }
    }

    #[test]
    fn test_like_value_is_not_rewritten() {
        assert_eq!(
            array(&DomainBuilder::like("name", "acme", false, false)),
            json!(["name", "ilike", "acme"])
        );
    }

    #[test]
    fn test_in_coerces_scalars_to_lists() {
        assert_eq!(array(&DomainBuilder::is_in("id", 5)), json!(["id", "in", [5]]));
        assert_eq!(
            array(&DomainBuilder::not_in("state", "done")),
            json!(["state", "not in", ["done"]])
        );
        assert_eq!(
            array(&DomainBuilder::is_in("id", json!([1, 2]))),
            json!(["id", "in", [1, 2]])
        );
    }

    #[test]
    fn test_in_with_null_is_empty_list() {
        assert_eq!(
            array(&DomainBuilder::is_in("tag_ids", Value::Null)),
            json!(["tag_ids", "in", []])
        );
        assert_eq!(
            array(&DomainBuilder::not_in("tag_ids", Value::Null)),
            json!(["tag_ids", "not in", []])
        );
    }

    #[test]
    fn test_combinators_build_composites() {
        let expr = DomainBuilder::and_x([
            DomainBuilder::eq("active", true),
            DomainBuilder::or_x([
                DomainBuilder::gt("amount", 100),
                DomainBuilder::lt("amount", 10),
            ]),
            DomainBuilder::not_x([DomainBuilder::eq("state", "cancel")]),
        ]);

        assert_eq!(
            array(&expr),
            json!([
                "&",
                ["active", "=", true],
                "&",
                "|",
                ["amount", ">", 100],
                ["amount", "<", 10],
                "!",
                ["state", "=", "cancel"]
            ])
        );
    }
}
