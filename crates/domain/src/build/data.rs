//! Resolution of create/write payloads that embed expressions or relation commands.

use crate::{ast::expr::Expression, command::Command};
use serde_json::{Map, Value};

/// A payload value that may still hold unresolved expression nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Value(Value),
    Expression(Expression),
    Commands(Vec<Command>),
    List(Vec<FieldValue>),
    Map(Vec<(String, FieldValue)>),
}

impl FieldValue {
    /// Replaces every embedded node with its serialized array, recursively.
    pub fn into_value(self) -> Value {
        match self {
            FieldValue::Value(value) => value,
            FieldValue::Expression(expr) => Value::Array(expr.to_array()),
            FieldValue::Commands(commands) => Value::Array(
                commands
                    .iter()
                    .map(|command| Value::Array(command.to_array()))
                    .collect(),
            ),
            FieldValue::List(items) => {
                Value::Array(items.into_iter().map(FieldValue::into_value).collect())
            }
            FieldValue::Map(entries) => Value::Object(normalize_data(entries)),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Value(value)
    }
}

impl From<Expression> for FieldValue {
    fn from(expr: Expression) -> Self {
        FieldValue::Expression(expr)
    }
}

impl From<Command> for FieldValue {
    fn from(command: Command) -> Self {
        FieldValue::Commands(vec![command])
    }
}

impl From<Vec<Command>> for FieldValue {
    fn from(commands: Vec<Command>) -> Self {
        FieldValue::Commands(commands)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Value(Value::from(value))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Value(Value::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Value(Value::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Value(Value::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Value(Value::from(value))
    }
}

/// Resolves a `field -> value` payload, keeping field order.
pub fn normalize_data<K, I>(data: I) -> Map<String, Value>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, FieldValue)>,
{
    data.into_iter()
        .map(|(field, value)| (field.into(), value.into_value()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::builder::DomainBuilder;
    use serde_json::json;

    #[test]
    fn test_plain_values_pass_through() {
        let data = normalize_data([("name", FieldValue::from("Acme")), ("qty", 3i64.into())]);
        assert_eq!(Value::Object(data), json!({"name": "Acme", "qty": 3}));
    }

    #[test]
    fn test_commands_and_expressions_are_resolved() {
        let data = normalize_data([
            (
                "tag_ids",
                FieldValue::from(vec![Command::Clear, Command::Add(4), Command::Replace(vec![1, 2])]),
            ),
            ("filter", DomainBuilder::eq("active", true).into()),
            (
                "nested",
                FieldValue::Map(vec![(
                    "lines".to_string(),
                    FieldValue::List(vec![
                        FieldValue::from(Command::Delete(9)),
                        FieldValue::from(json!(null)),
                    ]),
                )]),
            ),
        ]);

        assert_eq!(
            Value::Object(data),
            json!({
                "tag_ids": [[5, 0, 0], [4, 4, 0], [6, 0, [1, 2]]],
                "filter": ["active", "=", true],
                "nested": {"lines": [[[2, 9, 0]], null]}
            })
        );
    }

    #[test]
    fn test_field_order_is_kept() {
        let data = normalize_data([
            ("zeta", FieldValue::from(1i64)),
            ("alpha", FieldValue::from(2i64)),
        ]);
        let keys: Vec<_> = data.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
