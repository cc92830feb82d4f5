//! Normalization of search criteria into the argument form of the search methods.

use crate::{
    ast::{composite::CompositeDomain, custom::CustomDomain, expr::Expression},
    build::builder::DomainBuilder,
    error::{DomainError, Result},
    render::{Render, Renderer},
};
use serde_json::{Map, Value};
use tracing::debug;

/// What a caller may pass as a search filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Criteria {
    /// No filter at all.
    #[default]
    Empty,
    Expression(Expression),
    /// `field -> value` shorthand, read as an AND of equalities in insertion order.
    Mapping(Map<String, Value>),
}

impl From<Expression> for Criteria {
    fn from(expr: Expression) -> Self {
        Criteria::Expression(expr)
    }
}

impl From<Option<Expression>> for Criteria {
    fn from(expr: Option<Expression>) -> Self {
        expr.map_or(Criteria::Empty, Criteria::Expression)
    }
}

impl From<CompositeDomain> for Criteria {
    fn from(composite: CompositeDomain) -> Self {
        Criteria::Expression(composite.into())
    }
}

impl From<CustomDomain> for Criteria {
    fn from(custom: CustomDomain) -> Self {
        Criteria::Expression(custom.into())
    }
}

impl From<Map<String, Value>> for Criteria {
    fn from(mapping: Map<String, Value>) -> Self {
        Criteria::Mapping(mapping)
    }
}

impl TryFrom<Value> for Criteria {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Criteria::Empty),
            Value::Object(mapping) => Ok(Criteria::Mapping(mapping)),
            other => Err(DomainError::InvalidCriteria(format!(
                "expected null or a field mapping, got {other}"
            ))),
        }
    }
}

/// Produces the domain list passed to the remote search methods.
///
/// The result is always a list of domain items: a lone terminal is wrapped as
/// `[[field, op, value]]` and composites yield their flat prefix stream. A
/// custom domain holding one tuple is wrapped like any terminal; one holding a
/// prefix stream is passed through as written.
pub fn normalize_domains(criteria: impl Into<Criteria>) -> Vec<Value> {
    let domain = match criteria.into() {
        Criteria::Empty => Vec::new(),
        Criteria::Expression(expr) => render(&expr),
        Criteria::Mapping(mapping) => {
            let equalities = mapping
                .into_iter()
                .map(|(field, value)| DomainBuilder::eq(field, value));
            render(&DomainBuilder::and_x(equalities))
        }
    };
    debug!("Normalized domain with {} item(s)", domain.len());
    domain
}

/// Like [`normalize_domains`] for untyped JSON criteria.
pub fn normalize_value(criteria: Value) -> Result<Vec<Value>> {
    Ok(normalize_domains(Criteria::try_from(criteria)?))
}

fn render(expr: &Expression) -> Vec<Value> {
    let mut renderer = Renderer::new();
    expr.render(&mut renderer);
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_empty_criteria() {
        assert!(normalize_domains(Criteria::Empty).is_empty());
        assert!(normalize_domains(None::<Expression>).is_empty());
        assert!(normalize_value(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_mapping_shorthand() {
        assert_eq!(
            normalize_domains(mapping(json!({"status": "done"}))),
            vec![json!(["status", "=", "done"])]
        );

        assert_eq!(
            Value::Array(normalize_domains(mapping(json!({
                "status": "done",
                "partner_id": 7,
                "active": true
            })))),
            json!([
                "&",
                ["status", "=", "done"],
                "&",
                ["partner_id", "=", 7],
                ["active", "=", true]
            ])
        );
    }

    #[test]
    fn test_terminal_expression_is_wrapped() {
        assert_eq!(
            normalize_domains(DomainBuilder::eq("age", 30)),
            vec![json!(["age", "=", 30])]
        );

        let single = DomainBuilder::and_x([DomainBuilder::eq("age", 30)]);
        assert_eq!(normalize_domains(single), vec![json!(["age", "=", 30])]);
    }

    #[test]
    fn test_composite_expression_is_flat() {
        let expr = DomainBuilder::or_x([
            DomainBuilder::eq("a", 1),
            DomainBuilder::eq("b", 2),
        ]);
        assert_eq!(
            Value::Array(normalize_domains(expr)),
            json!(["|", ["a", "=", 1], ["b", "=", 2]])
        );
    }

    #[test]
    fn test_custom_domain_is_passed_through() {
        let raw = vec![json!("!"), json!(["state", "=", "draft"])];
        assert_eq!(normalize_domains(DomainBuilder::custom(raw.clone())), raw);
    }

    #[test]
    fn test_custom_tuple_matches_single_child_and() {
        let tuple = || DomainBuilder::custom(vec![json!("state"), json!("="), json!("draft")]);
        let bare = normalize_domains(tuple());
        assert_eq!(bare, vec![json!(["state", "=", "draft"])]);
        assert_eq!(normalize_domains(DomainBuilder::and_x([tuple()])), bare);
    }

    #[test]
    fn test_invalid_criteria() {
        for value in [json!(42), json!("state"), json!([["a", "=", 1]]), json!(true)] {
            assert!(matches!(
                normalize_value(value),
                Err(DomainError::InvalidCriteria(_))
            ));
        }
    }
}
