use crate::{
    error::{ClientError, Result},
    schema::field::FieldSchema,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Field layout of one model, hydrated from `fields_get`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSchema {
    pub model: String,
    pub fields: BTreeMap<String, FieldSchema>,
}

impl ModelSchema {
    pub fn from_fields_get(model: impl Into<String>, fields: Map<String, Value>) -> Result<Self> {
        let model = model.into();
        let fields = fields
            .into_iter()
            .map(|(name, meta)| {
                let mut field: FieldSchema = serde_json::from_value(meta).map_err(|e| {
                    ClientError::UnexpectedResponse(format!("{model}.{name} metadata: {e}"))
                })?;
                field.name = name.clone();
                Ok((name, field))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self { model, fields })
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn relational_fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.values().filter(|f| f.field_type.is_relational())
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.values().filter(|f| f.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::field::FieldType;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_hydrate_from_fields_get() {
        let schema = ModelSchema::from_fields_get(
            "sale.order",
            fields(json!({
                "name": {"type": "char", "string": "Order Reference", "required": true},
                "partner_id": {"type": "many2one", "relation": "res.partner", "required": true},
                "order_line": {"type": "one2many", "relation": "sale.order.line"},
                "amount_total": {"type": "monetary", "readonly": true}
            })),
        )
        .unwrap();

        assert_eq!(schema.model, "sale.order");
        assert!(schema.has_field("order_line"));
        assert!(!schema.has_field("missing"));
        assert_eq!(schema.field("partner_id").unwrap().name, "partner_id");
        assert_eq!(
            schema.field("amount_total").unwrap().field_type,
            FieldType::Monetary
        );

        let relational: Vec<_> = schema.relational_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(relational, vec!["order_line", "partner_id"]);

        let required: Vec<_> = schema.required_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(required, vec!["name", "partner_id"]);
    }

    #[test]
    fn test_malformed_metadata() {
        let err = ModelSchema::from_fields_get("res.partner", fields(json!({"name": {"string": "Name"}})))
            .unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedResponse(msg) if msg.contains("res.partner.name")));
    }
}
