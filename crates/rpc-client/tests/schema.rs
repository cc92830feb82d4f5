mod common;

use common::{MockTransport, client};
use rpc_client::{ClientError, FieldType, SchemaCache, TransportError};
use serde_json::{Value, json};
use std::sync::Arc;

fn partner_fields() -> Value {
    json!({
        "name": {"type": "char", "string": "Name", "required": true},
        "parent_id": {"type": "many2one", "string": "Related Company", "relation": "res.partner"},
        "category_id": {"type": "many2many", "string": "Tags", "relation": "res.partner.category"},
        "type": {
            "type": "selection",
            "string": "Address Type",
            "selection": [["contact", "Contact"], ["invoice", "Invoice Address"]]
        }
    })
}

#[tokio::test]
async fn test_schema_is_fetched_once() {
    let transport = MockTransport::new();
    transport.respond(partner_fields());
    let client = client(&transport);
    let cache = SchemaCache::new();

    let first = cache.model(&client, "res.partner").await.unwrap();
    let second = cache.model(&client, "res.partner").await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(transport.calls().len(), 1);

    let (model, method, args, kwargs) = transport.last_call().execute_kw();
    assert_eq!(model, "res.partner");
    assert_eq!(method, "fields_get");
    assert!(args.is_empty());
    assert_eq!(
        kwargs["attributes"],
        json!(["type", "string", "required", "readonly", "relation", "selection"])
    );

    let category = first.field("category_id").unwrap();
    assert_eq!(category.field_type, FieldType::Many2many);
    assert!(category.field_type.takes_commands());
    assert_eq!(category.relation.as_deref(), Some("res.partner.category"));
    assert_eq!(first.field("type").unwrap().selection.len(), 2);
    assert_eq!(first.relational_fields().count(), 2);
}

#[tokio::test]
async fn test_invalidate_and_clear() {
    let transport = MockTransport::new();
    transport.respond(partner_fields());
    transport.respond(json!({"name": {"type": "char"}}));
    transport.respond(partner_fields());
    let client = client(&transport);
    let cache = SchemaCache::new();

    cache.model(&client, "res.partner").await.unwrap();
    cache.model(&client, "res.country").await.unwrap();
    assert_eq!(cache.cached_models().await, vec!["res.country", "res.partner"]);

    assert!(cache.invalidate("res.partner").await);
    assert!(!cache.invalidate("res.partner").await);
    cache.model(&client, "res.partner").await.unwrap();
    assert_eq!(transport.calls().len(), 3);

    cache.clear().await;
    assert!(cache.cached_models().await.is_empty());
}

#[tokio::test]
async fn test_failed_fetch_is_not_cached() {
    let transport = MockTransport::new();
    transport.fail(TransportError::Connection("timeout".to_string()));
    transport.respond(json!({"name": {"string": "missing type"}}));
    let client = client(&transport);
    let cache = SchemaCache::new();

    let err = cache.model(&client, "res.users").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));

    let err = cache.model(&client, "res.users").await.unwrap_err();
    assert!(matches!(err, ClientError::UnexpectedResponse(_)));

    assert!(cache.cached_models().await.is_empty());
}
