use crate::{client::Client, error::Result, schema::model::ModelSchema};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Attributes requested from `fields_get` when hydrating a schema.
pub const SCHEMA_ATTRIBUTES: &[&str] = &[
    "type",
    "string",
    "required",
    "readonly",
    "relation",
    "selection",
];

/// Model schemas fetched once and shared afterwards.
#[derive(Debug, Default)]
pub struct SchemaCache {
    models: RwLock<HashMap<String, Arc<ModelSchema>>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached schema of `model`, fetching it on first use.
    pub async fn model(&self, client: &Client, model: &str) -> Result<Arc<ModelSchema>> {
        if let Some(schema) = self.models.read().await.get(model) {
            debug!(model, "Schema cache hit");
            return Ok(Arc::clone(schema));
        }

        let fields = client.repository(model).fields_get(SCHEMA_ATTRIBUTES).await?;
        let schema = Arc::new(ModelSchema::from_fields_get(model, fields)?);
        info!(model, fields = schema.fields.len(), "Cached model schema");

        let mut models = self.models.write().await;
        let cached = models
            .entry(model.to_string())
            .or_insert_with(|| Arc::clone(&schema));
        Ok(Arc::clone(cached))
    }

    /// Drops one model. Returns whether it was cached.
    pub async fn invalidate(&self, model: &str) -> bool {
        self.models.write().await.remove(model).is_some()
    }

    pub async fn clear(&self) {
        self.models.write().await.clear();
    }

    pub async fn cached_models(&self) -> Vec<String> {
        let mut names: Vec<_> = self.models.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}
