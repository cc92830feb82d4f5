//! Record operations on a single model.

use crate::{
    client::Client,
    error::{ClientError, Result},
    query::QueryBuilder,
};
use domain::{Criteria, DomainError, FieldValue, normalize_data, normalize_domains};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

/// A record as returned by `read`/`search_read`.
pub type Record = Map<String, Value>;

/// Paging and ordering keywords of the search methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    /// e.g. `"date desc, id asc"`
    pub order: Option<String>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    fn to_kwargs(&self) -> Map<String, Value> {
        let mut kwargs = Map::new();
        if let Some(offset) = self.offset {
            kwargs.insert("offset".to_string(), Value::from(offset));
        }
        if let Some(limit) = self.limit {
            kwargs.insert("limit".to_string(), Value::from(limit));
        }
        if let Some(order) = &self.order {
            kwargs.insert("order".to_string(), Value::from(order.as_str()));
        }
        kwargs
    }
}

#[derive(Clone)]
pub struct Repository {
    client: Client,
    model: String,
}

impl Repository {
    pub fn new(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn query(&self) -> QueryBuilder {
        QueryBuilder::new(self.clone())
    }

    pub async fn search(
        &self,
        criteria: impl Into<Criteria>,
        options: &SearchOptions,
    ) -> Result<Vec<i64>> {
        let domain = normalize_domains(criteria);
        self.call("search", vec![Value::Array(domain)], options.to_kwargs())
            .await
    }

    pub async fn search_count(&self, criteria: impl Into<Criteria>) -> Result<u64> {
        let domain = normalize_domains(criteria);
        self.call("search_count", vec![Value::Array(domain)], Map::new())
            .await
    }

    pub async fn search_read(
        &self,
        criteria: impl Into<Criteria>,
        fields: &[&str],
        options: &SearchOptions,
    ) -> Result<Vec<Record>> {
        let domain = normalize_domains(criteria);
        let mut kwargs = options.to_kwargs();
        insert_fields(&mut kwargs, fields);
        self.call("search_read", vec![Value::Array(domain)], kwargs)
            .await
    }

    pub async fn read(&self, ids: &[i64], fields: &[&str]) -> Result<Vec<Record>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut kwargs = Map::new();
        insert_fields(&mut kwargs, fields);
        self.call("read", vec![Value::from(ids.to_vec())], kwargs)
            .await
    }

    /// Reads one record; `None` when the id does not exist.
    pub async fn find(&self, id: i64, fields: &[&str]) -> Result<Option<Record>> {
        Ok(self.read(&[id], fields).await?.into_iter().next())
    }

    pub async fn create<K, I>(&self, data: I) -> Result<i64>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldValue)>,
    {
        let values = non_empty_payload(normalize_data(data), "create")?;
        self.call("create", vec![Value::Object(values)], Map::new())
            .await
    }

    pub async fn write<K, I>(&self, ids: &[i64], data: I) -> Result<bool>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldValue)>,
    {
        let values = non_empty_payload(normalize_data(data), "write")?;
        if ids.is_empty() {
            return Ok(true);
        }

        self.call(
            "write",
            vec![Value::from(ids.to_vec()), Value::Object(values)],
            Map::new(),
        )
        .await
    }

    pub async fn unlink(&self, ids: &[i64]) -> Result<bool> {
        if ids.is_empty() {
            return Ok(true);
        }

        self.call("unlink", vec![Value::from(ids.to_vec())], Map::new())
            .await
    }

    /// Field metadata keyed by field name, limited to `attributes` when given.
    pub async fn fields_get(&self, attributes: &[&str]) -> Result<Map<String, Value>> {
        let mut kwargs = Map::new();
        if !attributes.is_empty() {
            kwargs.insert("attributes".to_string(), Value::from(attributes.to_vec()));
        }
        self.call("fields_get", Vec::new(), kwargs).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        args: Vec<Value>,
        kwargs: Map<String, Value>,
    ) -> Result<T> {
        let result = self
            .client
            .execute_kw(&self.model, method, args, kwargs)
            .await?;

        serde_json::from_value(result).map_err(|e| {
            warn!(model = %self.model, method, "Unexpected response shape: {e}");
            ClientError::UnexpectedResponse(format!("{}.{}: {}", self.model, method, e))
        })
    }
}

fn insert_fields(kwargs: &mut Map<String, Value>, fields: &[&str]) {
    if !fields.is_empty() {
        kwargs.insert("fields".to_string(), Value::from(fields.to_vec()));
    }
}

fn non_empty_payload(values: Map<String, Value>, method: &str) -> Result<Map<String, Value>> {
    if values.is_empty() {
        return Err(DomainError::InvalidExpression(format!(
            "{method} requires at least one field value"
        ))
        .into());
    }
    Ok(values)
}
