use crate::{
    config::ClientConfig,
    error::Result,
    repository::Repository,
    transport::Transport,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

pub const OBJECT_SERVICE: &str = "object";
pub const EXECUTE_KW: &str = "execute_kw";

/// Dispatches model method calls through a [`Transport`].
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
}

impl Client {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn repository(&self, model: impl Into<String>) -> Repository {
        Repository::new(self.clone(), model)
    }

    /// Calls `method` on `model` with positional `args` and keyword `kwargs`.
    ///
    /// The configured default context is merged into `kwargs["context"]`;
    /// keys already present in the call take precedence.
    pub async fn execute_kw(
        &self,
        model: &str,
        method: &str,
        args: Vec<Value>,
        kwargs: Map<String, Value>,
    ) -> Result<Value> {
        let kwargs = self.merge_context(kwargs);
        debug!(model, method, "Dispatching {EXECUTE_KW}");

        let payload = vec![
            Value::from(self.config.database.as_str()),
            Value::from(self.config.uid),
            Value::from(self.config.password.as_str()),
            Value::from(model),
            Value::from(method),
            Value::Array(args),
            Value::Object(kwargs),
        ];

        let result = self
            .transport
            .request(OBJECT_SERVICE, EXECUTE_KW, payload)
            .await?;
        Ok(result)
    }

    fn merge_context(&self, mut kwargs: Map<String, Value>) -> Map<String, Value> {
        if self.config.context.is_empty() {
            return kwargs;
        }

        let context = kwargs
            .entry("context")
            .or_insert_with(|| Value::Object(Map::new()));

        match context {
            Value::Object(context) => {
                for (key, value) in &self.config.context {
                    context.entry(key.clone()).or_insert_with(|| value.clone());
                }
            }
            other => warn!("Keeping non-object call context as is: {other}"),
        }

        kwargs
    }
}
