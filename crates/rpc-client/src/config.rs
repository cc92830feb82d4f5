//! Connection settings loaded from the environment, `.env` files or JSON.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{collections::HashMap, fmt, fs, path::Path};

pub const DATABASE_VAR: &str = "ODOO_DATABASE";
pub const UID_VAR: &str = "ODOO_UID";
pub const PASSWORD_VAR: &str = "ODOO_PASSWORD";
pub const LANG_VAR: &str = "ODOO_LANG";
pub const TZ_VAR: &str = "ODOO_TZ";

/// Key/value settings collected from the process environment and `.env` files.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Load variables from a .env file, overriding existing keys.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("Failed to read env file {}: {}", path.display(), e))
        })?;

        self.load_str(&content)
    }

    /// Parses `KEY=VALUE` lines; blank lines and `#` comments are skipped.
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ClientError::Config(format!(
                    "Invalid env file: malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(ClientError::Config(format!(
                    "Invalid env file: empty key at line {}",
                    line_num + 1
                )));
            }

            self.vars.insert(key.to_string(), unquote(value));
        }

        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ClientError::Config(format!("Missing required setting {key}")))
    }
}

fn unquote(value: &str) -> String {
    let value = value.trim();

    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return value[1..value.len() - 1].to_string();
        }
    }

    value.to_string()
}

/// Credentials and default context sent with every `execute_kw` call.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub database: String,
    pub uid: i64,
    pub password: String,
    /// Default keys of the RPC `context` argument, e.g. `lang` or `tz`.
    #[serde(default)]
    pub context: Map<String, Value>,
}

impl ClientConfig {
    pub fn new(database: impl Into<String>, uid: i64, password: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            uid,
            password: password.into(),
            context: Map::new(),
        }
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn from_env() -> Result<Self> {
        Self::from_source(&EnvSource::from_process())
    }

    pub fn from_source(source: &EnvSource) -> Result<Self> {
        let uid = source.require(UID_VAR)?;
        let uid = uid
            .parse::<i64>()
            .map_err(|_| ClientError::Config(format!("{UID_VAR} must be an integer, got '{uid}'")))?;

        let mut config = Self::new(source.require(DATABASE_VAR)?, uid, source.require(PASSWORD_VAR)?);
        for (var, key) in [(LANG_VAR, "lang"), (TZ_VAR, "tz")] {
            if let Some(value) = source.get(var).filter(|v| !v.is_empty()) {
                config.context.insert(key.to_string(), Value::from(value));
            }
        }

        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("database", &self.database)
            .field("uid", &self.uid)
            .field("password", &"***")
            .field("context", &self.context)
            .finish()
    }
}
