//! Write commands for one2many / many2many fields.
//!
//! Each command serializes as `[code, id, data]` with `0` standing in for an
//! unused slot.

use crate::error::{DomainError, Result};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandCode {
    Create = 0,
    Update = 1,
    Delete = 2,
    Remove = 3,
    Add = 4,
    Clear = 5,
    Replace = 6,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a new related record from `data` and link it.
    Create(Map<String, Value>),
    /// Update the linked record `id` with `data`.
    Update(i64, Map<String, Value>),
    /// Unlink and delete the record.
    Delete(i64),
    /// Unlink the record without deleting it.
    Remove(i64),
    /// Link an existing record.
    Add(i64),
    /// Unlink every record.
    Clear,
    /// Replace the linked set with `ids`.
    Replace(Vec<i64>),
}

impl Command {
    pub fn create(data: Map<String, Value>) -> Result<Self> {
        if data.is_empty() {
            return Err(DomainError::InvalidExpression(
                "create command requires a non-empty payload".to_string(),
            ));
        }
        Ok(Command::Create(data))
    }

    pub fn update(id: i64, data: Map<String, Value>) -> Result<Self> {
        if data.is_empty() {
            return Err(DomainError::InvalidExpression(format!(
                "update command for record {id} requires a non-empty payload"
            )));
        }
        Ok(Command::Update(id, data))
    }

    pub fn code(&self) -> CommandCode {
        match self {
            Command::Create(_) => CommandCode::Create,
            Command::Update(..) => CommandCode::Update,
            Command::Delete(_) => CommandCode::Delete,
            Command::Remove(_) => CommandCode::Remove,
            Command::Add(_) => CommandCode::Add,
            Command::Clear => CommandCode::Clear,
            Command::Replace(_) => CommandCode::Replace,
        }
    }

    pub fn to_array(&self) -> Vec<Value> {
        let (id, data) = match self {
            Command::Create(data) => (Value::from(0), Value::Object(data.clone())),
            Command::Update(id, data) => (Value::from(*id), Value::Object(data.clone())),
            Command::Delete(id) | Command::Remove(id) | Command::Add(id) => {
                (Value::from(*id), Value::from(0))
            }
            Command::Clear => (Value::from(0), Value::from(0)),
            Command::Replace(ids) => (Value::from(0), Value::from(ids.clone())),
        };
        vec![Value::from(self.code() as u8), id, data]
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}
