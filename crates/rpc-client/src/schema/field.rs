use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Char,
    Text,
    Html,
    Integer,
    Float,
    Monetary,
    Boolean,
    Date,
    Datetime,
    Binary,
    Selection,
    Reference,
    Json,
    Many2one,
    One2many,
    Many2many,
    #[serde(other)]
    Other,
}

impl FieldType {
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            FieldType::Many2one | FieldType::One2many | FieldType::Many2many
        )
    }

    /// Relations written through `[code, id, data]` commands.
    pub fn takes_commands(&self) -> bool {
        matches!(self, FieldType::One2many | FieldType::Many2many)
    }
}

/// One entry of a `fields_get` answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Filled from the `fields_get` key.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Human-readable label.
    #[serde(default)]
    pub string: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub readonly: bool,
    /// Target model of relational fields.
    #[serde(default)]
    pub relation: Option<String>,
    /// `(value, label)` pairs of selection fields.
    #[serde(default)]
    pub selection: Vec<(Value, String)>,
}
