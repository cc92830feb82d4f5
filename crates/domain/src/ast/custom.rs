use crate::ast::operator::LogicalOperator;
use serde_json::Value;

/// A hand-built domain fragment spliced into a tree as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomDomain {
    data: Vec<Value>,
}

impl CustomDomain {
    pub fn new(data: Vec<Value>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &[Value] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<Value>) {
        self.data = data;
    }

    pub fn into_data(self) -> Vec<Value> {
        self.data
    }

    pub fn to_array(&self) -> Vec<Value> {
        self.data.clone()
    }

    /// True when the data is one `[field, op, value]` tuple rather than a
    /// prefix stream or a list of terms.
    pub fn is_term(&self) -> bool {
        match self.data.first() {
            Some(Value::Array(_)) => false,
            Some(Value::String(head)) => head.parse::<LogicalOperator>().is_err(),
            _ => true,
        }
    }
}

impl From<Vec<Value>> for CustomDomain {
    fn from(data: Vec<Value>) -> Self {
        Self::new(data)
    }
}
