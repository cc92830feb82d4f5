//! Defines the rendering trait and the buffer that collects a prefix-notation domain.

use crate::ast::operator::LogicalOperator;
use serde_json::Value;

pub mod expr;

pub(crate) use expr::render_reduced;

/// A trait for any node that can be written into a domain stream.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Accumulates the flat sequence of operator symbols and terms.
#[derive(Debug, Default)]
pub struct Renderer {
    items: Vec<Value>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_operator(&mut self, operator: LogicalOperator) {
        self.items.push(Value::String(operator.symbol().to_string()));
    }

    /// Appends one term as a single nested element.
    pub fn push_term(&mut self, term: Vec<Value>) {
        self.items.push(Value::Array(term));
    }

    /// Appends already-rendered items without nesting them.
    pub fn push_items(&mut self, items: Vec<Value>) {
        self.items.extend(items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the renderer and returns the rendered domain.
    pub fn finish(self) -> Vec<Value> {
        self.items
    }
}
