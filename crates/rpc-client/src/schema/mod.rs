pub mod cache;
pub mod field;
pub mod model;

pub use cache::SchemaCache;
pub use field::{FieldSchema, FieldType};
pub use model::ModelSchema;
