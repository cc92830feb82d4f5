//! Typed access to a remote business application's RPC API.
//!
//! Filters are built with the [`domain`] crate and passed through the
//! [`Repository`] and [`QueryBuilder`] to a caller-supplied [`Transport`].

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod repository;
pub mod schema;
pub mod transport;

pub use client::Client;
pub use config::{ClientConfig, EnvSource};
pub use error::{ClientError, Result, TransportError};
pub use query::{Direction, QueryBuilder};
pub use repository::{Record, Repository, SearchOptions};
pub use schema::{FieldSchema, FieldType, ModelSchema, SchemaCache};
pub use transport::Transport;
