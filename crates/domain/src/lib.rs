//! Domain expressions for the remote search API.
//!
//! Filters are built as a tree of [`Comparison`], [`CompositeDomain`] and
//! [`CustomDomain`] nodes and rendered into the flat prefix ("Polish")
//! notation the remote engine expects:
//!
//! ```text
//! and![eq("state", "done"), gt("amount", 10), lt("amount", 50)]
//!     -> ["&", ["state", "=", "done"], "&", ["amount", ">", 10], ["amount", "<", 50]]
//! ```
//!
//! Trees carry no locking. Build and render them in one place, or share them
//! read-only.

pub mod ast;
pub mod build;
pub mod command;
pub mod error;
pub mod macros;
pub mod render;

pub use ast::{
    comparison::Comparison,
    composite::CompositeDomain,
    custom::CustomDomain,
    expr::Expression,
    operator::{ComparisonOperator, LogicalOperator},
};
pub use build::{
    builder::DomainBuilder,
    criteria::{Criteria, normalize_domains, normalize_value},
    data::{FieldValue, normalize_data},
};
pub use command::{Command, CommandCode};
pub use error::{DomainError, Result};
pub use render::{Render, Renderer};
