use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A node or command was built from missing or malformed data, including
    /// an unrecognized operator symbol.
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    /// Search criteria were neither empty, an expression, nor a field mapping.
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
