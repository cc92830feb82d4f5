use domain::DomainError;
use serde_json::Value;
use thiserror::Error;

/// Failures reported by a [`Transport`](crate::transport::Transport).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransportError {
    /// The remote side answered with an error payload.
    #[error("Remote error {code}: {message}")]
    Remote {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    /// The request never got an answer.
    #[error("Connection error: {0}")]
    Connection(String),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Configuration text could not be deserialized.
    #[error("Failed to decode configuration: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The remote answer did not have the shape the method returns.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
