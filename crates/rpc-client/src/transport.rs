use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;

/// Sends one RPC call and returns the decoded result.
///
/// Implementations own the wire format and the session; a remote error
/// payload must come back as [`TransportError::Remote`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        service: &str,
        method: &str,
        args: Vec<Value>,
    ) -> Result<Value, TransportError>;
}
