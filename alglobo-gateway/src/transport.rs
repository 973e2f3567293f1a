use alglobo_core::{RequestRecord, ReservationId};
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// Network fault, timeout or anything that kept us from getting a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("Remote error {status}")]
    Remote { status: u16, body: Option<Value> },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Error payload the service sent back, if any
    pub fn remote_body(&self) -> Option<&Value> {
        match self {
            GatewayError::Remote { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

/// Calls exposed by the remote reservation service. One call per method,
/// no batching at this level.
#[async_trait]
pub trait ReservationTransport: Send + Sync {
    /// Create a reservation; the service answers with its identifier
    async fn create_reservation(&self, request: &RequestRecord) -> Result<Value, GatewayError>;

    /// Read the current status of a reservation
    async fn reservation_status(&self, id: &ReservationId) -> Result<Value, GatewayError>;

    /// Aggregate metrics of the service
    async fn metrics(&self) -> Result<Value, GatewayError>;
}
