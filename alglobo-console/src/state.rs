use alglobo_core::ReservationId;
use alglobo_gateway::BatchGateway;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct AppState {
    pub gateway: BatchGateway,
}

/// What the operator sees: the pasted text, the last output and the ids
/// returned by the last accepted batch.
///
/// Held by the browser and sent along with every action. Actions take a
/// state and return a new one; the server keeps nothing between requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleState {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub reservation_ids: Vec<ReservationId>,
}

impl ConsoleState {
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }
}
