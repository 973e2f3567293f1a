use serde_json::Value;

use crate::transport::GatewayError;

/// Result of a single call inside a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The service answered with a success payload
    Payload { value: Value },
    /// Failure sentinel. `detail` holds the error payload sent by the
    /// service, when there was one; it is shown to the operator but never
    /// treated as a success.
    Failed { detail: Option<Value> },
}

/// Position `i` holds the outcome of input item `i`.
pub type BatchResult = Vec<Outcome>;

impl Outcome {
    pub fn from_result(result: Result<Value, GatewayError>) -> Self {
        match result {
            Ok(value) => Outcome::Payload { value },
            Err(err) => Outcome::Failed {
                detail: err.remote_body().cloned(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Payload { .. })
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            Outcome::Payload { value } => Some(value),
            Outcome::Failed { .. } => None,
        }
    }

    /// The payload, or `Value::Null` for the sentinel
    pub fn as_value(&self) -> Value {
        self.payload().cloned().unwrap_or(Value::Null)
    }

    /// Single line shown in the console output: strings verbatim with line
    /// breaks escaped, other JSON compact, a failed call as its error payload
    /// or `null`.
    pub fn render(&self) -> String {
        let shown = match self {
            Outcome::Payload { value } => Some(value),
            Outcome::Failed { detail } => detail.as_ref(),
        };
        match shown {
            Some(Value::String(s)) => s.replace('\r', "\\r").replace('\n', "\\n"),
            Some(other) => other.to_string(),
            None => "null".to_string(),
        }
    }
}

/// Payload values of a batch, sentinels as `Value::Null`.
pub fn payload_values(results: &[Outcome]) -> Vec<Value> {
    results.iter().map(Outcome::as_value).collect()
}
