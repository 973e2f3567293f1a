//! In-memory reservation service. Answers like the real one, with knobs for
//! delays and failures.

use alglobo_core::{RequestRecord, ReservationId};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::transport::{GatewayError, ReservationTransport};

#[derive(Default)]
pub struct MockTransport {
    unavailable_airlines: HashSet<String>,
    delays: Vec<Duration>,
    offline: bool,
    metrics_error: Option<String>,
    reservations: RwLock<HashMap<String, RequestRecord>>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creating a reservation on this airline answers 404
    pub fn with_unavailable_airline(mut self, airline: &str) -> Self {
        self.unavailable_airlines.insert(airline.to_string());
        self
    }

    /// Delay for the n-th call received; calls past the end answer at once
    pub fn with_delays(mut self, delays: Vec<Duration>) -> Self {
        self.delays = delays;
        self
    }

    /// Every call fails at the transport level
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Metrics answers 500 with this body
    pub fn with_metrics_error(mut self, body: &str) -> Self {
        self.metrics_error = Some(body.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of calls that were waiting at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn enter(&self) -> Result<InFlight<'_>, GatewayError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        let guard = InFlight(&self.in_flight);

        if let Some(delay) = self.delays.get(n) {
            tokio::time::sleep(*delay).await;
        }
        if self.offline {
            return Err(GatewayError::Transport("connection refused".to_string()));
        }
        Ok(guard)
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

fn not_found(msg: String) -> GatewayError {
    GatewayError::Remote { status: 404, body: Some(Value::String(msg)) }
}

#[async_trait]
impl ReservationTransport for MockTransport {
    async fn create_reservation(&self, request: &RequestRecord) -> Result<Value, GatewayError> {
        let _guard = self.enter().await?;

        if self.unavailable_airlines.contains(request.airline()) {
            return Err(not_found(format!("Airline {} not found", request.airline())));
        }

        let mut reservations = self.reservations.write().await;
        let n = reservations.len() + 1;
        let id = format!("{:08x}-0000-4000-8000-{:012x}", n, n);
        reservations.insert(id.clone(), request.clone());

        Ok(Value::String(id))
    }

    async fn reservation_status(&self, id: &ReservationId) -> Result<Value, GatewayError> {
        let _guard = self.enter().await?;

        let reservations = self.reservations.read().await;
        let request = reservations
            .get(id.as_str())
            .ok_or_else(|| not_found("Request not found".to_string()))?;

        Ok(json!({
            "id": id.as_str(),
            "origin": request.origin(),
            "destiny": request.destiny(),
            "airline": request.airline(),
            "package": request.package(),
            "status": "PENDING",
        }))
    }

    async fn metrics(&self) -> Result<Value, GatewayError> {
        let _guard = self.enter().await?;

        if let Some(body) = &self.metrics_error {
            return Err(GatewayError::Remote {
                status: 500,
                body: Some(Value::String(body.clone())),
            });
        }

        let reservations = self.reservations.read().await;
        Ok(json!({ "n_reqs": reservations.len() }))
    }
}
