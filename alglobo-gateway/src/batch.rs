use alglobo_core::{RequestRecord, ReservationId};
use futures::future::join_all;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::outcome::{BatchResult, Outcome};
use crate::transport::ReservationTransport;

/// Fans a batch out into one call per item and joins on all of them.
///
/// Every call is started before any is awaited. The join waits for all
/// calls to settle; a failed call becomes a sentinel at its own position
/// and never cuts the batch short. There are no retries.
#[derive(Clone)]
pub struct BatchGateway {
    transport: Arc<dyn ReservationTransport>,
}

impl BatchGateway {
    pub fn new(transport: Arc<dyn ReservationTransport>) -> Self {
        Self { transport }
    }

    pub async fn submit_batch(&self, records: &[RequestRecord]) -> BatchResult {
        info!("Submitting batch of {} requests", records.len());

        let calls = records.iter().enumerate().map(|(idx, record)| async move {
            let result = self.transport.create_reservation(record).await;
            if let Err(e) = &result {
                warn!(
                    "Request #{} {}->{} ({}) failed: {}",
                    idx,
                    record.origin(),
                    record.destiny(),
                    record.airline(),
                    e
                );
            }
            Outcome::from_result(result)
        });

        let results = join_all(calls).await;
        log_summary("submit", &results);
        results
    }

    pub async fn query_batch(&self, ids: &[ReservationId]) -> BatchResult {
        info!("Querying status of {} reservations", ids.len());

        let calls = ids.iter().map(|id| async move {
            let result = self.transport.reservation_status(id).await;
            if let Err(e) = &result {
                warn!("Status of {} failed: {}", id, e);
            }
            Outcome::from_result(result)
        });

        let results = join_all(calls).await;
        log_summary("status", &results);
        results
    }

    /// Metrics payload pretty printed. On failure the error payload sent by
    /// the service, if any, comes back in `Err`.
    pub async fn fetch_metrics(&self) -> Result<String, Option<Value>> {
        match self.transport.metrics().await {
            Ok(value) => serde_json::to_string_pretty(&value).map_err(|e| {
                warn!("Failed to format metrics: {}", e);
                None
            }),
            Err(e) => {
                warn!("Fetching metrics failed: {}", e);
                Err(e.remote_body().cloned())
            }
        }
    }
}

fn log_summary(kind: &str, results: &[Outcome]) {
    let ok = results.iter().filter(|r| r.is_success()).count();
    info!("Batch {} settled: {} ok, {} failed", kind, ok, results.len() - ok);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use alglobo_core::valid_reservation_ids;
    use crate::outcome::payload_values;
    use serde_json::json;
    use std::time::Duration;
    use crate::app_config::GatewayConfig;
    use crate::http::HttpTransport;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn records(airlines: &[&str]) -> Vec<RequestRecord> {
        airlines
            .iter()
            .map(|a| RequestRecord::new("EZE", "JFK", *a, false))
            .collect()
    }

    #[tokio::test]
    async fn test_submit_keeps_input_order_when_calls_settle_backwards() {
        // first call is the slowest, last call the fastest
        let delays = (0..5).rev().map(|i| Duration::from_millis(20 * i + 5)).collect();
        let transport = Arc::new(MockTransport::new().with_delays(delays));
        let gateway = BatchGateway::new(transport.clone());

        let results = gateway.submit_batch(&records(&["A0", "A1", "A2", "A3", "A4"])).await;

        assert_eq!(results.len(), 5);
        assert_eq!(transport.max_in_flight(), 5);

        let ids = valid_reservation_ids(&payload_values(&results));
        assert_eq!(ids.len(), 5);

        // every id maps back to the record at the same position
        let statuses = gateway.query_batch(&ids).await;
        for (i, status) in statuses.iter().enumerate() {
            assert_eq!(status.payload().unwrap()["airline"], json!(format!("A{}", i)));
        }
    }

    #[tokio::test]
    async fn test_failed_call_does_not_abort_siblings() {
        let transport = Arc::new(
            MockTransport::new()
                .with_unavailable_airline("Ghost Air")
                .with_delays(vec![Duration::from_millis(30), Duration::ZERO, Duration::from_millis(10)]),
        );
        let gateway = BatchGateway::new(transport.clone());

        let results = gateway.submit_batch(&records(&["LATAM", "Ghost Air", "Iberia"])).await;

        assert_eq!(results.len(), 3);
        assert!(results[0].is_success());
        assert_eq!(
            results[1],
            Outcome::Failed { detail: Some(json!("Airline Ghost Air not found")) }
        );
        assert!(results[2].is_success());
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn test_all_failed_batch_is_fully_populated() {
        let gateway = BatchGateway::new(Arc::new(MockTransport::new().offline()));

        let results = gateway.submit_batch(&records(&["A", "B", "C", "D"])).await;

        assert_eq!(results, vec![Outcome::Failed { detail: None }; 4]);
        assert!(valid_reservation_ids(&payload_values(&results)).is_empty());
    }

    #[tokio::test]
    async fn test_empty_batch_makes_no_calls() {
        let transport = Arc::new(MockTransport::new());
        let gateway = BatchGateway::new(transport.clone());

        assert!(gateway.submit_batch(&[]).await.is_empty());
        assert!(gateway.query_batch(&[]).await.is_empty());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_query_unknown_id_is_sentinel() {
        let gateway = BatchGateway::new(Arc::new(MockTransport::new()));
        let created = gateway.submit_batch(&records(&["LATAM"])).await;
        let mut ids = valid_reservation_ids(&payload_values(&created));
        ids.push(ReservationId::parse("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap());

        let results = gateway.query_batch(&ids).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].payload().unwrap()["status"], json!("PENDING"));
        assert_eq!(results[1], Outcome::Failed { detail: Some(json!("Request not found")) });
    }

    #[tokio::test]
    async fn test_query_is_idempotent() {
        let gateway = BatchGateway::new(Arc::new(MockTransport::new()));
        let created = gateway.submit_batch(&records(&["LATAM", "Iberia"])).await;
        let ids = valid_reservation_ids(&payload_values(&created));

        let first = gateway.query_batch(&ids).await;
        let second = gateway.query_batch(&ids).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_query_keeps_input_order_when_calls_settle_backwards() {
        // creates (calls 0..6) answer at once, status calls (6..12) slowest first
        let mut delays = vec![Duration::ZERO; 6];
        delays.extend((0..6).rev().map(|i| Duration::from_millis(15 * i + 5)));
        let slow = Arc::new(MockTransport::new().with_delays(delays));
        let slow_gateway = BatchGateway::new(slow.clone());

        let created = slow_gateway.submit_batch(&records(&["A0", "A1", "A2", "A3", "A4", "A5"])).await;
        let ids = valid_reservation_ids(&payload_values(&created));
        assert_eq!(ids.len(), 6);

        let statuses = slow_gateway.query_batch(&ids).await;

        assert_eq!(statuses.len(), 6);
        assert_eq!(slow.max_in_flight(), 6);
        for (i, status) in statuses.iter().enumerate() {
            let payload = status.payload().unwrap();
            assert_eq!(payload["id"], json!(ids[i].as_str()));
            assert_eq!(payload["airline"], json!(format!("A{}", i)));
        }
    }

    #[tokio::test]
    async fn test_fetch_metrics() {
        let gateway = BatchGateway::new(Arc::new(MockTransport::new()));
        gateway.submit_batch(&records(&["LATAM"])).await;

        let text = gateway.fetch_metrics().await.unwrap();
        assert_eq!(text, "{\n  \"n_reqs\": 1\n}");

        let offline = BatchGateway::new(Arc::new(MockTransport::new().offline()));
        assert_eq!(offline.fetch_metrics().await, Err(None));
    }

    #[tokio::test]
    async fn test_fetch_metrics_keeps_server_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/metrics"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Metrics Collector error"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&GatewayConfig {
            base_url: format!("{}/", server.uri()),
            timeout_seconds: 5,
        })
        .unwrap();
        let gateway = BatchGateway::new(Arc::new(transport));

        assert_eq!(
            gateway.fetch_metrics().await,
            Err(Some(json!("Metrics Collector error")))
        );
    }
}
