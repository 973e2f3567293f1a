use alglobo_core::{RequestRecord, ReservationId};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::app_config::GatewayConfig;
use crate::transport::{GatewayError, ReservationTransport};

const REQUEST_ROUTE: &str = "request";
const METRICS_ROUTE: &str = "metrics";

/// `ReservationTransport` over HTTP/JSON.
///
/// Routes are joined relative to the base url so a path prefix such as
/// `http://host/alglobo/` is kept.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            GatewayError::Transport(format!("Invalid base url {}: {}", config.base_url, e))
        })?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn url(&self, route: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(route)
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }
}

#[async_trait]
impl ReservationTransport for HttpTransport {
    async fn create_reservation(&self, request: &RequestRecord) -> Result<Value, GatewayError> {
        let url = self.url(REQUEST_ROUTE)?;
        debug!("POST {} {:?}", url, request);

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        read_body(response).await
    }

    async fn reservation_status(&self, id: &ReservationId) -> Result<Value, GatewayError> {
        let url = self.url(REQUEST_ROUTE)?;
        debug!("GET {} id={}", url, id);

        let response = self
            .client
            .get(url)
            .query(&[("id", id.as_str())])
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        read_body(response).await
    }

    async fn metrics(&self) -> Result<Value, GatewayError> {
        let url = self.url(METRICS_ROUTE)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        read_body(response).await
    }
}

async fn read_body(response: Response) -> Result<Value, GatewayError> {
    let status = response.status();
    let text = response.text().await.map_err(|e| {
        if e.is_decode() {
            GatewayError::Decode(e.to_string())
        } else {
            GatewayError::Transport(e.to_string())
        }
    })?;

    if status.is_success() {
        Ok(decode_body(&text).unwrap_or_else(|| Value::String(String::new())))
    } else {
        Err(GatewayError::Remote {
            status: status.as_u16(),
            body: decode_body(&text),
        })
    }
}

/// JSON when the body parses as JSON, otherwise the raw text as a string.
/// The create endpoint answers the new id as plain text.
fn decode_body(text: &str) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}
