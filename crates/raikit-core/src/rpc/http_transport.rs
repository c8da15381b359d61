use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, trace};

use crate::error::RpcError;

use super::types::{Endpoint, Response, RpcRequest};
use super::Transport;

// ==============================================================================
// HttpTransport — JSON-over-HTTP client for rai_node compatible endpoints
// ==============================================================================

/// Blocking-per-call HTTP transport.
///
/// Stateless across calls: holds only the immutable [`Endpoint`] and a
/// reqwest connection pool. Every `send` is a fresh round trip.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Endpoint,
}

impl HttpTransport {
    pub fn new(endpoint: Endpoint) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .tcp_nodelay(true)
            .build()
            .expect("reqwest client builder uses valid static config");

        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RpcRequest) -> Result<Response, RpcError> {
        if request.action().is_empty() {
            return Err(RpcError::EmptyAction);
        }
        debug!(
            rpc.action = request.action(),
            rpc.params = request.params().len(),
            "rpc call"
        );

        let response = self
            .client
            .post(self.endpoint.uri())
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            debug!(rpc.action = request.action(), %status, "rpc rejected");
            return Err(RpcError::Status(status));
        }

        let body = response.text().await?;
        debug!(rpc.action = request.action(), %status, body_len = body.len(), "rpc response");
        trace!(rpc.action = request.action(), body = %body, "rpc response body");

        let decoded: Response = serde_json::from_str(&body)?;
        Ok(decoded)
    }
}
