use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RpcError;

use super::types::{Response, RpcRequest};
use super::Transport;

/// A mock transport for testing the call-site wrappers. Returns canned
/// responses keyed by action, populated via the builder pattern, and
/// records every request it receives for later assertions.
pub struct MockTransport {
    responses: HashMap<String, Response>,
    requests: Mutex<Vec<RpcRequest>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            responses: HashMap::new(),
        }
    }

    /// Requests seen so far, in call order.
    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }
}

pub struct MockTransportBuilder {
    responses: HashMap<String, Response>,
}

impl MockTransportBuilder {
    /// Register the response for `action`. `body` must be a JSON object.
    pub fn with_response(mut self, action: &str, body: Value) -> Self {
        let Value::Object(map) = body else {
            panic!("mock response for `{action}` must be a JSON object");
        };
        self.responses.insert(action.to_owned(), map);
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            responses: self.responses,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &RpcRequest) -> Result<Response, RpcError> {
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push(request.clone());
        self.responses
            .get(request.action())
            .cloned()
            .ok_or_else(|| RpcError::Node(format!("unknown action \"{}\"", request.action())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_canned_response_and_records_request() {
        let mock = MockTransport::builder()
            .with_response("block_count", serde_json::json!({"count": "10"}))
            .build();

        let response = mock
            .send(&RpcRequest::new("block_count"))
            .await
            .unwrap();
        assert_eq!(response["count"], "10");

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].action(), "block_count");
    }

    #[tokio::test]
    async fn unregistered_action_reports_node_error() {
        let mock = MockTransport::builder().build();
        let err = mock.send(&RpcRequest::new("version")).await.unwrap_err();
        assert!(matches!(err, RpcError::Node(_)));
    }
}
