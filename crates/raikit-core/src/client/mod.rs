//! High-level call-site wrappers: one method per node action.
//!
//! Every wrapper builds an [`RpcRequest`], sends it through the configured
//! [`Transport`], and extracts the field(s) the action documents. The node
//! reports application failures as an `error` field with HTTP 200; the
//! client surfaces those as [`RpcError::Node`] before any extraction.

mod accounts;
mod blocks;
mod node;
mod units;
mod wallet;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RpcError;
use crate::rpc::{Endpoint, HttpTransport, Response, RpcRequest, Transport};
use crate::units::RawAmount;

/// Client for a rai_node RPC endpoint.
///
/// Generic over the transport so wrappers can be unit-tested against a
/// mock; `connect` gives the HTTP default.
pub struct NodeClient<T: Transport = HttpTransport> {
    transport: T,
}

impl NodeClient<HttpTransport> {
    pub fn connect(endpoint: Endpoint) -> Self {
        NodeClient {
            transport: HttpTransport::new(endpoint),
        }
    }
}

impl<T: Transport> NodeClient<T> {
    pub fn with_transport(transport: T) -> Self {
        NodeClient { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request` and reject responses carrying a node-level `error`.
    async fn call(&self, request: RpcRequest) -> Result<Response, RpcError> {
        let response = self.transport.send(&request).await?;
        if let Some(message) = response.get("error").and_then(Value::as_str) {
            return Err(RpcError::Node(message.to_owned()));
        }
        Ok(response)
    }
}

// ==============================================================================
// Field Extraction Helpers
// ==============================================================================

fn expect_field<'a>(
    response: &'a Response,
    action: &'static str,
    field: &'static str,
) -> Result<&'a Value, RpcError> {
    response
        .get(field)
        .ok_or(RpcError::MissingField { action, field })
}

fn expect_str(
    response: &Response,
    action: &'static str,
    field: &'static str,
) -> Result<String, RpcError> {
    expect_field(response, action, field)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| RpcError::InvalidField {
            action,
            field,
            message: "expected a string".into(),
        })
}

/// Integers arrive as decimal strings ("1000"); accept a bare JSON number
/// too, since the transport imposes no shape.
fn expect_u64(
    response: &Response,
    action: &'static str,
    field: &'static str,
) -> Result<u64, RpcError> {
    let value = expect_field(response, action, field)?;
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| RpcError::InvalidField {
            action,
            field,
            message: format!("expected a decimal integer, got {value}"),
        })
}

fn expect_amount(
    response: &Response,
    action: &'static str,
    field: &'static str,
) -> Result<RawAmount, RpcError> {
    let value = expect_field(response, action, field)?;
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| RpcError::InvalidField {
            action,
            field,
            message: format!("expected a raw amount string, got {value}"),
        })
}

/// Pull `field` out of the response and decode it into `D`.
fn decode_field<D: DeserializeOwned>(
    mut response: Response,
    action: &'static str,
    field: &'static str,
) -> Result<D, RpcError> {
    let value = response
        .remove(field)
        .ok_or(RpcError::MissingField { action, field })?;
    serde_json::from_value(value).map_err(|e| RpcError::InvalidField {
        action,
        field,
        message: e.to_string(),
    })
}

/// Decode the whole response object into `D`.
fn decode_response<D: DeserializeOwned>(
    response: Response,
    action: &'static str,
) -> Result<D, RpcError> {
    serde_json::from_value(Value::Object(response)).map_err(|e| RpcError::InvalidField {
        action,
        field: "<response>",
        message: e.to_string(),
    })
}

/// The node expects booleans as "true"/"false" strings.
fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
