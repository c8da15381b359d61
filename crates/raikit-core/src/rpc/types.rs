//! Request and response value types for the node's action RPC.

use serde::Serialize;
use serde_json::{Map, Value};

/// A parsed RPC response: exactly the JSON object the node returned.
///
/// The transport performs no filtering, coercion, or validation of its
/// contents; extracting and checking fields is the caller's job.
pub type Response = Map<String, Value>;

// ==============================================================================
// Endpoint
// ==============================================================================

/// Network address of the remote node's RPC listener, plus an optional
/// shared secret. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Endpoint {
    uri: String,
    secret: Option<String>,
}

impl Endpoint {
    pub fn new(uri: impl Into<String>) -> Self {
        Endpoint {
            uri: uri.into(),
            secret: None,
        }
    }

    pub fn with_secret(uri: impl Into<String>, secret: impl Into<String>) -> Self {
        Endpoint {
            uri: uri.into(),
            secret: Some(secret.into()),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The shared secret, if configured.
    ///
    /// The transport never injects it into requests; callers that need it
    /// place it where the node's protocol expects (a per-action body field).
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }
}

// ==============================================================================
// RpcRequest
// ==============================================================================

/// One RPC call: an action name plus named parameters.
///
/// Serializes to a single flat JSON object with the action under the
/// `action` key. Built per call and discarded after serialization.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    action: String,
    #[serde(flatten)]
    params: Map<String, Value>,
}

impl RpcRequest {
    pub fn new(action: impl Into<String>) -> Self {
        RpcRequest {
            action: action.into(),
            params: Map::new(),
        }
    }

    /// Add a named parameter. Accepts strings, numbers, booleans, and
    /// sequences thereof.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }
}
