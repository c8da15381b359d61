//! Node RPC abstraction layer.
//!
//! Defines the [`Transport`] trait and provides the HTTP implementation
//! ([`HttpTransport`]) plus a test mock (`mock::MockTransport`).

mod http_transport;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use http_transport::HttpTransport;
pub use types::{Endpoint, Response, RpcRequest};

use async_trait::async_trait;

use crate::error::RpcError;

/// One best-effort request/response exchange with the remote node.
///
/// Implementations make exactly one attempt per call: no retry, no caching,
/// no client-side validation of request contents. The remote node is the
/// sole judge of request correctness.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Serialize `request`, POST it to the configured endpoint, and parse
    /// the response body as a JSON object.
    ///
    /// A non-success HTTP status maps to [`RpcError::Status`] rather than a
    /// panic or a retry; callers must branch and choose their own policy.
    /// Connection faults and malformed bodies surface as
    /// [`RpcError::Transport`] and [`RpcError::Malformed`].
    async fn send(&self, request: &RpcRequest) -> Result<Response, RpcError>;
}
